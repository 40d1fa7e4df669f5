use std::fmt;

use serde::{Deserialize, Serialize};

/// Identifies a tab among its siblings.
///
/// Strings and numbers never compare equal to each other, so `"1"` and `1`
/// are two distinct keys.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(untagged)]
pub enum TabKey {
    Num(i64),
    Str(String),
}

impl fmt::Display for TabKey {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            TabKey::Num(n) => write!(f, "{n}"),
            TabKey::Str(s) => write!(f, "{s}"),
        }
    }
}

impl From<&str> for TabKey {
    fn from(s: &str) -> Self {
        TabKey::Str(s.to_owned())
    }
}

impl From<String> for TabKey {
    fn from(s: String) -> Self {
        TabKey::Str(s)
    }
}

impl From<i64> for TabKey {
    fn from(n: i64) -> Self {
        TabKey::Num(n)
    }
}

impl From<i32> for TabKey {
    fn from(n: i32) -> Self {
        TabKey::Num(n.into())
    }
}
