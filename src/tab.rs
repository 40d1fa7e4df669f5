use std::convert::Infallible;
use std::fmt;
use std::str::FromStr;

use dioxus::prelude::*;
use serde::{Deserialize, Serialize};

use crate::key::TabKey;
use crate::menu::{MenuConfig, MenuItem, MenuSource};

/// Tab strip flavour. Anything that isn't `scoped` renders as `default`.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase", from = "String")]
pub enum TabsType {
    #[default]
    Default,
    Scoped,
}

impl FromStr for TabsType {
    type Err = Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(match s {
            "scoped" => TabsType::Scoped,
            _ => TabsType::Default,
        })
    }
}

impl From<String> for TabsType {
    fn from(s: String) -> Self {
        match s.parse() {
            Ok(t) => t,
            Err(never) => match never {},
        }
    }
}

impl fmt::Display for TabsType {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str(match self {
            TabsType::Default => "default",
            TabsType::Scoped => "scoped",
        })
    }
}

/// One tab: its label, optional overflow menu and the pane shown when it is
/// active.
#[derive(Clone, PartialEq)]
pub struct Tab {
    pub event_key: TabKey,
    pub title: String,
    pub menu: Option<MenuSource>,
    pub menu_icon: Option<String>,
    pub content: Element,
}

impl Tab {
    pub fn new(event_key: impl Into<TabKey>, title: impl Into<String>, content: Element) -> Self {
        Tab {
            event_key: event_key.into(),
            title: title.into(),
            menu: None,
            menu_icon: None,
            content,
        }
    }

    pub fn with_menu(mut self, config: MenuConfig, items: Vec<MenuItem>) -> Self {
        self.menu = Some(MenuSource::Prebuilt { config, items });
        self
    }

    pub fn with_menu_items(mut self, items: Vec<MenuItem>) -> Self {
        self.menu = Some(MenuSource::Items(items));
        self
    }

    pub fn with_menu_icon(mut self, icon: impl Into<String>) -> Self {
        self.menu_icon = Some(icon.into());
        self
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn test_tabs_type_is_permissive() {
        assert_eq!("scoped".parse::<TabsType>(), Ok(TabsType::Scoped));
        assert_eq!("default".parse::<TabsType>(), Ok(TabsType::Default));
        assert_eq!("vertical".parse::<TabsType>(), Ok(TabsType::Default));
        assert_eq!(TabsType::Scoped.to_string(), "scoped");

        let parsed: Vec<TabsType> = serde_json::from_str(r#"["scoped", "other"]"#).unwrap();
        assert_eq!(parsed, vec![TabsType::Scoped, TabsType::Default]);
        assert_eq!(serde_json::to_string(&TabsType::Scoped).unwrap(), r#""scoped""#);
    }

    #[test]
    fn test_builder() {
        let tab = Tab::new("a", "Alpha", VNode::empty())
            .with_menu_items(vec![MenuItem::new("Close", "close")])
            .with_menu_icon("settings");
        assert_eq!(tab.event_key, TabKey::from("a"));
        assert_eq!(tab.menu_icon.as_deref(), Some("settings"));
        assert!(matches!(tab.menu, Some(MenuSource::Items(ref items)) if items.len() == 1));

        let tab = tab.with_menu(MenuConfig::default(), vec![]);
        assert!(matches!(tab.menu, Some(MenuSource::Prebuilt { ref items, .. }) if items.is_empty()));
    }
}
