use std::collections::HashMap;

use crate::key::TabKey;

/// Mounted tab controls, by key.
///
/// Tabs register on mount and unregister on unmount. Lookups go through the
/// active key only, so a handle for a tab that is not active is never handed
/// out.
#[derive(Debug)]
pub struct FocusRegistry<H> {
    handles: HashMap<TabKey, H>,
}

impl<H> Default for FocusRegistry<H> {
    fn default() -> Self {
        FocusRegistry {
            handles: HashMap::new(),
        }
    }
}

impl<H: Clone> FocusRegistry<H> {
    pub fn register(&mut self, key: TabKey, handle: H) {
        tracing::debug!("register handle for {key}");
        self.handles.insert(key, handle);
    }

    pub fn unregister(&mut self, key: &TabKey) {
        if self.handles.remove(key).is_some() {
            tracing::debug!("unregister handle for {key}");
        }
    }

    pub fn active(&self, active_key: Option<&TabKey>) -> Option<H> {
        active_key.and_then(|k| self.handles.get(k)).cloned()
    }
}
