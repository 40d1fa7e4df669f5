//! Tabbed navigation for Dioxus: a tab strip with per-tab overflow menus,
//! arrow-key navigation and roving tabindex.
//!
//! Call [`styles::register`] once at startup so the tab menus are laid out.

pub mod dropdown;
pub mod focus;
pub mod key;
pub mod menu;
pub mod selection;
pub mod styles;
pub mod tab;
pub mod tab_item;
pub mod tab_menu;
pub mod tab_nav;
pub mod tab_panel;
pub mod tabs;
pub mod util;

#[cfg(test)]
mod test_util;

pub use key::TabKey;
pub use menu::{ButtonType, IconSize, MenuConfig, MenuItem, MenuSource};
pub use tab::{Tab, TabsType};
pub use tabs::Tabs;
