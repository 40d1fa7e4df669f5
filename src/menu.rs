use std::fmt;

use dioxus::prelude::*;
use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct MenuItem {
    pub label: String,
    pub value: String,
    #[serde(default)]
    pub disabled: bool,
}

impl MenuItem {
    pub fn new(label: impl Into<String>, value: impl Into<String>) -> Self {
        MenuItem {
            label: label.into(),
            value: value.into(),
            disabled: false,
        }
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum ButtonType {
    #[default]
    Neutral,
    Brand,
    Icon,
    IconBare,
    IconContainer,
    IconBorder,
}

impl fmt::Display for ButtonType {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str(match self {
            ButtonType::Neutral => "neutral",
            ButtonType::Brand => "brand",
            ButtonType::Icon => "icon",
            ButtonType::IconBare => "icon-bare",
            ButtonType::IconContainer => "icon-container",
            ButtonType::IconBorder => "icon-border",
        })
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum IconSize {
    XSmall,
    Small,
    #[default]
    Medium,
    Large,
}

impl fmt::Display for IconSize {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str(match self {
            IconSize::XSmall => "x-small",
            IconSize::Small => "small",
            IconSize::Medium => "medium",
            IconSize::Large => "large",
        })
    }
}

/// Overrides for a tab's dropdown. Unset fields keep the tab-menu defaults.
#[derive(Clone, Default, PartialEq)]
pub struct MenuConfig {
    pub icon: Option<String>,
    pub button_type: Option<ButtonType>,
    pub icon_size: Option<IconSize>,
    pub nubbin_top: Option<bool>,
    pub class: Option<String>,
    pub on_item_click: Option<EventHandler<String>>,
}

/// Where a tab's overflow menu comes from.
#[derive(Clone, PartialEq)]
pub enum MenuSource {
    /// A configured menu carrying its own entries.
    Prebuilt {
        config: MenuConfig,
        items: Vec<MenuItem>,
    },
    /// Bare entries, default configuration.
    Items(Vec<MenuItem>),
}

impl MenuSource {
    pub fn resolve(&self) -> (MenuConfig, Vec<MenuItem>) {
        match self {
            MenuSource::Prebuilt { config, items } => (config.clone(), items.clone()),
            MenuSource::Items(items) => (MenuConfig::default(), items.clone()),
        }
    }
}
