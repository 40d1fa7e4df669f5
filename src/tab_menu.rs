#![allow(non_snake_case)]

use dioxus::prelude::*;

use crate::dropdown::DropdownButton;
use crate::menu::{ButtonType, IconSize, MenuConfig, MenuItem};
use crate::util::class_names;

/// Overflow menu shown beside a tab's label.
#[component]
pub fn TabMenu(
    #[props(!optional)] icon: Option<String>,
    config: MenuConfig,
    items: Vec<MenuItem>,
) -> Element {
    let class = class_names([Some("react-slds-tab-menu"), config.class.as_deref()]);
    let on_item_click = config.on_item_click;
    rsx! {
        DropdownButton {
            class,
            icon: config.icon.or(icon).unwrap_or_else(|| "down".to_string()),
            button_type: config.button_type.unwrap_or(ButtonType::IconBare),
            icon_size: config.icon_size.unwrap_or(IconSize::Small),
            nubbin_top: config.nubbin_top.unwrap_or(true),
            on_item_click: move |value: String| {
                if let Some(handler) = on_item_click {
                    handler.call(value);
                }
            },
            items,
        }
    }
}
