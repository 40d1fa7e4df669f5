#![allow(non_snake_case)]

use std::rc::Rc;

use dioxus::prelude::*;

use crate::key::TabKey;
use crate::menu::MenuSource;
use crate::tab::TabsType;
use crate::tab_menu::TabMenu;
use crate::util::class_names;

/// A single tab label, plus its overflow menu when it has entries.
///
/// Only the active tab sits in the keyboard tab order (`tabindex` 0); the
/// others get -1 and are reached with the arrow keys.
#[component]
pub fn TabItem(
    tabs_type: TabsType,
    #[props(!optional)] active_key: Option<TabKey>,
    event_key: TabKey,
    title: String,
    #[props(!optional)] menu: Option<MenuSource>,
    #[props(!optional)] menu_icon: Option<String>,
    on_tab_click: EventHandler<TabKey>,
    on_tab_key_down: EventHandler<(TabKey, KeyboardEvent)>,
    on_mount: EventHandler<(TabKey, Rc<MountedData>)>,
    on_unmount: EventHandler<TabKey>,
) -> Element {
    let drop_key = event_key.clone();
    use_drop(move || on_unmount.call(drop_key));

    let is_active = active_key.as_ref() == Some(&event_key);
    let type_class = format!("slds-tabs--{tabs_type}__item");
    let item_class = class_names([
        Some("slds-tabs__item"),
        Some(type_class.as_str()),
        Some("slds-text-heading--label"),
        is_active.then_some("slds-active"),
        menu.is_some().then_some("react-slds-tab-with-menu"),
    ]);
    let tab_menu = menu
        .as_ref()
        .map(MenuSource::resolve)
        .filter(|(_, items)| !items.is_empty())
        .map(|(config, items)| {
            rsx! {
                TabMenu { icon: menu_icon.clone(), config, items }
            }
        });

    let click_key = event_key.clone();
    let down_key = event_key.clone();
    let mount_key = event_key.clone();
    rsx! {
        li { class: "{item_class}", role: "presentation",
            span { class: "react-slds-tab-item-inner",
                a {
                    class: "slds-tabs--{tabs_type}__link",
                    role: "tab",
                    tabindex: if is_active { "0" } else { "-1" },
                    aria_selected: if is_active { "true" } else { "false" },
                    onclick: move |_| on_tab_click.call(click_key.clone()),
                    onkeydown: move |evt| on_tab_key_down.call((down_key.clone(), evt)),
                    onmounted: move |evt| on_mount.call((mount_key.clone(), evt.data())),
                    "{title}"
                }
                {tab_menu}
            }
        }
    }
}
