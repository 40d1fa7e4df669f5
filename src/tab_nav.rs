#![allow(non_snake_case)]

use std::rc::Rc;

use dioxus::prelude::*;

use crate::key::TabKey;
use crate::tab::{Tab, TabsType};
use crate::tab_item::TabItem;

#[component]
pub fn TabNav(
    tabs_type: TabsType,
    #[props(!optional)] active_key: Option<TabKey>,
    tabs: Vec<Tab>,
    on_tab_click: EventHandler<TabKey>,
    on_tab_key_down: EventHandler<(TabKey, KeyboardEvent)>,
    on_mount: EventHandler<(TabKey, Rc<MountedData>)>,
    on_unmount: EventHandler<TabKey>,
) -> Element {
    rsx! {
        ul { class: "slds-tabs--{tabs_type}__nav", role: "tablist",
            for (i , tab) in tabs.iter().enumerate() {
                TabItem {
                    key: "{i}-{tab.event_key}",
                    tabs_type,
                    active_key: active_key.clone(),
                    event_key: tab.event_key.clone(),
                    title: tab.title.clone(),
                    menu: tab.menu.clone(),
                    menu_icon: tab.menu_icon.clone(),
                    on_tab_click,
                    on_tab_key_down,
                    on_mount,
                    on_unmount,
                }
            }
        }
    }
}
