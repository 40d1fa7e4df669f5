#![allow(non_snake_case)]

use dioxus::prelude::*;

use crate::tab::TabsType;

#[component]
pub fn TabPanel(tabs_type: TabsType, active: bool, children: Element) -> Element {
    let visibility = if active { "slds-show" } else { "slds-hide" };
    rsx! {
        div {
            class: "slds-tabs--{tabs_type}__content {visibility}",
            role: "tabpanel",
            {children}
        }
    }
}
