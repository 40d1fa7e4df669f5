//! Tab-menu CSS, injected once at startup with [`register`].

use wasm_bindgen::prelude::*;

use crate::util;

pub const STYLE_ID: &str = "react-slds-tab-menu";

/// Selector groups and the declaration block they share.
const RULES: &[&[&str]] = &[
    &[
        ".slds-tabs__item.react-slds-tab-with-menu",
        "{ position: relative !important; overflow: visible !important; }",
    ],
    &[
        ".slds-tabs__item.react-slds-tab-with-menu > .react-slds-tab-item-inner",
        "{ overflow: hidden }",
    ],
    &[
        ".slds-tabs__item.react-slds-tab-with-menu > .react-slds-tab-item-inner > a",
        "{ padding-right: 2rem; }",
    ],
    &[
        ".react-slds-tab-menu",
        "{ position: absolute; top: 0; right: 0; visibility: hidden }",
    ],
    &[
        ".react-slds-tab-menu button",
        "{ height: 2.5rem; line-height: 2rem; width: 2rem; }",
    ],
    &[
        ".slds-tabs__item.slds-active .react-slds-tab-menu",
        ".slds-tabs__item:hover .react-slds-tab-menu",
        "{ visibility: visible }",
    ],
];

pub fn style_sheet() -> String {
    RULES
        .iter()
        .filter_map(|group| {
            let (decl, selectors) = group.split_last()?;
            Some(format!("{} {decl}", selectors.join(", ")))
        })
        .collect::<Vec<_>>()
        .join("\n")
}

/// Adds the tab-menu `<style>` element to the document head unless it is
/// already there. Safe to call more than once.
pub fn register() -> Result<(), JsValue> {
    let document = util::document()?;
    if document.get_element_by_id(STYLE_ID).is_some() {
        tracing::debug!("styles already registered");
        return Ok(());
    }
    let head = document
        .head()
        .ok_or_else(|| JsValue::from_str("no head"))?;
    let style = document.create_element("style")?;
    style.set_id(STYLE_ID);
    style.set_text_content(Some(&style_sheet()));
    head.append_child(&style)?;
    tracing::info!("registered {} style rules", RULES.len());
    Ok(())
}
