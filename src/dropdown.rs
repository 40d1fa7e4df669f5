#![allow(non_snake_case)]

use dioxus::prelude::*;

use crate::menu::{ButtonType, IconSize, MenuItem};
use crate::util::class_names;

/// Icon button that toggles a popup list of menu items.
#[component]
pub fn DropdownButton(
    #[props(default)] class: String,
    #[props(into, default = "down".to_string())] icon: String,
    #[props(default)] button_type: ButtonType,
    #[props(default)] icon_size: IconSize,
    #[props(default)] nubbin_top: bool,
    on_item_click: EventHandler<String>,
    items: Vec<MenuItem>,
) -> Element {
    let mut open = use_signal(|| false);
    let is_open = *open.read();
    let trigger_class = class_names([
        Some("slds-dropdown-trigger"),
        Some("slds-dropdown-trigger--click"),
        is_open.then_some("slds-is-open"),
        Some(class.as_str()),
    ]);
    let popup_class = class_names([
        Some("slds-dropdown"),
        Some("slds-dropdown--left"),
        nubbin_top.then_some("slds-nubbin--top"),
    ]);
    rsx! {
        div { class: "{trigger_class}",
            button {
                class: "slds-button slds-button--{button_type}",
                r#type: "button",
                aria_haspopup: "true",
                aria_expanded: if is_open { "true" } else { "false" },
                onclick: move |_| {
                    let next = !*open.peek();
                    tracing::trace!("dropdown open: {next}");
                    open.set(next);
                },
                span {
                    class: "slds-button__icon slds-button__icon--{icon_size} slds-icon-{icon}",
                    aria_hidden: "true",
                }
                span { class: "slds-assistive-text", "{icon}" }
            }
            if is_open {
                div { class: "{popup_class}",
                    ul { class: "slds-dropdown__list", role: "menu",
                        for (label , value , disabled) in items
                            .iter()
                            .map(|i| (i.label.clone(), i.value.clone(), i.disabled))
                        {
                            li { key: "{label}", class: "slds-dropdown__item",
                                a {
                                    role: "menuitem",
                                    tabindex: "-1",
                                    aria_disabled: if disabled { "true" } else { "false" },
                                    onclick: move |_| {
                                        if disabled {
                                            return;
                                        }
                                        open.set(false);
                                        tracing::debug!("menu item clicked: {value}");
                                        on_item_click.call(value.clone());
                                    },
                                    "{label}"
                                }
                            }
                        }
                    }
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use std::cell::RefCell;

    use pretty_assertions::assert_eq;

    use super::*;
    use crate::test_util::Harness;

    thread_local! {
        static PICKED: RefCell<Vec<String>> = const { RefCell::new(Vec::new()) };
    }

    fn picked() -> Vec<String> {
        PICKED.with(|p| p.borrow().clone())
    }

    fn menu() -> Element {
        rsx! {
            DropdownButton {
                icon: "settings",
                nubbin_top: true,
                on_item_click: move |value: String| PICKED.with(|p| p.borrow_mut().push(value)),
                items: vec![
                    MenuItem::new("Rename", "rename"),
                    MenuItem {
                        disabled: true,
                        ..MenuItem::new("Merge", "merge")
                    },
                ],
            }
        }
    }

    fn render(app: fn() -> Element) -> String {
        let mut dom = VirtualDom::new(app);
        dom.rebuild_in_place();
        dioxus_ssr::render(&dom)
    }

    #[test]
    fn test_closed_by_default() {
        fn app() -> Element {
            rsx! {
                DropdownButton {
                    icon: "settings",
                    button_type: ButtonType::IconBare,
                    icon_size: IconSize::Small,
                    nubbin_top: true,
                    on_item_click: move |_: String| {},
                    items: vec![MenuItem::new("Rename", "rename")],
                }
            }
        }
        let html = render(app);
        assert!(html.contains("slds-button--icon-bare"));
        assert!(html.contains("slds-button__icon--small"));
        assert!(html.contains("slds-icon-settings"));
        assert!(html.contains(r#"aria-expanded="false""#));
        assert!(!html.contains("slds-dropdown__list"));
        assert!(!html.contains("slds-is-open"));
    }

    #[test]
    fn test_trigger_toggles_popup() {
        let mut h = Harness::new(menu);
        let trigger = h.listeners("click")[0];

        h.click(trigger);
        let html = h.html();
        assert!(html.contains("slds-is-open"));
        assert!(html.contains(r#"aria-expanded="true""#));
        assert!(html.contains("slds-dropdown__list"));
        assert!(html.contains("slds-nubbin--top"));
        assert!(html.contains("Rename"));
        assert!(html.contains(r#"aria-disabled="true""#));

        h.click(trigger);
        let html = h.html();
        assert!(!html.contains("slds-is-open"));
        assert!(!html.contains("slds-dropdown__list"));
        assert_eq!(picked(), Vec::<String>::new());
    }

    #[test]
    fn test_item_click_reports_and_closes() {
        let mut h = Harness::new(menu);
        let trigger = h.listeners("click")[0];
        h.click(trigger);

        let clicks = h.listeners("click");
        assert_eq!(clicks.len(), 3);
        h.click(clicks[1]);
        assert_eq!(picked(), vec!["rename".to_string()]);
        let html = h.html();
        assert!(!html.contains("slds-dropdown__list"));
        assert!(html.contains(r#"aria-expanded="false""#));
    }

    #[test]
    fn test_disabled_item_is_inert() {
        let mut h = Harness::new(menu);
        let trigger = h.listeners("click")[0];
        h.click(trigger);

        let clicks = h.listeners("click");
        h.click(clicks[2]);
        assert_eq!(picked(), Vec::<String>::new());
        assert!(h.html().contains("slds-dropdown__list"));
    }
}
