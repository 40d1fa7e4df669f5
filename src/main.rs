#![allow(non_snake_case)]

use dioxus::prelude::*;
use serde::Deserialize;
use tabstrip::{MenuConfig, MenuItem, Tab, TabKey, Tabs, TabsType};
use tracing::Level;

const DEMO: &str = include_str!("../demos/tabs.json");

#[derive(Clone, Debug, PartialEq, Deserialize)]
struct DemoSet {
    #[serde(rename = "type", default)]
    tabs_type: TabsType,
    tabs: Vec<DemoTab>,
}

#[derive(Clone, Debug, PartialEq, Deserialize)]
struct DemoTab {
    key: TabKey,
    title: String,
    body: String,
    #[serde(default)]
    menu_icon: Option<String>,
    #[serde(default)]
    menu_items: Option<Vec<MenuItem>>,
}

impl DemoTab {
    fn into_tab(self, on_item_click: EventHandler<String>) -> Tab {
        let content = rsx! {
            div { class: "p-4 font-mono whitespace-pre", "{self.body}" }
        };
        let mut tab = Tab::new(self.key, self.title, content);
        if let Some(items) = self.menu_items {
            let config = MenuConfig {
                on_item_click: Some(on_item_click),
                ..Default::default()
            };
            tab = tab.with_menu(config, items);
        }
        if let Some(icon) = self.menu_icon {
            tab = tab.with_menu_icon(icon);
        }
        tab
    }
}

fn main() {
    console_error_panic_hook::set_once();

    dioxus_logger::init(Level::INFO).expect("logger failed to init");

    if let Err(err) = tabstrip::styles::register() {
        tracing::error!("failed to register styles: {err:?}");
    }

    launch(App);
}

#[component]
fn KeyPicker(keys: Vec<TabKey>, onpick: EventHandler<TabKey>) -> Element {
    let choices = keys.clone();
    rsx! {
        select {
            class: "h-12 w-full bg-slate-100",
            onchange: move |e: Event<FormData>| {
                let Ok(i) = e.value().parse::<usize>() else {
                    return;
                };
                if let Some(key) = choices.get(i) {
                    tracing::info!("picked {key}");
                    onpick.call(key.clone());
                }
            },
            for (i , key) in keys.iter().enumerate() {
                option { key: "{i}", value: "{i}", "{key}" }
            }
        }
    }
}

#[component]
fn App() -> Element {
    let mut controlled = use_signal(|| None::<TabKey>);
    let on_item_click = use_callback(|value: String| {
        tracing::info!("menu action: {value}");
    });

    let demo: DemoSet = match serde_json::from_str(DEMO) {
        Ok(demo) => demo,
        Err(err) => {
            tracing::error!("invalid demo tabs: {err}");
            return rsx! {
                p { "invalid demo tabs: {err}" }
            };
        }
    };
    let keys: Vec<TabKey> = demo.tabs.iter().map(|t| t.key.clone()).collect();
    let first = keys.first().cloned();
    let tabs: Vec<Tab> = demo
        .tabs
        .into_iter()
        .map(|t| t.into_tab(on_item_click))
        .collect();

    rsx! {
        main { class: "w-full bg-slate-100",
            div { class: "flex",
                div { class: "w-1/2 p-2",
                    h2 { "Uncontrolled" }
                    Tabs {
                        tabs_type: demo.tabs_type,
                        default_active_key: first,
                        on_select: move |key: TabKey| tracing::info!("uncontrolled select: {key}"),
                        tabs: tabs.clone(),
                    }
                }
                div { class: "w-1/2 p-2",
                    h2 { "Controlled" }
                    KeyPicker { keys, onpick: move |key| controlled.set(Some(key)) }
                    Tabs {
                        tabs_type: TabsType::Scoped,
                        active_key: controlled(),
                        on_select: move |key: TabKey| {
                            tracing::info!("controlled select: {key}");
                            controlled.set(Some(key));
                        },
                        tabs,
                    }
                }
            }
        }
    }
}
