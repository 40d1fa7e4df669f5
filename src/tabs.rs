#![allow(non_snake_case)]

use std::rc::Rc;

use dioxus::prelude::*;

use crate::focus::FocusRegistry;
use crate::key::TabKey;
use crate::selection::{self, KeyAction, Selection};
use crate::tab::{Tab, TabsType};
use crate::tab_nav::TabNav;
use crate::tab_panel::TabPanel;
use crate::util::class_names;

/// Tab strip plus the content panes of `tabs`.
///
/// Passing `active_key` makes the widget controlled: it always shows that
/// key, though clicks and arrow keys still report through `on_select`.
/// Without it the widget tracks its own selection, starting from
/// `default_active_key`.
#[component]
pub fn Tabs(
    #[props(default)] class: String,
    #[props(default)] tabs_type: TabsType,
    on_select: Option<EventHandler<TabKey>>,
    #[props(!optional, default)] default_active_key: Option<TabKey>,
    #[props(!optional, default)] active_key: Option<TabKey>,
    tabs: Vec<Tab>,
) -> Element {
    let mut selection = use_signal(Selection::default);
    let mut handles = use_signal(FocusRegistry::<Rc<MountedData>>::default);

    let current = selection
        .read()
        .active_key(active_key.as_ref(), default_active_key.as_ref());

    // Runs after the render that followed a selection. Reading the flag
    // subscribes to it, so re-selecting the shown key still refocuses.
    use_effect(use_reactive((&current,), move |(current,)| {
        if !selection.read().focus_pending() {
            return;
        }
        selection.write().take_focus();
        let Some(handle) = handles.peek().active(current.as_ref()) else {
            tracing::debug!("no mounted control for {current:?}");
            return;
        };
        tracing::debug!("focusing {current:?}");
        spawn(async move {
            if let Err(err) = handle.set_focus(true).await {
                tracing::warn!("failed to focus tab: {err:?}");
            }
        });
    }));

    let mut select = move |key: TabKey| {
        selection.write().select_with(key, |k| {
            if let Some(handler) = on_select {
                handler.call(k.clone());
            }
        });
    };

    let keys: Vec<TabKey> = tabs.iter().map(|t| t.event_key.clone()).collect();
    let on_tab_key_down = move |(key, evt): (TabKey, KeyboardEvent)| {
        let action = selection::navigate(&keys, &key, &evt.key());
        if !action.suppresses() {
            return;
        }
        if let KeyAction::Select(next) = action {
            select(next);
        }
        evt.prevent_default();
        evt.stop_propagation();
    };
    let on_mount = move |(key, handle): (TabKey, Rc<MountedData>)| {
        handles.write().register(key, handle);
    };
    let on_unmount = move |key: TabKey| {
        if let Ok(mut handles) = handles.try_write() {
            handles.unregister(&key);
        }
    };

    let type_class = format!("slds-tabs--{tabs_type}");
    let tabs_class = class_names([Some(class.as_str()), Some(type_class.as_str())]);
    rsx! {
        div { class: "{tabs_class}",
            TabNav {
                tabs_type,
                active_key: current.clone(),
                tabs: tabs.clone(),
                on_tab_click: move |key| select(key),
                on_tab_key_down,
                on_mount,
                on_unmount,
            }
            for (i , tab) in tabs.iter().enumerate() {
                TabPanel {
                    key: "{i}-{tab.event_key}",
                    tabs_type,
                    active: current.as_ref() == Some(&tab.event_key),
                    {tab.content.clone()}
                }
            }
        }
    }
}
