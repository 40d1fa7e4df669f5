//! Drives components in a `VirtualDom` with synthetic events.

use std::any::Any;
use std::rc::Rc;

use dioxus::prelude::*;
use dioxus_core::{ElementId, Mutation, Mutations};
use dioxus_html::{
    set_event_converter, PlatformEventData, SerializedHtmlEventConverter, SerializedKeyboardData,
    SerializedMouseData,
};

pub struct Harness {
    dom: VirtualDom,
    listeners: Vec<(String, ElementId)>,
}

impl Harness {
    pub fn new(app: fn() -> Element) -> Self {
        let _ = tracing_subscriber::fmt::try_init();
        set_event_converter(Box::new(SerializedHtmlEventConverter));

        let mut dom = VirtualDom::new(app);
        let mut muts = Mutations::default();
        dom.rebuild(&mut muts);
        let mut harness = Harness {
            dom,
            listeners: vec![],
        };
        harness.record(muts);
        harness
    }

    fn record(&mut self, muts: Mutations) {
        for edit in muts.edits {
            match edit {
                Mutation::NewEventListener { name, id } => self.listeners.push((name, id)),
                Mutation::RemoveEventListener { name, id } => {
                    self.listeners.retain(|(n, i)| !(*n == name && *i == id))
                }
                _ => {}
            }
        }
    }

    /// Elements listening for `name`, in creation order.
    pub fn listeners(&self, name: &str) -> Vec<ElementId> {
        self.listeners
            .iter()
            .filter(|(n, _)| n == name)
            .map(|(_, id)| *id)
            .collect()
    }

    pub fn click(&mut self, id: ElementId) {
        self.dispatch("click", id, Box::<SerializedMouseData>::default());
    }

    pub fn key_down(&mut self, id: ElementId, key: Key) {
        let data = SerializedKeyboardData::new(
            key,
            Code::Unidentified,
            Location::Standard,
            false,
            Modifiers::empty(),
            false,
        );
        self.dispatch("keydown", id, Box::new(data));
    }

    fn dispatch(&mut self, name: &str, id: ElementId, data: Box<dyn Any>) {
        let event = Event::new(Rc::new(PlatformEventData::new(data)) as Rc<dyn Any>, true);
        self.dom.runtime().handle_event(name, event, id);

        let mut muts = Mutations::default();
        self.dom.render_immediate(&mut muts);
        self.record(muts);
    }

    pub fn html(&self) -> String {
        dioxus_ssr::render(&self.dom)
    }
}
