use std::any::Any;
use std::cell::RefCell;
use std::rc::Rc;

use dioxus::prelude::*;
use dioxus_core::{ElementId, Mutation, Mutations, NoOpMutations};
use dioxus_html::{PlatformEventData, SerializedHtmlEventConverter, SerializedMouseData};

use crate::Navigate;

/// Navigator that remembers every path it was asked for.
#[derive(Clone, Default)]
pub struct RecordingNavigator(Rc<RefCell<Vec<String>>>);

impl RecordingNavigator {
    pub fn requests(&self) -> Vec<String> {
        self.0.borrow().clone()
    }
}

impl Navigate for RecordingNavigator {
    fn navigate(&self, path: &str) {
        self.0.borrow_mut().push(path.to_string());
    }
}

/// Render `app` once on the server and return the HTML.
pub fn render(app: fn() -> Element) -> String {
    let mut dom = VirtualDom::new(app);
    dom.rebuild_in_place();
    dioxus_ssr::render(&dom)
}

/// Render `root` with `props` as its root props.
pub fn render_with<P: Clone + 'static>(root: fn(P) -> Element, props: P) -> String {
    let mut dom = VirtualDom::new_with_props(root, props);
    dom.rebuild_in_place();
    dioxus_ssr::render(&dom)
}

/// A mounted dom whose click listeners can be fired in document order.
pub struct Clicker {
    dom: VirtualDom,
    targets: Vec<ElementId>,
}

impl Clicker {
    pub fn mount<P: Clone + 'static>(root: fn(P) -> Element, props: P) -> Self {
        dioxus_html::set_event_converter(Box::new(SerializedHtmlEventConverter));

        let mut dom = VirtualDom::new_with_props(root, props);
        let mut mutations = Mutations::default();
        dom.rebuild(&mut mutations);

        let targets = mutations
            .edits
            .into_iter()
            .filter_map(|edit| match edit {
                Mutation::NewEventListener { name, id } if name == "click" => Some(id),
                _ => None,
            })
            .collect();

        Self { dom, targets }
    }

    /// Number of elements listening for clicks.
    pub fn targets(&self) -> usize {
        self.targets.len()
    }

    /// Click the `index`th clickable element and let the dom settle.
    pub fn click(&mut self, index: usize) {
        let event = Event::new(
            Rc::new(PlatformEventData::new(Box::<SerializedMouseData>::default())) as Rc<dyn Any>,
            true,
        );
        self.dom
            .runtime()
            .handle_event("click", event, self.targets[index]);
        self.dom.render_immediate(&mut NoOpMutations);
    }

    pub fn html(&self) -> String {
        dioxus_ssr::render(&self.dom)
    }
}
