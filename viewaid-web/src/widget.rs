//! Store wiring and the page mount entry point

use crate::components::panel::AccessibilityPanel;
use crate::surface::DomSurface;
use std::cell::RefCell;
use std::rc::Rc;
use viewaid_core::{Setting, Store};
use yew::prelude::*;

/// Id of the container element [`mount`] appends to the page body.
pub const WIDGET_ELEMENT_ID: &str = "viewaid-widget";

/// The store handle shared by the panel callbacks.
///
/// All handlers run to completion on the interaction thread, so the borrow
/// in each callback can never overlap another.
pub type SharedStore = Rc<RefCell<Store<DomSurface>>>;

#[derive(Properties, Clone)]
pub struct Props {
    pub store: SharedStore,
}

impl PartialEq for Props {
    fn eq(&self, other: &Self) -> bool {
        Rc::ptr_eq(&self.store, &other.store)
    }
}

/// Maps panel gestures onto store operations, one operation per button.
#[function_component(Widget)]
pub fn widget(p: &Props) -> Html {
    let on_increase = {
        let store = p.store.clone();
        Callback::from(move |_: MouseEvent| store.borrow_mut().increase_font_size())
    };
    let on_decrease = {
        let store = p.store.clone();
        Callback::from(move |_: MouseEvent| store.borrow_mut().decrease_font_size())
    };
    let on_reset = {
        let store = p.store.clone();
        Callback::from(move |_: MouseEvent| store.borrow_mut().reset_font_size())
    };
    let on_toggle = {
        let store = p.store.clone();
        Callback::from(move |setting: Setting| store.borrow_mut().toggle(setting))
    };

    html! {
        <AccessibilityPanel {on_increase} {on_decrease} {on_reset} {on_toggle} />
    }
}

/// Install the widget into the current page: one stylesheet in `<head>` and
/// one widget container at the end of `<body>`, then render the panel into
/// the container.
///
/// The stylesheet and container exist before any handler can fire, so no
/// panel operation can find them missing.
///
/// # Errors
/// Returns an error if the stylesheet or the container cannot be inserted.
#[cfg(target_arch = "wasm32")]
pub fn mount() -> Result<(), wasm_bindgen::JsValue> {
    let document = crate::dom::document();
    let surface = DomSurface::install(&document)?;
    let host = document.create_element("div")?;
    host.set_id(WIDGET_ELEMENT_ID);
    crate::dom::body().append_child(&host)?;

    let store: SharedStore = Rc::new(RefCell::new(Store::new(surface)));
    yew::Renderer::<Widget>::with_root_and_props(host, Props { store }).render();
    log::debug!("viewaid widget mounted");
    Ok(())
}
