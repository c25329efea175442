//! DOM implementation of the store's page surface

use viewaid_core::Surface;
use wasm_bindgen::{JsCast, JsValue};
use web_sys::{Document, HtmlElement, HtmlStyleElement};

/// Id of the stylesheet element owned by the widget.
pub const STYLE_ELEMENT_ID: &str = "viewaid-styles";

/// The widget's handles into the host page: one owned `<style>` element for
/// the derived rules, and the body for the root font-size property.
///
/// Nothing else on the page is ever touched.
#[derive(Debug, Clone)]
pub struct DomSurface {
    style_element: HtmlStyleElement,
    body: HtmlElement,
}

impl DomSurface {
    /// Append the owned `<style>` element to `<head>` and capture the body
    /// handle.
    ///
    /// # Errors
    /// Returns an error if the document is missing its head or body, or if
    /// the style element cannot be created.
    pub fn install(document: &Document) -> Result<Self, JsValue> {
        let style_element: HtmlStyleElement = document
            .create_element("style")?
            .dyn_into()
            .map_err(JsValue::from)?;
        style_element.set_id(STYLE_ELEMENT_ID);
        document
            .head()
            .ok_or_else(|| JsValue::from_str("document has no head"))?
            .append_child(&style_element)?;
        let body = document
            .body()
            .ok_or_else(|| JsValue::from_str("document has no body"))?;
        Ok(Self {
            style_element,
            body,
        })
    }
}

impl Surface for DomSurface {
    fn set_root_font_size(&self, px: u32) {
        let _ = self
            .body
            .style()
            .set_property("font-size", &format!("{px}px"));
    }

    fn replace_stylesheet(&self, css: &str) {
        self.style_element.set_text_content(Some(css));
    }
}
