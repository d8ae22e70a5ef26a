//! `PageHost` over the real browser document

use portfolio_core::{
    Error, PageHost, ResumeAsset, Result, ScrollBehavior, ScrollSnapshot, SectionBounds,
    SectionId, DARK_CLASS,
};
use wasm_bindgen::{JsCast, JsValue};
use web_sys::{
    Document, HtmlAnchorElement, HtmlElement, ScrollIntoViewOptions, ScrollLogicalPosition, Window,
};

/// The document the app is mounted in; every call looks up the global window.
#[derive(Debug, Clone, Copy, Default)]
pub struct BrowserHost;

fn window() -> Result<Window> {
    web_sys::window().ok_or(Error::NoWindow)
}

fn document() -> Result<Document> {
    window()?
        .document()
        .ok_or_else(|| Error::dom("window has no document"))
}

fn js_error(context: &'static str) -> impl FnOnce(JsValue) -> Error {
    move |value| Error::dom(format!("{context}: {value:?}"))
}

/// Section element by id, if present and an HTML element
fn section_element(document: &Document, section: SectionId) -> Option<HtmlElement> {
    document
        .get_element_by_id(section.dom_id())
        .and_then(|el| el.dyn_into::<HtmlElement>().ok())
}

impl PageHost for BrowserHost {
    fn scroll_snapshot(&self) -> Result<ScrollSnapshot> {
        let scroll_y = window()?
            .scroll_y()
            .map_err(js_error("reading scrollY"))?;
        let document = document()?;

        Ok(ScrollSnapshot::measure(scroll_y, |section| {
            section_element(&document, section).map(|el| {
                SectionBounds::new(f64::from(el.offset_top()), f64::from(el.offset_height()))
            })
        }))
    }

    fn scroll_into_view(&self, section: SectionId, behavior: ScrollBehavior) -> Result<bool> {
        let Some(element) = section_element(&document()?, section) else {
            return Ok(false);
        };

        let options = ScrollIntoViewOptions::new();
        options.set_behavior(match behavior {
            ScrollBehavior::Smooth => web_sys::ScrollBehavior::Smooth,
            ScrollBehavior::Instant => web_sys::ScrollBehavior::Instant,
        });
        options.set_block(ScrollLogicalPosition::Start);
        element.scroll_into_view_with_scroll_into_view_options(&options);

        Ok(true)
    }

    fn set_theme_marker(&self, dark: bool) -> Result<()> {
        let root = document()?
            .document_element()
            .ok_or_else(|| Error::dom("document has no root element"))?;

        root.class_list()
            .toggle_with_force(DARK_CLASS, dark)
            .map_err(js_error("toggling theme class"))?;
        Ok(())
    }

    fn trigger_download(&self, asset: &ResumeAsset) -> Result<()> {
        let document = document()?;
        let body = document
            .body()
            .ok_or_else(|| Error::dom("document has no body"))?;

        let link = document
            .create_element("a")
            .map_err(js_error("creating anchor"))?
            .dyn_into::<HtmlAnchorElement>()
            .map_err(|_| Error::dom("created element is not an anchor"))?;
        link.set_href(&asset.href);
        link.set_download(&asset.file_name);

        body.append_child(&link)
            .map_err(js_error("attaching anchor"))?;
        link.click();
        link.remove();

        Ok(())
    }
}
