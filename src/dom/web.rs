// Browser implementations over web-sys.

use wasm_bindgen::JsCast;
use wasm_bindgen::closure::Closure;
use web_sys::{Document, HtmlElement, HtmlInputElement, Window};

use super::{Dom, Scheduler};

/// [`Dom`] backed by the real page document.
#[derive(Clone)]
pub struct BrowserDom {
    document: Document,
}

impl BrowserDom {
    /// `None` outside a browsing context (no window or no document).
    pub fn new() -> Option<Self> {
        let document = web_sys::window()?.document()?;
        Some(Self { document })
    }
}

impl Dom for BrowserDom {
    type Element = HtmlElement;

    fn create_div(&self) -> HtmlElement {
        self.document
            .create_element("div")
            .expect("document refused to create a div")
            .dyn_into::<HtmlElement>()
            .expect("created element is not an HtmlElement")
    }

    fn append_to_body(&self, el: &HtmlElement) {
        if let Some(body) = self.document.body() {
            let _ = body.append_child(el);
        }
    }

    fn remove(&self, el: &HtmlElement) {
        el.remove();
    }

    fn set_class_name(&self, el: &HtmlElement, class: &str) {
        el.set_class_name(class);
    }

    fn set_text(&self, el: &HtmlElement, text: &str) {
        el.set_text_content(Some(text));
    }

    fn set_opacity(&self, el: &HtmlElement, opacity: &str) {
        let _ = el.style().set_property("opacity", opacity);
    }

    fn element_by_id(&self, id: &str) -> Option<HtmlElement> {
        self.document
            .get_element_by_id(id)
            .and_then(|el| el.dyn_into::<HtmlElement>().ok())
    }

    fn range_inputs(&self) -> Vec<HtmlElement> {
        let mut out = Vec::new();
        if let Ok(list) = self.document.query_selector_all("input[type=\"range\"]") {
            for i in 0..list.length() {
                if let Some(node) = list.item(i) {
                    if let Ok(el) = node.dyn_into::<HtmlElement>() {
                        out.push(el);
                    }
                }
            }
        }
        out
    }

    fn id_of(&self, el: &HtmlElement) -> String {
        el.id()
    }

    fn value_of(&self, el: &HtmlElement) -> String {
        el.dyn_ref::<HtmlInputElement>()
            .map(|input| input.value())
            .unwrap_or_default()
    }

    fn on_input(&self, el: &HtmlElement, handler: Box<dyn Fn(String)>) {
        let cb = Closure::wrap(Box::new(move |e: web_sys::Event| {
            let value = e
                .target()
                .and_then(|t| t.dyn_into::<HtmlInputElement>().ok())
                .map(|input| input.value())
                .unwrap_or_default();
            handler(value);
        }) as Box<dyn FnMut(_)>);
        let _ = el.add_event_listener_with_callback("input", cb.as_ref().unchecked_ref());
        // Bindings last until page teardown; the closure must outlive this call.
        cb.forget();
    }
}

/// [`Scheduler`] over `window.setTimeout`.
#[derive(Clone)]
pub struct BrowserScheduler {
    window: Window,
}

impl BrowserScheduler {
    pub fn new() -> Option<Self> {
        web_sys::window().map(|window| Self { window })
    }
}

impl Scheduler for BrowserScheduler {
    fn set_timeout(&self, delay_ms: u32, callback: Box<dyn FnOnce()>) {
        let mut callback = Some(callback);
        let cb = Closure::wrap(Box::new(move || {
            if let Some(f) = callback.take() {
                f();
            }
        }) as Box<dyn FnMut()>);
        let _ = self
            .window
            .set_timeout_with_callback_and_timeout_and_arguments_0(
                cb.as_ref().unchecked_ref(),
                delay_ms as i32,
            );
        // One-shot timer; the closure must stay alive until the browser calls it.
        cb.forget();
    }
}
