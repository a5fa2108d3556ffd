//! Host capabilities for the DOM-mutating helpers.
//!
//! The document tree and the timer queue are passed in explicitly instead of
//! being reached through globals, so `notify` and `sliders` can run against
//! the in-memory host in unit tests.

pub mod web;

#[cfg(test)]
pub mod fake;

/// The slice of the document tree the helpers touch.
///
/// Element handles are cheap clones referring to the same underlying node.
pub trait Dom: Clone + 'static {
    type Element: Clone + 'static;

    fn create_div(&self) -> Self::Element;
    fn append_to_body(&self, el: &Self::Element);
    /// Detach the element from the tree. Already-detached elements are left alone.
    fn remove(&self, el: &Self::Element);
    fn set_class_name(&self, el: &Self::Element, class: &str);
    /// Replace the element's text content. Assigned as plain text, never parsed as markup.
    fn set_text(&self, el: &Self::Element, text: &str);
    fn set_opacity(&self, el: &Self::Element, opacity: &str);
    fn element_by_id(&self, id: &str) -> Option<Self::Element>;
    /// Every `<input type="range">` currently in the document.
    fn range_inputs(&self) -> Vec<Self::Element>;
    fn id_of(&self, el: &Self::Element) -> String;
    /// Current value of an input control; empty for non-input elements.
    fn value_of(&self, el: &Self::Element) -> String;
    /// Register a permanent `input` listener. The handler receives the
    /// control's value at the time of each event.
    fn on_input(&self, el: &Self::Element, handler: Box<dyn Fn(String)>);
}

/// One-shot timer scheduling. Timers are fire-and-forget; there is no
/// cancellation path, so a scheduled callback always runs.
pub trait Scheduler: Clone + 'static {
    fn set_timeout(&self, delay_ms: u32, callback: Box<dyn FnOnce()>);
}
