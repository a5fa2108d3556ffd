// Live value displays for range inputs.

use crate::dom::Dom;

/// Wire every range input in the document to its `{id}Value` display element.
///
/// Runs once at startup. Sliders without a matching display are skipped.
/// Each binding writes the slider's current value into the display right
/// away and keeps it in sync on every subsequent `input` event.
pub fn bind_value_displays<D: Dom>(dom: &D) {
    for slider in dom.range_inputs() {
        let display = match dom.element_by_id(&format!("{}Value", dom.id_of(&slider))) {
            Some(el) => el,
            None => continue,
        };
        dom.set_text(&display, &dom.value_of(&slider));

        let dom_for_events = dom.clone();
        dom.on_input(
            &slider,
            Box::new(move |value| {
                dom_for_events.set_text(&display, &value);
            }),
        );
    }
}
