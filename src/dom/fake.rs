// In-memory host used by the unit tests: a flat element store and a manual
// clock, so timed behavior is asserted without wall-clock waits.

use std::cell::RefCell;
use std::rc::Rc;

use super::{Dom, Scheduler};

#[derive(Default)]
struct NodeState {
    id: String,
    class_name: String,
    text: String,
    opacity: Option<String>,
    value: String,
    is_range: bool,
    in_body: bool,
    listeners: Vec<Box<dyn Fn(String)>>,
}

/// Handle to a fake node; clones refer to the same node.
#[derive(Clone)]
pub struct FakeElement(Rc<RefCell<NodeState>>);

impl FakeElement {
    fn new(state: NodeState) -> Self {
        Self(Rc::new(RefCell::new(state)))
    }

    pub fn class_name(&self) -> String {
        self.0.borrow().class_name.clone()
    }

    pub fn text(&self) -> String {
        self.0.borrow().text.clone()
    }

    /// Inline opacity, `None` until a helper has touched it.
    pub fn opacity(&self) -> Option<String> {
        self.0.borrow().opacity.clone()
    }

    pub fn is_in_body(&self) -> bool {
        self.0.borrow().in_body
    }

    /// Update the control's value and fire its `input` listeners.
    pub fn dispatch_input(&self, value: &str) {
        self.0.borrow_mut().value = value.to_string();
        // Listeners run without the node borrowed; they may touch the dom.
        let listeners = std::mem::take(&mut self.0.borrow_mut().listeners);
        for listener in &listeners {
            listener(value.to_string());
        }
        let mut state = self.0.borrow_mut();
        let added = std::mem::take(&mut state.listeners);
        state.listeners = listeners;
        state.listeners.extend(added);
    }
}

/// [`Dom`] over a flat in-memory element store.
#[derive(Clone, Default)]
pub struct FakeDom {
    nodes: Rc<RefCell<Vec<FakeElement>>>,
}

impl FakeDom {
    pub fn new() -> Self {
        Self::default()
    }

    /// Seed a range input with the given id and starting value.
    pub fn add_range_input(&self, id: &str, value: &str) -> FakeElement {
        let el = FakeElement::new(NodeState {
            id: id.to_string(),
            value: value.to_string(),
            is_range: true,
            in_body: true,
            ..NodeState::default()
        });
        self.nodes.borrow_mut().push(el.clone());
        el
    }

    /// Seed a plain element with the given id (e.g. a value display span).
    pub fn add_display(&self, id: &str) -> FakeElement {
        let el = FakeElement::new(NodeState {
            id: id.to_string(),
            in_body: true,
            ..NodeState::default()
        });
        self.nodes.borrow_mut().push(el.clone());
        el
    }

    /// Elements currently attached under the body.
    pub fn body_children(&self) -> Vec<FakeElement> {
        self.nodes
            .borrow()
            .iter()
            .filter(|el| el.0.borrow().in_body)
            .cloned()
            .collect()
    }
}

impl Dom for FakeDom {
    type Element = FakeElement;

    fn create_div(&self) -> FakeElement {
        let el = FakeElement::new(NodeState::default());
        self.nodes.borrow_mut().push(el.clone());
        el
    }

    fn append_to_body(&self, el: &FakeElement) {
        el.0.borrow_mut().in_body = true;
    }

    fn remove(&self, el: &FakeElement) {
        el.0.borrow_mut().in_body = false;
    }

    fn set_class_name(&self, el: &FakeElement, class: &str) {
        el.0.borrow_mut().class_name = class.to_string();
    }

    fn set_text(&self, el: &FakeElement, text: &str) {
        el.0.borrow_mut().text = text.to_string();
    }

    fn set_opacity(&self, el: &FakeElement, opacity: &str) {
        el.0.borrow_mut().opacity = Some(opacity.to_string());
    }

    fn element_by_id(&self, id: &str) -> Option<FakeElement> {
        self.nodes
            .borrow()
            .iter()
            .find(|el| el.0.borrow().id == id)
            .cloned()
    }

    fn range_inputs(&self) -> Vec<FakeElement> {
        self.nodes
            .borrow()
            .iter()
            .filter(|el| el.0.borrow().is_range)
            .cloned()
            .collect()
    }

    fn id_of(&self, el: &FakeElement) -> String {
        el.0.borrow().id.clone()
    }

    fn value_of(&self, el: &FakeElement) -> String {
        el.0.borrow().value.clone()
    }

    fn on_input(&self, el: &FakeElement, handler: Box<dyn Fn(String)>) {
        el.0.borrow_mut().listeners.push(handler);
    }
}

struct Task {
    due_ms: u64,
    seq: u64,
    callback: Box<dyn FnOnce()>,
}

#[derive(Default)]
struct Queue {
    now_ms: u64,
    next_seq: u64,
    tasks: Vec<Task>,
}

/// [`Scheduler`] with a manual clock; timers only run when a test advances it.
#[derive(Clone, Default)]
pub struct FakeScheduler {
    queue: Rc<RefCell<Queue>>,
}

impl FakeScheduler {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn now_ms(&self) -> u64 {
        self.queue.borrow().now_ms
    }

    /// Move the clock forward by `ms`, running every timer that comes due in
    /// scheduling order. Callbacks may schedule further timers; those run too
    /// when they land inside the window.
    pub fn advance(&self, ms: u64) {
        let target = self.queue.borrow().now_ms + ms;
        loop {
            let next = {
                let mut queue = self.queue.borrow_mut();
                let due = queue
                    .tasks
                    .iter()
                    .enumerate()
                    .filter(|(_, t)| t.due_ms <= target)
                    .min_by_key(|(_, t)| (t.due_ms, t.seq))
                    .map(|(i, _)| i);
                match due {
                    Some(i) => {
                        let task = queue.tasks.remove(i);
                        queue.now_ms = task.due_ms;
                        Some(task)
                    }
                    None => None,
                }
            };
            match next {
                Some(task) => (task.callback)(),
                None => break,
            }
        }
        self.queue.borrow_mut().now_ms = target;
    }
}

impl Scheduler for FakeScheduler {
    fn set_timeout(&self, delay_ms: u32, callback: Box<dyn FnOnce()>) {
        let mut queue = self.queue.borrow_mut();
        let due_ms = queue.now_ms + u64::from(delay_ms);
        let seq = queue.next_seq;
        queue.next_seq += 1;
        queue.tasks.push(Task {
            due_ms,
            seq,
            callback,
        });
    }
}
