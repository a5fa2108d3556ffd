// Transient toast notifications.

use crate::dom::{Dom, Scheduler};

/// Delay before the fade-in opacity flip is scheduled.
pub const FADE_IN_DELAY_MS: u32 = 10;
/// How long a notification stays fully visible.
pub const VISIBLE_MS: u32 = 3000;
/// Fade-out duration before the element is dropped from the tree.
pub const FADE_OUT_MS: u32 = 500;

/// Visual category of a notification; becomes part of its CSS class.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum NotificationKind {
    Info,
    Success,
    Warning,
    Error,
}

impl NotificationKind {
    pub fn as_str(self) -> &'static str {
        match self {
            NotificationKind::Info => "info",
            NotificationKind::Success => "success",
            NotificationKind::Warning => "warning",
            NotificationKind::Error => "error",
        }
    }
}

/// Append a self-dismissing message element to the page body.
///
/// The message is assigned as plain text content. The element fades in just
/// after insertion, stays visible for three seconds, fades out for half a
/// second and is then removed. Calls are independent; overlapping
/// notifications stack, each on its own timers.
pub fn show_notification<D: Dom, S: Scheduler>(
    dom: &D,
    timers: &S,
    message: &str,
    kind: NotificationKind,
) {
    let el = dom.create_div();
    dom.set_class_name(&el, &format!("notification {}", kind.as_str()));
    dom.set_text(&el, message);
    dom.append_to_body(&el);

    {
        let dom = dom.clone();
        let el = el.clone();
        timers.set_timeout(
            FADE_IN_DELAY_MS,
            Box::new(move || {
                dom.set_opacity(&el, "1");
            }),
        );
    }

    {
        let dom = dom.clone();
        let inner_timers = timers.clone();
        timers.set_timeout(
            VISIBLE_MS,
            Box::new(move || {
                dom.set_opacity(&el, "0");
                let dom = dom.clone();
                let el = el.clone();
                inner_timers.set_timeout(
                    FADE_OUT_MS,
                    Box::new(move || {
                        // No-op when the page already dropped the node.
                        dom.remove(&el);
                    }),
                );
            }),
        );
    }
}
