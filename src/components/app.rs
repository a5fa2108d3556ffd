use wasm_bindgen::JsCast;
use wasm_bindgen::closure::Closure;
use yew::prelude::*;

use super::config_panel::ConfigPanel;
use super::summary_panel::SummaryPanel;
use crate::dom::Dom;
use crate::dom::web::{BrowserDom, BrowserScheduler};
use crate::model::WarehouseConfig;
use crate::notify::{NotificationKind, show_notification};
use crate::sliders::bind_value_displays;
use crate::util::{clog, format_time_diff};

/// Current slider positions, falling back to the given config for any
/// control that cannot be read.
fn read_sliders(fallback: &WarehouseConfig) -> WarehouseConfig {
    let Some(dom) = BrowserDom::new() else {
        return *fallback;
    };
    let read = |id: &str, fallback: u32| -> u32 {
        dom.element_by_id(id)
            .map(|el| dom.value_of(&el))
            .and_then(|v| v.parse().ok())
            .unwrap_or(fallback)
    };
    WarehouseConfig {
        width: read("warehouseWidth", fallback.width),
        length: read("warehouseLength", fallback.length),
        aisle_width: read("aisleWidth", fallback.aisle_width),
        sim_speed: read("simSpeed", fallback.sim_speed),
    }
}

fn notify(message: &str, kind: NotificationKind) {
    if let (Some(dom), Some(timers)) = (BrowserDom::new(), BrowserScheduler::new()) {
        show_notification(&dom, &timers, message, kind);
    }
}

#[function_component(App)]
pub fn app() -> Html {
    let config = use_state(|| WarehouseConfig::load().unwrap_or_default());
    let session_start = use_mut_ref(js_sys::Date::now);
    let now_ms = use_state(js_sys::Date::now);

    // Wire slider displays once the first render has produced the inputs.
    use_effect_with((), move |_| {
        if let Some(dom) = BrowserDom::new() {
            bind_value_displays(&dom);
        }
        || ()
    });

    // Session clock tick.
    {
        let now_ms = now_ms.clone();
        use_effect_with((), move |_| {
            let window = web_sys::window().expect("no global `window` exists");
            let tick = Closure::wrap(Box::new(move || {
                now_ms.set(js_sys::Date::now());
            }) as Box<dyn FnMut()>);
            let id = window
                .set_interval_with_callback_and_timeout_and_arguments_0(
                    tick.as_ref().unchecked_ref(),
                    1000,
                )
                .unwrap();
            move || {
                window.clear_interval_with_handle(id);
                drop(tick);
            }
        });
    }

    let on_save = {
        let config = config.clone();
        Callback::from(move |_| {
            let updated = read_sliders(&config);
            updated.save();
            config.set(updated);
            clog(&format!(
                "config saved: {}x{} aisle {} speed {}",
                updated.width, updated.length, updated.aisle_width, updated.sim_speed
            ));
            notify("Configuration saved", NotificationKind::Success);
        })
    };
    let on_reset = {
        let config = config.clone();
        Callback::from(move |_| {
            let defaults = WarehouseConfig::default();
            defaults.save();
            config.set(defaults);
            notify("Configuration reset to defaults", NotificationKind::Info);
        })
    };

    let elapsed = format_time_diff(*session_start.borrow(), *now_ms);

    html! {
        <div id="root" style="position:relative; width:100vw; height:100vh;">
            <div style="position:absolute; top:12px; left:50%; transform:translateX(-50%); font-size:20px; font-weight:600;">
                {"Warehouse Optimiser"}
            </div>
            <ConfigPanel initial={*config} on_save={on_save} on_reset={on_reset} />
            <SummaryPanel config={*config} session_elapsed={elapsed} />
        </div>
    }
}
