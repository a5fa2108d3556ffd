use yew::prelude::*;

use crate::model::WarehouseConfig;

#[derive(Properties, PartialEq, Clone)]
pub struct ConfigPanelProps {
    pub initial: WarehouseConfig,
    pub on_save: Callback<()>,
    pub on_reset: Callback<()>,
}

// Slider ids follow the `{id}` / `{id}Value` markup contract the page-level
// binder expects; the displays carry no Yew handlers of their own.
#[function_component]
pub fn ConfigPanel(props: &ConfigPanelProps) -> Html {
    let save_cb = {
        let cb = props.on_save.clone();
        Callback::from(move |_| cb.emit(()))
    };
    let reset_cb = {
        let cb = props.on_reset.clone();
        Callback::from(move |_| cb.emit(()))
    };

    let row_style = "display:flex; align-items:center; gap:10px;";
    let label_style = "flex:0 0 110px;";
    let value_style =
        "min-width:36px; text-align:right; font-variant-numeric:tabular-nums; font-weight:600;";

    html! {<div style="position:absolute; top:64px; left:12px; background:rgba(22,27,34,0.9); border:1px solid #30363d; border-radius:8px; padding:12px 16px; min-width:320px; display:flex; flex-direction:column; gap:12px;">
        <h3 style="margin:0; font-size:16px;">{"Warehouse Setup"}</h3>
        <div style={row_style}>
            <span style={label_style}>{"Width"}</span>
            <input type="range" id="warehouseWidth" min="5" max="60" value={props.initial.width.to_string()} style="flex:1;" />
            <span id="warehouseWidthValue" style={value_style}></span>
        </div>
        <div style={row_style}>
            <span style={label_style}>{"Length"}</span>
            <input type="range" id="warehouseLength" min="5" max="80" value={props.initial.length.to_string()} style="flex:1;" />
            <span id="warehouseLengthValue" style={value_style}></span>
        </div>
        <div style={row_style}>
            <span style={label_style}>{"Aisle width"}</span>
            <input type="range" id="aisleWidth" min="1" max="6" value={props.initial.aisle_width.to_string()} style="flex:1;" />
            <span id="aisleWidthValue" style={value_style}></span>
        </div>
        <div style={row_style}>
            <span style={label_style}>{"Sim speed"}</span>
            <input type="range" id="simSpeed" min="1" max="10" value={props.initial.sim_speed.to_string()} style="flex:1;" />
            <span id="simSpeedValue" style={value_style}></span>
        </div>
        <div style="display:flex; gap:8px;">
            <button onclick={save_cb} style="flex:1;">{"Save Configuration"}</button>
            <button onclick={reset_cb}>{"Reset"}</button>
        </div>
    </div>}
}
