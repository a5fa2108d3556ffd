use yew::prelude::*;

use crate::model::WarehouseConfig;
use crate::util::format_number;

#[derive(Properties, PartialEq, Clone)]
pub struct SummaryPanelProps {
    pub config: WarehouseConfig,
    pub session_elapsed: String,
}

#[function_component]
pub fn SummaryPanel(props: &SummaryPanelProps) -> Html {
    let row_style = "display:flex; align-items:center; gap:8px;";
    let label_style = "flex:1;";
    let value_style =
        "min-width:80px; text-align:right; font-variant-numeric:tabular-nums; font-weight:600;";
    let config = props.config;

    html! {<div style="position:absolute; top:64px; right:12px; background:rgba(22,27,34,0.9); border:1px solid #30363d; border-radius:8px; padding:12px 16px; min-width:240px; display:flex; flex-direction:column; gap:10px; font-size:14px;">
        <h3 style="margin:0; font-size:16px;">{"Saved Layout"}</h3>
        <div style={row_style}>
            <span style={label_style}>{"Floor cells"}</span>
            <span style={value_style}>{ format_number(config.floor_cells()) }</span>
        </div>
        <div style={row_style}>
            <span style={label_style}>{"Storage slots"}</span>
            <span style={value_style}>{ format_number(config.storage_slots()) }</span>
        </div>
        <div style={row_style}>
            <span style={label_style}>{"Sim speed"}</span>
            <span style={value_style}>{ format!("{}x", config.sim_speed) }</span>
        </div>
        <div style="font-size:11px; opacity:0.7; border-top:1px solid #30363d; padding-top:8px;">
            { format!("Session: {}", props.session_elapsed) }
        </div>
    </div>}
}
