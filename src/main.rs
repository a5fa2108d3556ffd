mod components;
mod dom;
mod model;
mod notify;
mod sliders;
mod util;

use components::App;

fn main() {
    yew::Renderer::<App>::new().render();
}
