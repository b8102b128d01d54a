use crate::app::App;

mod app;
mod components;
mod tracking;

fn main() {
    yew::Renderer::<App>::new().render();
}
