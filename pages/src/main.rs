mod friend_item;
mod home;
mod spawner;
mod state;

use friendship_sdk::config::HttpConfig;
use yew::prelude::*;

use crate::home::Home;

#[function_component(App)]
fn app() -> Html {
    html! {
        <Home conf={HttpConfig::default()} />
    }
}

fn main() {
    wasm_logger::init(wasm_logger::Config::default());
    yew::Renderer::<App>::new().render();
}
