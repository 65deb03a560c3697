use log::{info, warn};
use yew::prelude::*;

mod accordion;
mod actions;
mod config;
mod content;
mod dom;
mod error;
mod components {
    pub mod faq;
    pub mod hero;
    pub mod movie_modal;
    pub mod nav;
    pub mod plans;
}
mod pages {
    pub mod landing;
}

use components::nav::Nav;
use pages::landing::Landing;

#[function_component]
fn App() -> Html {
    html! {
        <>
            <Nav />
            <Landing />
        </>
    }
}

fn main() {
    // Initialize console error panic hook for better error messages
    console_error_panic_hook::set_once();

    if let Err(e) = console_log::init_with_level(config::log_level()) {
        gloo_console::error!(format!("error initializing log: {}", e));
    }

    info!("Starting landing page");
    match dom::element_by_id(config::MOUNT_POINT_ID) {
        Ok(root) => yew::Renderer::<App>::with_root(root).render(),
        Err(e) => {
            warn!("{}, mounting on <body>", e);
            yew::Renderer::<App>::new().render()
        }
    };
}
