use yew::prelude::*;
use yew_hooks::prelude::*;

use crate::config;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum NavBackground {
    Transparent,
    Opaque,
}

impl NavBackground {
    pub fn for_offset(scroll_y: f64) -> Self {
        if scroll_y > config::NAV_OPAQUE_THRESHOLD {
            NavBackground::Opaque
        } else {
            NavBackground::Transparent
        }
    }

    pub fn css(self) -> &'static str {
        match self {
            NavBackground::Transparent => "transparent",
            NavBackground::Opaque => "rgb(0, 0, 0)",
        }
    }
}

#[function_component(Nav)]
pub fn nav() -> Html {
    let (_, scroll_y) = use_window_scroll();
    let background = NavBackground::for_offset(scroll_y);

    html! {
        <nav id="navbar" class="top-nav" style={format!("background-color: {};", background.css())}>
            <div class="nav-content">
                <a href="/" class="nav-logo">{"NETFLIX"}</a>
                <a href="#plans" class="nav-link">{"Plans"}</a>
            </div>
            <style>
                {r#"
                .top-nav {
                    position: fixed;
                    top: 0;
                    left: 0;
                    width: 100%;
                    z-index: 50;
                    transition: background-color 0.3s ease;
                }

                .nav-content {
                    display: flex;
                    justify-content: space-between;
                    align-items: center;
                    padding: 1rem 2rem;
                }

                .nav-logo {
                    color: #e50914;
                    font-size: 1.8rem;
                    font-weight: 700;
                    text-decoration: none;
                    letter-spacing: 0.05em;
                }

                .nav-link {
                    color: #fff;
                    text-decoration: none;
                }
                "#}
            </style>
        </nav>
    }
}
