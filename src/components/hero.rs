use yew::prelude::*;

use crate::actions::{Action, PageContext};
use crate::content::MediaItem;

#[derive(Properties, PartialEq)]
pub struct HeroProps {
    pub movie: Option<MediaItem>,
}

#[function_component(Hero)]
pub fn hero(props: &HeroProps) -> Html {
    let ctx = use_context::<PageContext>();

    let Some(movie) = props.movie.as_ref() else {
        return html! { <section id="hero" class="hero"></section> };
    };

    let (on_play, on_info) = match ctx {
        Some(ctx) => {
            let play = {
                let dispatch = ctx.dispatch.clone();
                let url = movie.trailer_url.clone();
                Callback::from(move |e: MouseEvent| {
                    e.prevent_default();
                    dispatch.emit(Action::PlayTrailer(url.clone()));
                })
            };
            let info = {
                let dispatch = ctx.dispatch;
                let id = movie.id;
                Callback::from(move |e: MouseEvent| {
                    e.prevent_default();
                    dispatch.emit(Action::ShowInfo(id));
                })
            };
            (play, info)
        }
        None => (Callback::noop(), Callback::noop()),
    };

    html! {
        <section id="hero" class="hero">
            <div class="hero-frame">
                <img src={movie.backdrop_url.clone()} alt={movie.title.clone()} class="hero-backdrop" />
                <div class="hero-shade">
                    <div class="hero-copy">
                        <h1>{&movie.title}</h1>
                        <p>{&movie.description}</p>
                        <div class="hero-actions">
                            <button class="play-button" onclick={on_play}>{"▶ Play"}</button>
                            <button class="info-button" onclick={on_info}>{"ℹ More Info"}</button>
                        </div>
                    </div>
                </div>
            </div>
            <style>
                {r#"
                .hero {
                    position: relative;
                    height: 85vh;
                }

                .hero-frame {
                    position: relative;
                    height: 100%;
                }

                .hero-backdrop {
                    width: 100%;
                    height: 100%;
                    object-fit: cover;
                }

                .hero-shade {
                    position: absolute;
                    inset: 0;
                    display: flex;
                    align-items: center;
                    padding: 0 4rem;
                    background: linear-gradient(to right, #000, rgba(0, 0, 0, 0.5), transparent);
                }

                .hero-copy {
                    max-width: 42rem;
                }

                .hero-copy h1 {
                    font-size: 3rem;
                    font-weight: 700;
                    margin-bottom: 1rem;
                }

                .hero-copy p {
                    font-size: 1.125rem;
                    color: #e5e5e5;
                    margin-bottom: 2rem;
                }

                .hero-actions {
                    display: flex;
                    gap: 1rem;
                }

                .play-button,
                .info-button {
                    padding: 0.75rem 2rem;
                    border: none;
                    border-radius: 4px;
                    font-size: 1.1rem;
                    font-weight: 600;
                    cursor: pointer;
                    transition: opacity 0.2s ease;
                }

                .play-button {
                    background: #fff;
                    color: #000;
                }

                .info-button {
                    background: rgba(109, 109, 110, 0.7);
                    color: #fff;
                }

                .play-button:hover,
                .info-button:hover {
                    opacity: 0.8;
                }
                "#}
            </style>
        </section>
    }
}
