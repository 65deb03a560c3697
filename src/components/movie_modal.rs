use yew::prelude::*;

use crate::actions::{Action, PageContext};
use crate::content::MediaItem;

#[derive(Properties, PartialEq)]
pub struct MovieModalProps {
    pub movie: Option<MediaItem>,
}

#[function_component(MovieModal)]
pub fn movie_modal(props: &MovieModalProps) -> Html {
    let dispatch = use_context::<PageContext>()
        .map(|ctx| ctx.dispatch)
        .unwrap_or_default();

    let close = Callback::from(move |e: MouseEvent| {
        e.prevent_default();
        dispatch.emit(Action::CloseModal);
    });

    let display = if props.movie.is_some() { "block" } else { "none" };

    html! {
        <div id="movieModal" class="modal-overlay" style={format!("display: {};", display)} onclick={close.clone()}>
            {
                if let Some(movie) = props.movie.as_ref() {
                    html! {
                        // Clicks inside the content must not reach the scrim's handler.
                        <div class="modal-content slide-up" onclick={Callback::from(|e: MouseEvent| e.stop_propagation())}>
                            <button class="modal-close" onclick={close.clone()}>{"×"}</button>
                            <img src={movie.poster_url.clone()} alt={movie.title.clone()} class="modal-poster" />
                            <div class="modal-body">
                                <h2>{&movie.title}</h2>
                                <p>{&movie.description}</p>
                                <div class="modal-info">
                                    <span>{movie.genre.join(", ")}</span>
                                </div>
                            </div>
                        </div>
                    }
                } else {
                    html! {}
                }
            }
            <style>
                {r#"
                .modal-overlay {
                    position: fixed;
                    inset: 0;
                    z-index: 100;
                    background: rgba(0, 0, 0, 0.75);
                    overflow-y: auto;
                }

                .modal-content {
                    position: relative;
                    max-width: 720px;
                    margin: 10vh auto;
                    background: #181818;
                    border-radius: 8px;
                    padding: 2.5rem;
                }

                .modal-close {
                    position: absolute;
                    top: 1rem;
                    right: 1rem;
                    background: #181818;
                    color: #fff;
                    border: none;
                    border-radius: 50%;
                    width: 2.25rem;
                    height: 2.25rem;
                    font-size: 1.5rem;
                    cursor: pointer;
                }

                .modal-poster {
                    float: left;
                    width: 180px;
                    margin-right: 2rem;
                    border-radius: 4px;
                }

                .modal-body h2 {
                    font-size: 2rem;
                    margin-bottom: 1rem;
                }

                .modal-info {
                    margin-top: 1.5rem;
                    color: #b3b3b3;
                }

                .slide-up {
                    animation: slideUp 0.3s ease-out;
                }

                @keyframes slideUp {
                    from { transform: translateY(40px); opacity: 0; }
                    to { transform: translateY(0); opacity: 1; }
                }
                "#}
            </style>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::content::ContentStore;

    async fn render(movie: Option<MediaItem>) -> String {
        yew::ServerRenderer::<MovieModal>::with_props(move || MovieModalProps { movie })
            .hydratable(false)
            .render()
            .await
    }

    #[tokio::test]
    async fn closed_modal_is_hidden() {
        let html = render(None).await;
        assert!(html.contains("display: none;"));
        assert!(!html.contains(r#"class="modal-content"#));
    }

    #[tokio::test]
    async fn open_modal_shows_movie_details() {
        let html = render(ContentStore::bundled().movie(1).cloned()).await;
        assert!(html.contains("display: block;"));
        assert!(html.contains("<h2>Game of Thrones</h2>"));
        assert!(html.contains("Drama, Fantasy, Adventure"));
        assert!(html.contains("u3bZgnGQ9T01sWNhyveQz0wH0Hl.jpg"));
    }

    #[tokio::test]
    async fn content_sits_inside_the_scrim() {
        let html = render(ContentStore::bundled().movie(1).cloned()).await;
        let scrim = html.find(r#"id="movieModal""#).unwrap();
        let content = html.find(r#"class="modal-content"#).unwrap();
        let close = html.find(r#"class="modal-close""#).unwrap();
        assert!(scrim < content && content < close);
    }

    #[tokio::test]
    async fn movie_without_genres_shows_empty_line() {
        let mut movie = ContentStore::bundled().movies[0].clone();
        movie.genre.clear();
        let html = render(Some(movie)).await;
        assert!(html.contains(r#"<div class="modal-info"><span></span></div>"#));
    }
}
