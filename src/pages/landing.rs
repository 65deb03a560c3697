use log::{debug, error, info};
use yew::prelude::*;

use crate::actions::{Action, PageContext, PageState};
use crate::components::{
    faq::Faq,
    hero::Hero,
    movie_modal::MovieModal,
    plans::Plans,
};
use crate::content::ContentStore;
use crate::dom;

/// Runs an action that only talks to the browser. Returns the action back
/// when it belongs to the page reducer instead.
fn run_host_effect(action: Action) -> Option<Action> {
    match action {
        Action::PlayTrailer(url) => {
            if let Err(e) = dom::open_in_new_tab(&url) {
                error!("Could not play trailer: {}", e);
            }
            None
        }
        Action::ChoosePlan(name) => {
            // No checkout flow yet
            info!("Plan chosen: {}", name);
            None
        }
        other => Some(other),
    }
}

#[function_component(Landing)]
pub fn landing() -> Html {
    let content = use_memo(|_| ContentStore::bundled(), ());
    let state = {
        let content = content.clone();
        use_reducer(move || PageState::new(content))
    };

    let dispatch = use_callback(
        |action: Action, dispatcher: &UseReducerDispatcher<PageState>| {
            debug!("Dispatching {}", action.name());
            if let Some(action) = run_host_effect(action) {
                dispatcher.dispatch(action);
            }
        },
        state.dispatcher(),
    );

    let ctx = PageContext { dispatch };

    html! {
        <ContextProvider<PageContext> context={ctx}>
            <div class="landing-page">
                <Hero movie={content.featured().cloned()} />
                <Plans plans={content.plans.clone()} />
                <Faq entries={content.faq.clone()} accordion={state.accordion.clone()} />
                <MovieModal movie={state.modal.clone()} />
            </div>
            <style>
                {r#"
                body {
                    margin: 0;
                    background: #141414;
                    color: #ffffff;
                    font-family: "Helvetica Neue", Helvetica, Arial, sans-serif;
                }

                .landing-page {
                    min-height: 100vh;
                    overflow-x: hidden;
                }
                "#}
            </style>
        </ContextProvider<PageContext>>
    }
}

#[cfg(test)]
mod tests {
    use std::rc::Rc;

    use super::*;

    #[test]
    fn page_actions_pass_through() {
        assert_eq!(run_host_effect(Action::ToggleFaq(1)), Some(Action::ToggleFaq(1)));
        assert_eq!(run_host_effect(Action::CloseModal), Some(Action::CloseModal));
        assert_eq!(run_host_effect(Action::ShowInfo(1)), Some(Action::ShowInfo(1)));
    }

    #[test]
    fn choosing_a_plan_is_handled_on_the_host() {
        assert_eq!(run_host_effect(Action::ChoosePlan("Premium".into())), None);
    }

    #[test]
    fn context_compares_by_dispatcher_identity() {
        let dispatch = Callback::from(|_: Action| ());
        let same = PageContext { dispatch: dispatch.clone() };
        assert!(PageContext { dispatch } == same);

        let rebuilt = PageContext { dispatch: Callback::from(|_: Action| ()) };
        assert!(rebuilt != same);
    }

    #[tokio::test]
    async fn landing_renders_every_section_in_order() {
        let html = yew::ServerRenderer::<Landing>::new()
            .hydratable(false)
            .render()
            .await;
        let hero = html.find(r#"id="hero""#).unwrap();
        let plans = html.find(r#"id="plans""#).unwrap();
        let faq = html.find(r#"id="faq""#).unwrap();
        let modal = html.find(r#"id="movieModal""#).unwrap();
        assert!(hero < plans && plans < faq && faq < modal);
        assert!(html.contains("display: none;"));
    }

    #[test]
    fn content_is_shared_not_copied() {
        let content = Rc::new(ContentStore::bundled());
        let state = PageState::new(content.clone());
        assert!(Rc::ptr_eq(&content, &state.content));
        assert_eq!(state.accordion.len(), content.faq.len());
    }
}
