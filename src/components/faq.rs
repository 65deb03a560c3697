use log::{debug, warn};
use yew::prelude::*;

use crate::accordion::{answer_style, Accordion};
use crate::actions::{Action, PageContext};
use crate::content::FaqEntry;
use crate::dom;

#[derive(Properties, PartialEq)]
pub struct FaqProps {
    pub entries: Vec<FaqEntry>,
    pub accordion: Accordion,
}

#[derive(Properties, PartialEq)]
struct FaqItemProps {
    index: usize,
    entry: FaqEntry,
    is_open: bool,
    on_toggle: Callback<usize>,
}

#[function_component(FaqItem)]
fn faq_item(props: &FaqItemProps) -> Html {
    let answer_ref = use_node_ref();

    let toggle = {
        let on_toggle = props.on_toggle.clone();
        let index = props.index;
        Callback::from(move |e: MouseEvent| {
            e.prevent_default();
            on_toggle.emit(index);
        })
    };

    let height = if props.is_open {
        dom::scroll_height(&answer_ref)
            .map_err(|e| debug!("Answer {} not measured yet: {}", props.index, e))
            .ok()
    } else {
        None
    };

    html! {
        <div class={classes!("faq-item", props.is_open.then(|| "open"))}>
            <button class="faq-question" onclick={toggle}>
                <span class="question-text">{&props.entry.question}</span>
                <span class="faq-icon">{if props.is_open { "−" } else { "+" }}</span>
            </button>
            <div
                ref={answer_ref}
                class="faq-answer"
                id={format!("faq-answer-{}", props.index)}
                style={answer_style(props.is_open, height)}
            >
                <p>{&props.entry.answer}</p>
            </div>
        </div>
    }
}

#[function_component(Faq)]
pub fn faq(props: &FaqProps) -> Html {
    let on_toggle = use_context::<PageContext>()
        .map(|ctx| ctx.dispatch.reform(Action::ToggleFaq))
        .unwrap_or_default();

    if props.accordion.len() != props.entries.len() {
        warn!(
            "FAQ state tracks {} entries but {} are rendered",
            props.accordion.len(),
            props.entries.len()
        );
    }

    html! {
        <section class="faq-section">
            <h2>{"Frequently Asked Questions"}</h2>
            <div id="faq">
                { for props.entries.iter().enumerate().map(|(index, entry)| html! {
                    <FaqItem
                        key={index}
                        index={index}
                        entry={entry.clone()}
                        is_open={props.accordion.is_open(index)}
                        on_toggle={on_toggle.clone()}
                    />
                }) }
            </div>
            <style>
                {r#"
                .faq-section {
                    max-width: 800px;
                    margin: 0 auto;
                    padding: 4rem 2rem;
                }

                .faq-section h2 {
                    font-size: 2rem;
                    text-align: center;
                    margin-bottom: 2rem;
                }

                .faq-item {
                    margin-bottom: 0.5rem;
                    background: #2d2d2d;
                }

                .faq-question {
                    width: 100%;
                    display: flex;
                    justify-content: space-between;
                    align-items: center;
                    padding: 1.5rem;
                    background: none;
                    border: none;
                    color: #fff;
                    font-size: 1.25rem;
                    text-align: left;
                    cursor: pointer;
                }

                .faq-icon {
                    font-size: 1.75rem;
                    transition: transform 0.3s ease;
                }

                .faq-answer {
                    overflow: hidden;
                    transition: height 0.3s ease;
                    border-top: 1px solid #000;
                }

                .faq-answer p {
                    margin: 0;
                    padding: 1.5rem;
                    font-size: 1.1rem;
                    line-height: 1.5;
                }
                "#}
            </style>
        </section>
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::content::ContentStore;

    async fn render(accordion: Accordion) -> String {
        let entries = ContentStore::bundled().faq;
        yew::ServerRenderer::<Faq>::with_props(move || FaqProps { entries, accordion })
            .hydratable(false)
            .render()
            .await
    }

    #[tokio::test]
    async fn every_entry_starts_collapsed() {
        let entries = ContentStore::bundled().faq;
        let html = render(Accordion::new(&entries)).await;
        assert_eq!(html.matches("height: 0px;").count(), 2);
        assert_eq!(html.matches(r#"class="faq-icon">+<"#).count(), 2);
        assert!(html.contains(r#"id="faq-answer-0""#));
        assert!(html.contains(r#"id="faq-answer-1""#));
        assert!(html.contains("What is Netflix?"));
    }

    #[tokio::test]
    async fn open_entry_shows_minus_and_expands() {
        let entries = ContentStore::bundled().faq;
        let mut accordion = Accordion::new(&entries);
        accordion.toggle(1).unwrap();
        let html = render(accordion).await;
        assert_eq!(html.matches(r#"class="faq-icon">−<"#).count(), 1);
        assert_eq!(html.matches("height: 0px;").count(), 1);
        // Nothing is mounted to measure, so the open answer grows to fit.
        assert!(html.contains("height: auto;"));
        assert!(html.contains(r#"class="faq-item open""#));
    }
}
