use yew::prelude::*;

use crate::actions::{Action, PageContext};
use crate::content::SubscriptionPlan;

#[derive(Properties, PartialEq)]
pub struct PlansProps {
    pub plans: Vec<SubscriptionPlan>,
}

#[derive(Properties, PartialEq)]
struct PlanCardProps {
    plan: SubscriptionPlan,
    on_choose: Callback<String>,
}

#[function_component(PlanCard)]
fn plan_card(props: &PlanCardProps) -> Html {
    let plan = &props.plan;
    let onclick = {
        let on_choose = props.on_choose.clone();
        let name = plan.name.clone();
        Callback::from(move |e: MouseEvent| {
            e.prevent_default();
            on_choose.emit(name.clone());
        })
    };

    html! {
        <div class="plan-card fade-in">
            <h3>{&plan.name}</h3>
            <div class="plan-price">{&plan.price}</div>
            <div class="plan-features">
                <p>{format!("Video quality: {}", plan.quality)}</p>
                <p>{format!("Resolution: {}", plan.resolution)}</p>
                <p>{format!("Devices: {}", plan.devices.join(", "))}</p>
            </div>
            <button class="plan-button" {onclick}>{"Choose Plan"}</button>
        </div>
    }
}

#[function_component(Plans)]
pub fn plans(props: &PlansProps) -> Html {
    let on_choose = use_context::<PageContext>()
        .map(|ctx| ctx.dispatch.reform(Action::ChoosePlan))
        .unwrap_or_default();

    html! {
        <section class="plans-section">
            <h2>{"Choose the plan that's right for you"}</h2>
            <div id="plans" class="plans-grid">
                { for props.plans.iter().map(|plan| html! {
                    <PlanCard key={plan.name.clone()} plan={plan.clone()} on_choose={on_choose.clone()} />
                }) }
            </div>
            <style>
                {r#"
                .plans-section {
                    max-width: 1100px;
                    margin: 0 auto;
                    padding: 4rem 2rem;
                }

                .plans-section h2 {
                    font-size: 2rem;
                    text-align: center;
                    margin-bottom: 2rem;
                }

                .plans-grid {
                    display: grid;
                    grid-template-columns: repeat(auto-fit, minmax(250px, 1fr));
                    gap: 1.5rem;
                }

                .plan-card {
                    background: #181818;
                    border: 1px solid #333;
                    border-radius: 8px;
                    padding: 2rem;
                    display: flex;
                    flex-direction: column;
                    gap: 1rem;
                }

                .plan-price {
                    font-size: 1.8rem;
                    font-weight: 700;
                    color: #e50914;
                }

                .plan-features p {
                    color: #b3b3b3;
                    margin: 0.25rem 0;
                }

                .plan-button {
                    margin-top: auto;
                    padding: 0.75rem;
                    background: #e50914;
                    color: #fff;
                    border: none;
                    border-radius: 4px;
                    font-weight: 600;
                    cursor: pointer;
                }

                .fade-in {
                    animation: fadeIn 0.5s ease-in-out;
                }

                @keyframes fadeIn {
                    from { opacity: 0; transform: translateY(20px); }
                    to { opacity: 1; transform: translateY(0); }
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

    async fn render(plans: Vec<SubscriptionPlan>) -> String {
        yew::ServerRenderer::<Plans>::with_props(move || PlansProps { plans })
            .hydratable(false)
            .render()
            .await
    }

    #[tokio::test]
    async fn one_card_per_plan() {
        let html = render(ContentStore::bundled().plans).await;
        assert_eq!(html.matches(r#"class="plan-card"#).count(), 3);
        assert_eq!(html.matches("Choose Plan").count(), 3);
        assert!(html.contains("$13.99"));
    }

    #[tokio::test]
    async fn card_lists_quality_resolution_and_devices() {
        let html = render(ContentStore::bundled().plans).await;
        assert!(html.contains("Video quality: Best"));
        assert!(html.contains("Resolution: 4K+HDR"));
        assert!(html.contains("Devices: Phone, Tablet, Computer, TV"));
    }

    #[tokio::test]
    async fn no_plans_renders_empty_grid() {
        let html = render(Vec::new()).await;
        assert!(html.contains(r#"id="plans""#));
        assert!(!html.contains(r#"class="plan-card"#));
    }
}
