use yew::prelude::*;

use crate::audit::export::mailto_link;
use crate::audit::recommendations::recommendations;
use crate::audit::score::{MAX_CATEGORY_SCORE, MAX_SCORE};
use crate::audit::{LeadInfo, Score};
use crate::config;

#[derive(Properties, PartialEq)]
pub struct ResultsPanelProps {
    pub lead: LeadInfo,
    pub score: Score,
    pub on_reset: Callback<()>,
}

#[function_component(ResultsPanel)]
pub fn results_panel(props: &ResultsPanelProps) -> Html {
    let score = props.score;
    let tier = score.tier();
    let mail_href = mailto_link(config::CONTACT_EMAIL, config::MAIL_SUBJECT, &props.lead, &score);
    let on_reset = props.on_reset.reform(|_: MouseEvent| ());

    html! {
        <div class="results-grid">
            <div class="panel results-main">
                <div class="muted small">{"Score"}</div>
                <div class="score-line">
                    <div class="score-value">
                        {score.total}<span class="score-max">{format!("/{}", MAX_SCORE)}</span>
                    </div>
                    <span class={tier.badge_class()}>{tier.label()}</span>
                </div>
                <p class="tier-description">{tier.description()}</p>

                <div class="category-grid">
                    { for score.categories().map(|(category, count)| html! {
                        <div class="category-card" key={category.label()}>
                            <div class="muted small">{category.label()}</div>
                            <div class="category-value">
                                {count}<span class="score-max">{format!("/{}", MAX_CATEGORY_SCORE)}</span>
                            </div>
                        </div>
                    }) }
                </div>

                <div class="recommendations">
                    <div class="panel-title">{"Top Recommendations"}</div>
                    <ul>
                        { for recommendations(&score).into_iter().map(|rec| html! {
                            <li>{"• "}{rec}</li>
                        }) }
                    </ul>
                </div>
            </div>

            <div class="panel next-steps">
                <div class="panel-title">{"Next steps"}</div>
                <ul>
                    <li>{"• Get a 15-minute consult to review your audit"}</li>
                    <li>{"• Receive a sample of the CLEAR Coaching tools"}</li>
                    <li>{"• Align on a 90-day plan for quick wins"}</li>
                </ul>
                <a class="cta-button" href={mail_href}>{"Email my results"}</a>
                <button class="ghost-button" onclick={on_reset}>{"Restart audit"}</button>
            </div>
        </div>
    }
}
