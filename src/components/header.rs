use yew::prelude::*;
use web_sys::MouseEvent;

use crate::config;

#[derive(Properties, PartialEq)]
pub struct SiteHeaderProps {
    pub on_reset: Callback<()>,
    pub on_overview: Callback<()>,
    pub on_start: Callback<()>,
    pub on_questions: Callback<()>,
    pub on_results: Callback<()>,
}

fn forward(callback: &Callback<()>) -> Callback<MouseEvent> {
    let callback = callback.clone();
    Callback::from(move |e: MouseEvent| {
        e.prevent_default();
        callback.emit(());
    })
}

#[function_component(SiteHeader)]
pub fn site_header(props: &SiteHeaderProps) -> Html {
    html! {
        <header class="site-header">
            <div class="brand" onclick={forward(&props.on_reset)}>
                <div class="brand-mark"></div>
                <span class="brand-name">{config::BRAND_NAME}</span>
            </div>
            <nav class="header-nav">
                <button onclick={forward(&props.on_overview)}>{"Overview"}</button>
                <button onclick={forward(&props.on_start)}>{"Start"}</button>
                <button onclick={forward(&props.on_questions)}>{"Questions"}</button>
                <button onclick={forward(&props.on_results)}>{"Results"}</button>
            </nav>
            <button class="cta-button header-cta" onclick={forward(&props.on_start)}>
                {"Start Free Audit"}
            </button>
        </header>
    }
}
