use yew::prelude::*;
use yew_router::prelude::*;

use crate::config;
use crate::Route;

#[derive(Properties, PartialEq)]
pub struct SiteFooterProps {
    pub on_start: Callback<()>,
}

#[function_component(SiteFooter)]
pub fn site_footer(props: &SiteFooterProps) -> Html {
    let on_start = props.on_start.reform(|_: MouseEvent| ());

    html! {
        <footer class="site-footer">
            <div class="footer-content">
                <div class="brand">
                    <div class="brand-mark small"></div>
                    <span>{config::BRAND_NAME}</span>
                </div>
                <div class="footer-links">
                    <Link<Route> to={Route::Privacy}>{"Privacy"}</Link<Route>>
                    <Link<Route> to={Route::Terms}>{"Terms"}</Link<Route>>
                    <button onclick={on_start}>{"Start Free Audit"}</button>
                </div>
            </div>
        </footer>
    }
}
