use yew::prelude::*;
use yew_router::prelude::*;
use log::info;

mod audit;
mod config;
mod scroll;
mod components {
    pub mod footer;
    pub mod header;
    pub mod lead_form;
    pub mod question_card;
    pub mod results;
}
mod pages {
    pub mod audit;
    pub mod legal;
}

use pages::{
    audit::AuditPage,
    legal::{PrivacyPolicy, TermsOfUse},
};


#[derive(Clone, Routable, PartialEq)]
pub enum Route {
    #[at("/")]
    Home,
    #[at("/privacy")]
    Privacy,
    #[at("/terms")]
    Terms,
    #[not_found]
    #[at("/404")]
    NotFound,
}


fn switch(routes: Route) -> Html {
    match routes {
        Route::Home => {
            info!("Rendering audit page");
            html! { <AuditPage /> }
        },
        Route::Privacy => {
            info!("Rendering Privacy page");
            html! { <PrivacyPolicy /> }
        },
        Route::Terms => {
            info!("Rendering Terms page");
            html! { <TermsOfUse /> }
        },
        Route::NotFound => {
            info!("Unknown route, falling back to audit page");
            html! { <Redirect<Route> to={Route::Home} /> }
        },
    }
}


#[function_component]
fn App() -> Html {
    html! {
        <BrowserRouter>
            <Switch<Route> render={switch} />
        </BrowserRouter>
    }
}


fn main() {
    // Initialize console error panic hook for better error messages
    console_error_panic_hook::set_once();

    // Initialize logging
    if let Err(e) = console_log::init_with_level(config::log_level()) {
        web_sys::console::error_1(&format!("error initializing log: {}", e).into());
    }

    info!("Starting leadership audit");
    yew::Renderer::<App>::new().render();
}
