use yew::prelude::*;
use yew_router::prelude::*;

use crate::config;
use crate::Route;

#[function_component(LegalLinks)]
fn legal_links() -> Html {
    html! {
        <div class="legal-links">
            <Link<Route> to={Route::Home}>{"Back to the audit"}</Link<Route>>
            {" | "}
            <Link<Route> to={Route::Terms}>{"Terms of Use"}</Link<Route>>
            {" | "}
            <Link<Route> to={Route::Privacy}>{"Privacy Policy"}</Link<Route>>
        </div>
    }
}

#[function_component(PrivacyPolicy)]
pub fn privacy_policy() -> Html {
    use_effect_with_deps(
        move |_| {
            if let Some(window) = web_sys::window() {
                window.scroll_to_with_x_and_y(0.0, 0.0);
            }
            || ()
        },
        (),
    );

    html! {
        <div class="legal-content privacy-policy">
            <h1>{"Privacy Policy"}</h1>

            <section>
                <h2>{"1. What we ask for"}</h2>
                <p>{"The leadership audit asks for the following details:"}</p>
                <ul>
                    <li>{"Full name, work email, company and role (to personalize your report)"}</li>
                    <li>{"Team size and primary challenge (to put your score in context)"}</li>
                    <li>{"Yes/No answers to twelve audit questions"}</li>
                </ul>
            </section>

            <section>
                <h2>{"2. Where it goes"}</h2>
                <ul>
                    <li>{"Your details and answers stay in your browser while you take the audit."}</li>
                    <li>{"Nothing is sent to a server and nothing is stored once you leave the page."}</li>
                    <li>{"Choosing \"Email my results\" opens your own mail client with a pre-filled message. It is only sent if you send it."}</li>
                </ul>
            </section>

            <section>
                <h2>{"3. Contact"}</h2>
                <p>
                    {"For privacy-related questions, contact "}
                    <a href={format!("mailto:{}", config::CONTACT_EMAIL)}>{config::CONTACT_EMAIL}</a>
                </p>
            </section>
            <LegalLinks />
        </div>
    }
}

#[function_component(TermsOfUse)]
pub fn terms_of_use() -> Html {
    use_effect_with_deps(
        move |_| {
            if let Some(window) = web_sys::window() {
                window.scroll_to_with_x_and_y(0.0, 0.0);
            }
            || ()
        },
        (),
    );

    html! {
        <div class="legal-content terms-of-use">
            <h1>{"Terms of Use"}</h1>
            <p class="company-name">{format!("Provided by {}", config::BRAND_NAME)}</p>

            <section>
                <h2>{"1. The audit"}</h2>
                <p>{"The leadership audit is a free self-assessment. The score, tier and recommendations are generated from your own answers and are meant as a starting point for a conversation, not as professional advice."}</p>
            </section>

            <section>
                <h2>{"2. Contact about your results"}</h2>
                <p>{"By continuing past the details form you agree that we may contact you about CLEAR Performance Coaching if you email us your results."}</p>
            </section>

            <section>
                <h2>{"3. Intellectual property"}</h2>
                <p>{"The audit questions, recommendations and CLEAR Coaching materials remain the property of CLEAR Performance Coaching."}</p>
            </section>

            <section>
                <h2>{"4. Limitation of liability"}</h2>
                <p>{"The audit is provided \"as is\" without warranties of any kind."}</p>
            </section>
            <LegalLinks />
        </div>
    }
}
