use yew::prelude::*;
use web_sys::{HtmlInputElement, HtmlSelectElement};

use crate::audit::{Challenge, LeadField, LeadInfo, TeamSize};

#[derive(Properties, PartialEq)]
pub struct LeadFormProps {
    pub lead: LeadInfo,
    #[prop_or_default]
    pub error: Option<String>,
    pub on_field: Callback<(LeadField, String)>,
    pub on_team_size: Callback<TeamSize>,
    pub on_challenge: Callback<Challenge>,
    pub on_submit: Callback<()>,
}

#[derive(Properties, PartialEq)]
struct TextFieldProps {
    field: LeadField,
    label: &'static str,
    input_type: &'static str,
    placeholder: &'static str,
    value: String,
    on_field: Callback<(LeadField, String)>,
}

#[function_component(TextField)]
fn text_field(props: &TextFieldProps) -> Html {
    let oninput = {
        let field = props.field;
        let on_field = props.on_field.clone();
        Callback::from(move |e: InputEvent| {
            let input: HtmlInputElement = e.target_unchecked_into();
            on_field.emit((field, input.value()));
        })
    };

    html! {
        <div class="form-field">
            <label>{props.label}</label>
            <input
                required=true
                type={props.input_type}
                placeholder={props.placeholder}
                value={props.value.clone()}
                {oninput}
            />
        </div>
    }
}

#[function_component(LeadForm)]
pub fn lead_form(props: &LeadFormProps) -> Html {
    let onsubmit = {
        let on_submit = props.on_submit.clone();
        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();
            on_submit.emit(());
        })
    };

    let on_team_size = {
        let on_team_size = props.on_team_size.clone();
        Callback::from(move |e: Event| {
            let select: HtmlSelectElement = e.target_unchecked_into();
            if let Some(size) = TeamSize::from_label(&select.value()) {
                on_team_size.emit(size);
            }
        })
    };

    let on_challenge = {
        let on_challenge = props.on_challenge.clone();
        Callback::from(move |e: Event| {
            let select: HtmlSelectElement = e.target_unchecked_into();
            if let Some(challenge) = Challenge::from_label(&select.value()) {
                on_challenge.emit(challenge);
            }
        })
    };

    let lead = &props.lead;

    html! {
        <div class="lead-card">
            <h2>{"Start your audit"}</h2>
            <p class="muted">{"Answer a few details to personalize your recommendations."}</p>
            <form class="lead-form" {onsubmit}>
                <TextField
                    field={LeadField::Name}
                    label="Full name"
                    input_type="text"
                    placeholder="Jane Doe"
                    value={lead.name.clone()}
                    on_field={props.on_field.clone()}
                />
                <div class="form-row">
                    <TextField
                        field={LeadField::Email}
                        label="Work email"
                        input_type="email"
                        placeholder="jane@company.com"
                        value={lead.email.clone()}
                        on_field={props.on_field.clone()}
                    />
                    <TextField
                        field={LeadField::Company}
                        label="Company"
                        input_type="text"
                        placeholder="Company Inc."
                        value={lead.company.clone()}
                        on_field={props.on_field.clone()}
                    />
                </div>
                <div class="form-row">
                    <TextField
                        field={LeadField::Role}
                        label="Role"
                        input_type="text"
                        placeholder="HR Director, CEO, etc."
                        value={lead.role.clone()}
                        on_field={props.on_field.clone()}
                    />
                    <div class="form-field">
                        <label>{"Team size"}</label>
                        <select onchange={on_team_size}>
                            { for TeamSize::ALL.iter().map(|size| html! {
                                <option value={size.label()} selected={*size == lead.team_size}>
                                    {size.label()}
                                </option>
                            }) }
                        </select>
                    </div>
                </div>
                <div class="form-field">
                    <label>{"Primary challenge"}</label>
                    <select onchange={on_challenge}>
                        { for Challenge::ALL.iter().map(|challenge| html! {
                            <option value={challenge.label()} selected={*challenge == lead.challenge}>
                                {challenge.label()}
                            </option>
                        }) }
                    </select>
                </div>
                if let Some(error) = &props.error {
                    <div class="form-error">{error}</div>
                }
                <button type="submit" class="cta-button">{"Continue to questions"}</button>
                <p class="fine-print">
                    {"By continuing, you agree to be contacted about CLEAR Performance Coaching. We respect your privacy."}
                </p>
            </form>
        </div>
    }
}
