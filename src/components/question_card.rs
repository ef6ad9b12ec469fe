use yew::prelude::*;

use crate::audit::{Answer, Question};

#[derive(Properties, PartialEq)]
pub struct QuestionCardProps {
    pub question: &'static Question,
    pub selected: Option<Answer>,
    pub is_first: bool,
    pub is_last: bool,
    pub can_submit: bool,
    #[prop_or_default]
    pub error: Option<String>,
    pub on_answer: Callback<Answer>,
    pub on_prev: Callback<()>,
    pub on_next: Callback<()>,
    pub on_submit: Callback<()>,
}

#[function_component(QuestionCard)]
pub fn question_card(props: &QuestionCardProps) -> Html {
    let on_prev = props.on_prev.reform(|_: MouseEvent| ());
    let on_next = props.on_next.reform(|_: MouseEvent| ());
    let on_submit = props.on_submit.reform(|_: MouseEvent| ());

    html! {
        <div class="panel question-card">
            <div class="question-category">{props.question.category.label()}</div>
            <div class="question-text">{props.question.text}</div>

            <div class="answer-options">
                { for Answer::OPTIONS.iter().map(|option| {
                    let option = *option;
                    let onclick = props.on_answer.reform(move |_: MouseEvent| option);
                    let selected = props.selected == Some(option);
                    html! {
                        <button
                            key={option.label()}
                            class={classes!("answer-button", selected.then(|| "selected"))}
                            {onclick}
                        >
                            {option.label()}
                        </button>
                    }
                }) }
            </div>

            if let Some(error) = &props.error {
                <div class="form-error">{error}</div>
            }

            <div class="question-nav">
                <button class="ghost-button" onclick={on_prev} disabled={props.is_first}>{"Back"}</button>
                if props.is_last {
                    <button class="cta-button" onclick={on_submit} disabled={!props.can_submit}>
                        {"See results"}
                    </button>
                } else {
                    <button class="cta-button" onclick={on_next}>{"Next"}</button>
                }
            </div>
        </div>
    }
}
