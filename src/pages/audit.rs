use log::debug;
use yew::prelude::*;

use crate::audit::{
    AuditError, AuditWizard, Answer, Challenge, LeadField, Stage, TeamSize, QUESTION_COUNT,
};
use crate::components::footer::SiteFooter;
use crate::components::header::SiteHeader;
use crate::components::lead_form::LeadForm;
use crate::components::question_card::QuestionCard;
use crate::components::results::ResultsPanel;
use crate::scroll;

pub enum AuditMsg {
    Start,
    ShowOverview,
    ShowWhy,
    OpenQuestions,
    OpenResults,
    SetLeadField(LeadField, String),
    SetTeamSize(TeamSize),
    SetChallenge(Challenge),
    SubmitLead,
    AnswerCurrent(Answer),
    NextQuestion,
    PrevQuestion,
    SubmitAudit,
    Reset,
}

pub struct AuditPage {
    wizard: AuditWizard,
    lead_error: Option<AuditError>,
    audit_error: Option<AuditError>,
    form_ref: NodeRef,
    why_ref: NodeRef,
    audit_ref: NodeRef,
    result_ref: NodeRef,
}

impl AuditPage {
    fn section_for(&self, stage: Stage) -> Option<&NodeRef> {
        match stage {
            Stage::Hero => None,
            Stage::Lead => Some(&self.form_ref),
            Stage::Audit => Some(&self.audit_ref),
            Stage::Result => Some(&self.result_ref),
        }
    }

    fn follow_stage(&self) {
        match self.section_for(self.wizard.stage()) {
            Some(section) => scroll::scroll_into_view_later(section),
            None => scroll::scroll_to_top(),
        }
    }

    fn view_audit_section(&self, ctx: &Context<Self>) -> Html {
        let answers = self.wizard.answers();
        let answered = answers.answered_count();

        let body = if !self.wizard.lead_submitted() {
            html! {
                <div class="panel">
                    <div class="panel-title">{"Please complete your details first"}</div>
                    <p class="muted">
                        {"Enter your information above to unlock the questions. This ensures your results and recommendations are personalized."}
                    </p>
                    <button class="cta-button" onclick={ctx.link().callback(|_| AuditMsg::Start)}>
                        {"Go to form"}
                    </button>
                </div>
            }
        } else {
            let question = self.wizard.current_question();
            html! {
                <QuestionCard
                    question={question}
                    selected={answers.get(question.id)}
                    is_first={self.wizard.is_first_question()}
                    is_last={self.wizard.is_last_question()}
                    can_submit={answers.is_complete()}
                    error={self.audit_error.as_ref().map(|e| e.to_string())}
                    on_answer={ctx.link().callback(AuditMsg::AnswerCurrent)}
                    on_prev={ctx.link().callback(|_: ()| AuditMsg::PrevQuestion)}
                    on_next={ctx.link().callback(|_: ()| AuditMsg::NextQuestion)}
                    on_submit={ctx.link().callback(|_: ()| AuditMsg::SubmitAudit)}
                />
            }
        };

        html! {
            <section ref={self.audit_ref.clone()} class="page-section narrow">
                <div class="section-heading">
                    <h2>{"Leadership Audit"}</h2>
                    <div class="muted small">{format!("{}/{} answered", answered, QUESTION_COUNT)}</div>
                </div>
                <div class="progress-track">
                    <div class="progress-fill" style={format!("width: {}%;", answers.progress_percent())}></div>
                </div>
                {body}
            </section>
        }
    }

    fn view_results_section(&self, ctx: &Context<Self>) -> Html {
        html! {
            <section ref={self.result_ref.clone()} class="page-section medium">
                <h2 class="section-title">{"Your Results"}</h2>
                if self.wizard.stage() == Stage::Result {
                    <ResultsPanel
                        lead={self.wizard.lead().clone()}
                        score={self.wizard.score()}
                        on_reset={ctx.link().callback(|_: ()| AuditMsg::Reset)}
                    />
                } else {
                    <p class="muted">{"Complete all questions to reveal your score and tailored recommendations."}</p>
                }
            </section>
        }
    }
}

impl Component for AuditPage {
    type Message = AuditMsg;
    type Properties = ();

    fn create(_ctx: &Context<Self>) -> Self {
        Self {
            wizard: AuditWizard::new(),
            lead_error: None,
            audit_error: None,
            form_ref: NodeRef::default(),
            why_ref: NodeRef::default(),
            audit_ref: NodeRef::default(),
            result_ref: NodeRef::default(),
        }
    }

    fn update(&mut self, _ctx: &Context<Self>, msg: Self::Message) -> bool {
        match msg {
            AuditMsg::Start => {
                self.wizard.start();
                self.follow_stage();
                true
            }
            AuditMsg::ShowOverview => {
                self.wizard.show_overview();
                scroll::scroll_to_top();
                true
            }
            AuditMsg::ShowWhy => {
                scroll::scroll_into_view_later(&self.why_ref);
                false
            }
            AuditMsg::OpenQuestions => {
                self.wizard.open_questions();
                self.follow_stage();
                true
            }
            AuditMsg::OpenResults => {
                self.wizard.open_results();
                self.follow_stage();
                true
            }
            AuditMsg::SetLeadField(field, value) => {
                self.wizard.set_lead_field(field, value);
                if let Some(AuditError::MissingLeadField(missing)) = self.lead_error {
                    if missing == field {
                        self.lead_error = None;
                    }
                }
                true
            }
            AuditMsg::SetTeamSize(size) => {
                self.wizard.set_team_size(size);
                true
            }
            AuditMsg::SetChallenge(challenge) => {
                self.wizard.set_challenge(challenge);
                true
            }
            AuditMsg::SubmitLead => {
                match self.wizard.submit_lead() {
                    Ok(()) => {
                        self.lead_error = None;
                        self.follow_stage();
                    }
                    Err(e) => self.lead_error = Some(e),
                }
                true
            }
            AuditMsg::AnswerCurrent(answer) => {
                self.wizard.answer_current(answer);
                self.audit_error = None;
                true
            }
            AuditMsg::NextQuestion => self.wizard.next(),
            AuditMsg::PrevQuestion => self.wizard.prev(),
            AuditMsg::SubmitAudit => {
                match self.wizard.submit_audit() {
                    Ok(()) => {
                        self.audit_error = None;
                        self.follow_stage();
                    }
                    Err(e) => {
                        debug!("Audit not submitted: {}", e);
                        self.audit_error = Some(e);
                    }
                }
                true
            }
            AuditMsg::Reset => {
                self.wizard.reset();
                self.lead_error = None;
                self.audit_error = None;
                scroll::scroll_to_top();
                true
            }
        }
    }

    fn view(&self, ctx: &Context<Self>) -> Html {
        let link = ctx.link();
        let start = link.callback(|_: ()| AuditMsg::Start);

        html! {
            <div class="audit-page">
                <SiteHeader
                    on_reset={link.callback(|_: ()| AuditMsg::Reset)}
                    on_overview={link.callback(|_: ()| AuditMsg::ShowOverview)}
                    on_start={start.clone()}
                    on_questions={link.callback(|_: ()| AuditMsg::OpenQuestions)}
                    on_results={link.callback(|_: ()| AuditMsg::OpenResults)}
                />

                <section class="hero">
                    <div class="hero-glow hero-glow-left"></div>
                    <div class="hero-glow hero-glow-right"></div>
                    <div class="hero-grid">
                        <div class="hero-copy">
                            <p class="eyebrow">{"Free leadership audit"}</p>
                            <h1>
                                {"Is your organization "}<span class="accent">{"coach-ready"}</span>{"?"}
                            </h1>
                            <p class="hero-lede">
                                {"Take our 3-minute audit and get an instant score + tailored recommendations to boost clarity, engagement, and execution across your teams."}
                            </p>
                            <div class="hero-actions">
                                <button class="cta-button large" onclick={link.callback(|_| AuditMsg::Start)}>
                                    {"Start my free audit"}
                                </button>
                                <button class="ghost-button large" onclick={link.callback(|_| AuditMsg::ShowWhy)}>
                                    {"Why this assessment?"}
                                </button>
                            </div>
                            <div class="hero-points">
                                { for ["Instant results", "12 quick questions", "No cost"].iter().map(|point| html! {
                                    <div class="hero-point"><span class="dot"></span><span>{*point}</span></div>
                                }) }
                            </div>
                        </div>

                        <div ref={self.form_ref.clone()}>
                            <LeadForm
                                lead={self.wizard.lead().clone()}
                                error={self.lead_error.as_ref().map(|e| e.to_string())}
                                on_field={link.callback(|(field, value): (LeadField, String)| AuditMsg::SetLeadField(field, value))}
                                on_team_size={link.callback(AuditMsg::SetTeamSize)}
                                on_challenge={link.callback(AuditMsg::SetChallenge)}
                                on_submit={link.callback(|_: ()| AuditMsg::SubmitLead)}
                            />
                        </div>
                    </div>
                </section>

                <section ref={self.why_ref.clone()} id="why" class="page-section">
                    <div class="why-grid">
                        <div class="why-text">
                            <h2>{"Why this assessment matters"}</h2>
                            <p>
                                {"Coaching isn’t about vague motivation, it’s about measurable results. This leadership audit helps you uncover blind spots, identify growth opportunities, and prove ROI from coaching investments."}
                            </p>
                            <p>
                                {"Complete the audit to get a tailored report on where your leadership team can unlock performance and productivity."}
                            </p>
                            <button class="cta-button" onclick={link.callback(|_| AuditMsg::Start)}>{"Start my audit"}</button>
                        </div>
                        <div class="panel">
                            <h3>{"What you’ll get"}</h3>
                            <ul class="muted">
                                <li>{"• Instant score: Coach-Ready / Progressing / At Risk"}</li>
                                <li>{"• Per-category breakdown (Clarity, Coaching, Performance, Scale)"}</li>
                                <li>{"• Top 3 actions tailored to your gaps"}</li>
                            </ul>
                        </div>
                    </div>
                </section>

                { self.view_audit_section(ctx) }
                { self.view_results_section(ctx) }

                <SiteFooter on_start={start} />

                <style>
                    {r#"
                    .audit-page {
                        min-height: 100vh;
                        background: #0a0a0a;
                        color: #ffffff;
                        font-family: -apple-system, BlinkMacSystemFont, "Segoe UI", Roboto, Helvetica, Arial, sans-serif;
                    }

                    .site-header {
                        position: sticky;
                        top: 0;
                        z-index: 40;
                        display: flex;
                        align-items: center;
                        justify-content: space-between;
                        padding: 1.25rem 2.5rem;
                        border-bottom: 1px solid rgba(255, 255, 255, 0.1);
                        background: rgba(10, 10, 10, 0.7);
                        backdrop-filter: blur(10px);
                    }

                    .brand {
                        display: flex;
                        align-items: center;
                        gap: 0.75rem;
                        cursor: pointer;
                        font-weight: 600;
                        letter-spacing: 0.02em;
                    }

                    .brand-mark {
                        width: 28px;
                        height: 28px;
                        border-radius: 2px;
                        background: #f97316;
                    }

                    .brand-mark.small {
                        width: 24px;
                        height: 24px;
                    }

                    .header-nav {
                        display: flex;
                        gap: 1.5rem;
                    }

                    .header-nav button,
                    .footer-links button,
                    .footer-links a {
                        background: none;
                        border: none;
                        color: rgba(255, 255, 255, 0.8);
                        font-size: 0.9rem;
                        cursor: pointer;
                        text-decoration: none;
                    }

                    .header-nav button:hover,
                    .footer-links button:hover,
                    .footer-links a:hover {
                        color: #ffffff;
                    }

                    .cta-button {
                        display: inline-flex;
                        justify-content: center;
                        background: #f97316;
                        color: #ffffff;
                        border: none;
                        border-radius: 8px;
                        padding: 0.6rem 1.2rem;
                        font-weight: 600;
                        cursor: pointer;
                        text-decoration: none;
                        box-shadow: 0 10px 20px rgba(249, 115, 22, 0.2);
                        transition: background 0.2s ease;
                    }

                    .cta-button:hover {
                        background: #ea580c;
                    }

                    .ghost-button {
                        display: inline-flex;
                        justify-content: center;
                        background: transparent;
                        color: rgba(255, 255, 255, 0.9);
                        border: 1px solid rgba(255, 255, 255, 0.15);
                        border-radius: 8px;
                        padding: 0.6rem 1.2rem;
                        font-weight: 600;
                        cursor: pointer;
                    }

                    .ghost-button:hover {
                        border-color: rgba(255, 255, 255, 0.3);
                    }

                    .cta-button.large,
                    .ghost-button.large {
                        padding: 0.8rem 1.5rem;
                        border-radius: 12px;
                    }

                    button:disabled {
                        opacity: 0.4;
                        cursor: default;
                    }

                    .hero {
                        position: relative;
                        overflow: hidden;
                    }

                    .hero-glow {
                        position: absolute;
                        width: 16rem;
                        height: 16rem;
                        border-radius: 50%;
                        background: rgba(249, 115, 22, 0.1);
                        filter: blur(64px);
                        pointer-events: none;
                    }

                    .hero-glow-left { top: -6rem; left: -6rem; }
                    .hero-glow-right { bottom: -6rem; right: -6rem; }

                    .hero-grid {
                        max-width: 80rem;
                        margin: 0 auto;
                        padding: 6rem 2.5rem;
                        display: grid;
                        grid-template-columns: 1fr 1fr;
                        gap: 2.5rem;
                        align-items: center;
                    }

                    .eyebrow {
                        font-size: 0.75rem;
                        text-transform: uppercase;
                        letter-spacing: 0.2em;
                        color: rgba(255, 255, 255, 0.6);
                    }

                    .hero-copy h1 {
                        font-size: 3rem;
                        font-weight: 800;
                        line-height: 1.15;
                        margin-top: 0.75rem;
                    }

                    .accent {
                        color: #f97316;
                    }

                    .hero-lede {
                        margin-top: 1.25rem;
                        font-size: 1.125rem;
                        color: rgba(255, 255, 255, 0.8);
                        max-width: 36rem;
                    }

                    .hero-actions {
                        margin-top: 2rem;
                        display: flex;
                        gap: 1rem;
                        flex-wrap: wrap;
                    }

                    .hero-points {
                        margin-top: 1.5rem;
                        display: flex;
                        gap: 1rem;
                        font-size: 0.875rem;
                        color: rgba(255, 255, 255, 0.6);
                    }

                    .hero-point {
                        display: flex;
                        align-items: center;
                        gap: 0.5rem;
                    }

                    .dot {
                        width: 10px;
                        height: 10px;
                        border-radius: 50%;
                        background: #34d399;
                    }

                    .lead-card,
                    .panel {
                        background: rgba(255, 255, 255, 0.05);
                        border: 1px solid rgba(255, 255, 255, 0.1);
                        border-radius: 16px;
                        padding: 1.5rem;
                    }

                    .lead-card {
                        padding: 2rem;
                        box-shadow: 0 25px 50px rgba(0, 0, 0, 0.5);
                    }

                    .lead-form {
                        margin-top: 1.5rem;
                        display: grid;
                        gap: 1rem;
                    }

                    .form-row {
                        display: grid;
                        grid-template-columns: 1fr 1fr;
                        gap: 1rem;
                    }

                    .form-field label {
                        display: block;
                        font-size: 0.875rem;
                        color: rgba(255, 255, 255, 0.8);
                        margin-bottom: 0.25rem;
                    }

                    .form-field input,
                    .form-field select {
                        width: 100%;
                        box-sizing: border-box;
                        background: rgba(255, 255, 255, 0.05);
                        border: 1px solid rgba(255, 255, 255, 0.1);
                        border-radius: 8px;
                        padding: 0.6rem 0.75rem;
                        color: #ffffff;
                        outline: none;
                    }

                    .form-field input:focus,
                    .form-field select:focus {
                        box-shadow: 0 0 0 2px #f97316;
                    }

                    .form-field select option {
                        color: #000000;
                    }

                    .form-error {
                        margin-top: 0.75rem;
                        padding: 0.6rem 0.75rem;
                        border-radius: 8px;
                        background: rgba(244, 63, 94, 0.15);
                        border: 1px solid rgba(244, 63, 94, 0.4);
                        color: #fda4af;
                        font-size: 0.875rem;
                    }

                    .fine-print {
                        font-size: 0.75rem;
                        color: rgba(255, 255, 255, 0.6);
                    }

                    .muted {
                        color: rgba(255, 255, 255, 0.7);
                    }

                    .small {
                        font-size: 0.875rem;
                    }

                    .page-section {
                        max-width: 80rem;
                        margin: 0 auto;
                        padding: 4rem 2.5rem;
                        border-top: 1px solid rgba(255, 255, 255, 0.1);
                    }

                    .page-section.narrow { max-width: 56rem; }
                    .page-section.medium { max-width: 64rem; }

                    .why-grid {
                        display: grid;
                        grid-template-columns: 2fr 1fr;
                        gap: 2rem;
                        align-items: start;
                    }

                    .why-text h2,
                    .section-title {
                        font-size: 2.25rem;
                        font-weight: 700;
                    }

                    .why-text p {
                        color: rgba(255, 255, 255, 0.8);
                        max-width: 42rem;
                    }

                    .why-grid ul,
                    .results-grid ul {
                        list-style: none;
                        padding: 0;
                        line-height: 1.8;
                    }

                    .section-heading {
                        display: flex;
                        align-items: center;
                        justify-content: space-between;
                        gap: 1rem;
                    }

                    .progress-track {
                        margin: 1rem 0 1.5rem;
                        height: 8px;
                        width: 100%;
                        background: rgba(255, 255, 255, 0.1);
                        border-radius: 999px;
                        overflow: hidden;
                    }

                    .progress-fill {
                        height: 100%;
                        background: #f97316;
                        transition: width 0.3s ease;
                    }

                    .panel-title {
                        font-size: 1.2rem;
                        font-weight: 600;
                    }

                    .question-category {
                        font-size: 0.75rem;
                        text-transform: uppercase;
                        letter-spacing: 0.15em;
                        color: rgba(255, 255, 255, 0.6);
                    }

                    .question-text {
                        margin-top: 0.5rem;
                        font-size: 1.5rem;
                        font-weight: 600;
                    }

                    .answer-options {
                        margin-top: 1.25rem;
                        display: flex;
                        gap: 0.75rem;
                    }

                    .answer-button {
                        padding: 0.5rem 1rem;
                        border-radius: 8px;
                        font-weight: 600;
                        background: transparent;
                        color: rgba(255, 255, 255, 0.9);
                        border: 1px solid rgba(255, 255, 255, 0.15);
                        cursor: pointer;
                    }

                    .answer-button.selected {
                        background: #f97316;
                        border-color: #f97316;
                        color: #ffffff;
                    }

                    .question-nav {
                        margin-top: 1.5rem;
                        display: flex;
                        justify-content: space-between;
                    }

                    .results-grid {
                        margin-top: 1.5rem;
                        display: grid;
                        grid-template-columns: 2fr 1fr;
                        gap: 1.5rem;
                    }

                    .score-line {
                        display: flex;
                        align-items: flex-end;
                        gap: 0.75rem;
                    }

                    .score-value {
                        font-size: 3rem;
                        font-weight: 800;
                    }

                    .score-max {
                        font-size: 1.5rem;
                        color: rgba(255, 255, 255, 0.6);
                    }

                    .tier-badge {
                        display: inline-flex;
                        padding: 0.25rem 0.6rem;
                        border-radius: 999px;
                        font-size: 0.875rem;
                        font-weight: 600;
                        margin-bottom: 0.75rem;
                    }

                    .tier-emerald { background: #10b981; }
                    .tier-amber { background: #f59e0b; }
                    .tier-rose { background: #f43f5e; }

                    .tier-description {
                        color: rgba(255, 255, 255, 0.8);
                    }

                    .category-grid {
                        margin-top: 1.5rem;
                        display: grid;
                        grid-template-columns: 1fr 1fr;
                        gap: 1rem;
                    }

                    .category-card {
                        background: rgba(255, 255, 255, 0.05);
                        border: 1px solid rgba(255, 255, 255, 0.1);
                        border-radius: 12px;
                        padding: 1rem;
                    }

                    .category-value {
                        margin-top: 0.25rem;
                        font-size: 1.5rem;
                        font-weight: 700;
                    }

                    .category-value .score-max {
                        font-size: 1rem;
                    }

                    .recommendations {
                        margin-top: 1.5rem;
                    }

                    .next-steps {
                        display: flex;
                        flex-direction: column;
                        gap: 0.75rem;
                    }

                    .site-footer {
                        padding: 3rem 2.5rem;
                        border-top: 1px solid rgba(255, 255, 255, 0.1);
                        font-size: 0.875rem;
                        color: rgba(255, 255, 255, 0.6);
                    }

                    .footer-content {
                        max-width: 80rem;
                        margin: 0 auto;
                        display: flex;
                        align-items: center;
                        justify-content: space-between;
                        gap: 1.5rem;
                    }

                    .footer-links {
                        display: flex;
                        gap: 1.5rem;
                    }

                    @media (max-width: 768px) {
                        .header-nav,
                        .header-cta {
                            display: none;
                        }

                        .hero-grid,
                        .why-grid,
                        .results-grid,
                        .form-row {
                            grid-template-columns: 1fr;
                        }

                        .hero-grid {
                            padding: 4rem 1.5rem;
                        }

                        .hero-copy h1 {
                            font-size: 2.25rem;
                        }

                        .footer-content {
                            flex-direction: column;
                            align-items: flex-start;
                        }
                    }
                    "#}
                </style>
            </div>
        }
    }
}
