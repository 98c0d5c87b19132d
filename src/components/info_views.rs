//! Informational Screens
//!
//! Policy documents, the help center and the contact form. Nothing here talks
//! to a backend.

use leptos::prelude::*;

use crate::catalog;
use crate::components::{Button, ButtonVariant};
use crate::context::use_app_context;
use crate::markdown::parse_markdown;
use crate::models::ToastKind;
use crate::policies::PolicyDoc;

/// Support request subjects, in display order
pub const SUPPORT_SUBJECTS: &[&str] = &["General Inquiry", "Technical Issue", "Billing / Invoice", "Provenance Dispute"];

#[component]
pub fn PolicyView(doc: &'static PolicyDoc) -> impl IntoView {
    let html = parse_markdown(doc.body);

    view! {
        <article class="policy-view fade-in">
            <header class="policy-header">
                <h2>{doc.title}</h2>
                {doc.subtitle.map(|s| view! { <p class="subtitle">{s}</p> })}
            </header>
            <div class="policy-body markdown-body" inner_html=html></div>
        </article>
    }
}

#[component]
pub fn HelpCenterView() -> impl IntoView {
    let ctx = use_app_context();
    let (query, set_query) = signal(String::new());
    // Question of the expanded answer, if any
    let (open, set_open) = signal(None::<&'static str>);
    let faqs = move || catalog::search_faqs(&query.get());

    let toggle = move |question: &'static str| {
        set_open.update(|current| {
            *current = if *current == Some(question) { None } else { Some(question) };
        });
    };

    view! {
        <div class="help-view fade-in">
            <section class="help-hero">
                <h2>"How can we help?"</h2>
                <div class="search-row">
                    <input
                        type="text"
                        class="search-input"
                        placeholder="Search for answers..."
                        prop:value=move || query.get()
                        on:input=move |ev| set_query.set(event_target_value(&ev))
                    />
                    <Button on_click=move |_| log::debug!("FAQ search: {}", query.get_untracked())>"Search"</Button>
                </div>
            </section>

            <div class="help-cards">
                <article class="help-card">
                    <h3>"Guides & Tutorials"</h3>
                    <p class="muted">"Step-by-step instructions for sourcing."</p>
                    <Button
                        variant=ButtonVariant::Text
                        on_click=move |_| ctx.notify(ToastKind::Info, "The guide library opens in the full release.")
                    >
                        "Browse Articles →"
                    </Button>
                </article>
                <article class="help-card">
                    <h3>"Community Forum"</h3>
                    <p class="muted">"Connect with other architects and builders."</p>
                    <Button
                        variant=ButtonVariant::Text
                        on_click=move |_| ctx.notify(ToastKind::Info, "The community forum opens in the full release.")
                    >
                        "Join Discussion →"
                    </Button>
                </article>
            </div>

            <section class="faq-list">
                <h3>"Frequently Asked Questions"</h3>
                <For
                    each=faqs
                    key=|faq| faq.question
                    children=move |faq| {
                        let question = faq.question;
                        let is_open = move || open.get() == Some(question);
                        view! {
                            <div class="faq-item" class:open=is_open>
                                <button class="faq-question" on:click=move |_| toggle(question)>
                                    <span>{question}</span>
                                    <span class="faq-chevron">{move || if is_open() { "−" } else { "+" }}</span>
                                </button>
                                <Show when=is_open>
                                    <p class="faq-answer">{faq.answer}</p>
                                </Show>
                            </div>
                        }
                    }
                />
                <Show when=move || faqs().is_empty()>
                    <p class="empty-state">"No answers match your search."</p>
                </Show>
            </section>
        </div>
    }
}

#[component]
pub fn SupportView() -> impl IntoView {
    let ctx = use_app_context();
    let name = RwSignal::new(String::new());
    let order_id = RwSignal::new(String::new());
    let subject = RwSignal::new(SUPPORT_SUBJECTS[0].to_string());
    let message = RwSignal::new(String::new());

    let send = move || {
        let reference = order_id.with_untracked(|id| id.trim().to_string());
        log::info!(
            "Support request: subject={}, order={}",
            subject.get_untracked(),
            if reference.is_empty() { "-" } else { reference.as_str() }
        );
        ctx.notify(ToastKind::Success, "Message sent. Our executive support team will respond shortly.");
        name.set(String::new());
        order_id.set(String::new());
        subject.set(SUPPORT_SUBJECTS[0].to_string());
        message.set(String::new());
    };

    let subjects = SUPPORT_SUBJECTS
        .iter()
        .map(|&s| view! { <option value=s>{s}</option> })
        .collect_view();

    view! {
        <div class="support-view fade-in">
            <header class="page-header">
                <div>
                    <h2>"Contact Support"</h2>
                    <p class="subtitle">"Our executive support team is available 24/7 for our enterprise partners."</p>
                </div>
            </header>
            <div class="support-grid">
                <form
                    class="panel support-form"
                    on:submit=move |ev| {
                        ev.prevent_default();
                        send();
                    }
                >
                    <div class="form-grid">
                        <label class="field">
                            <span class="field-label">"Name"</span>
                            <input
                                type="text"
                                placeholder="Your name"
                                prop:value=move || name.get()
                                on:input=move |ev| name.set(event_target_value(&ev))
                            />
                        </label>
                        <label class="field">
                            <span class="field-label">"Order ID (Optional)"</span>
                            <input
                                type="text"
                                placeholder="e.g. ORD-123"
                                prop:value=move || order_id.get()
                                on:input=move |ev| order_id.set(event_target_value(&ev))
                            />
                        </label>
                    </div>
                    <label class="field">
                        <span class="field-label">"Subject"</span>
                        <select
                            prop:value=move || subject.get()
                            on:change=move |ev| subject.set(event_target_value(&ev))
                        >
                            {subjects}
                        </select>
                    </label>
                    <label class="field">
                        <span class="field-label">"Message"</span>
                        <textarea
                            rows="5"
                            placeholder="How can we help you?"
                            prop:value=move || message.get()
                            on:input=move |ev| message.set(event_target_value(&ev))
                        ></textarea>
                    </label>
                    <button type="submit" class="btn btn-primary btn-md">"Send Message"</button>
                </form>
                <aside class="panel support-contact">
                    <p class="strong">"support@classichomes.com"</p>
                    <p class="status-online">"Live Chat: Online"</p>
                </aside>
            </div>
        </div>
    }
}
