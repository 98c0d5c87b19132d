//! Specification Upload Screen
//!
//! Project context, one specification file via drag-and-drop or picker, and a
//! simulated parse that unlocks the results screen.

use gloo_timers::future::TimeoutFuture;
use leptos::prelude::*;
use leptos::task::spawn_local;
use leptos_filedrop::{
    accept_attr, create_file_drop_signals, make_on_dragleave, make_on_dragover, make_on_drop, make_on_input_change,
    DropOutcome,
};
use wasm_bindgen::JsCast;

use crate::components::{Button, ButtonSize, ButtonVariant};
use crate::context::use_app_context;
use crate::mock_data::{self, MATERIAL_CATEGORIES, SPEC_FILE_EXTENSIONS};
use crate::models::ToastKind;
use crate::screen::Screen;
use crate::upload::{UploadFlow, UploadPhase};

const PICKER_ID: &str = "spec-file-input";

#[component]
pub fn UploadSpecs() -> impl IntoView {
    let ctx = use_app_context();
    let flow = RwSignal::new(UploadFlow::new());
    let projects = mock_data::projects();
    let (project_id, set_project_id) = signal(projects.first().map(|p| p.id.clone()).unwrap_or_default());
    let (category, set_category) = signal(MATERIAL_CATEGORIES[0].to_string());

    let on_outcome = move |outcome: DropOutcome| match outcome {
        DropOutcome::Accepted(file) => {
            log::info!("Specification selected: {} ({})", file.name, file.size_label());
            let ticket = flow.try_update(|f| f.select(file));
            let delay = ctx.config(|c| c.timing.parse_ms);
            if let Some(ticket) = ticket {
                spawn_local(async move {
                    TimeoutFuture::new(delay).await;
                    if flow.try_update(|f| f.finish(ticket)) == Some(true) {
                        log::info!("Specification parsed");
                    }
                });
            }
        }
        DropOutcome::Rejected(file) => {
            log::warn!("Rejected specification file {}", file.name);
            ctx.notify(
                ToastKind::Warning,
                format!("{} is not a supported specification. Use PDF, DWG, RVT or IFC.", file.name),
            );
        }
        DropOutcome::Empty => {}
    };

    let drop_signals = create_file_drop_signals();
    let on_dragover = make_on_dragover(drop_signals);
    let on_dragleave = make_on_dragleave(drop_signals);
    let on_drop = make_on_drop(drop_signals, SPEC_FILE_EXTENSIONS, on_outcome);
    let on_input = make_on_input_change(SPEC_FILE_EXTENSIONS, on_outcome);

    let open_picker = move || {
        let input = web_sys::window()
            .and_then(|w| w.document())
            .and_then(|d| d.get_element_by_id(PICKER_ID));
        if let Some(input) = input.and_then(|el| el.dyn_into::<web_sys::HtmlElement>().ok()) {
            input.click();
        }
    };

    let phase = move || flow.with(|f| f.phase());
    let has_file = move || flow.with(|f| f.file().is_some());
    let drop_class = move || {
        if drop_signals.drag_active_read.get() {
            "file-drop active"
        } else {
            "file-drop"
        }
    };
    let status_class = move || {
        if phase() == UploadPhase::Parsed {
            "status-text done"
        } else {
            "status-text"
        }
    };
    let progress_class = move || match phase() {
        UploadPhase::Idle => "progress-fill",
        UploadPhase::Parsing => "progress-fill parsing",
        UploadPhase::Parsed => "progress-fill complete",
    };

    let project_options = projects
        .into_iter()
        .map(|p| view! { <option value=p.id.clone()>{p.name}</option> })
        .collect_view();
    let category_options = MATERIAL_CATEGORIES
        .iter()
        .map(|&c| view! { <option value=c>{c}</option> })
        .collect_view();

    let proceed = move || {
        let project = project_id.get_untracked();
        let category = category.get_untracked();
        log::info!("Sourcing cycle for project {} ({})", project, category);
        ctx.navigate(Screen::Results);
    };

    view! {
        <div class="upload-specs fade-in">
            <header class="page-header">
                <div>
                    <h2>"Initiate Sourcing Cycle"</h2>
                    <p class="subtitle">"Upload technical specifications to begin AI-driven matchmaking."</p>
                </div>
            </header>

            <section class="panel">
                <h3 class="step-title"><span class="step-number">"1"</span>"Project Context"</h3>
                <div class="form-grid">
                    <label class="field">
                        <span class="field-label">"Active Project"</span>
                        <select
                            prop:value=move || project_id.get()
                            on:change=move |ev| set_project_id.set(event_target_value(&ev))
                        >
                            {project_options}
                        </select>
                    </label>
                    <label class="field">
                        <span class="field-label">"Material Category"</span>
                        <select
                            prop:value=move || category.get()
                            on:change=move |ev| set_category.set(event_target_value(&ev))
                        >
                            {category_options}
                        </select>
                    </label>
                </div>
            </section>

            <section class="panel">
                <h3 class="step-title"><span class="step-number">"2"</span>"Specification Upload"</h3>
                <Show
                    when=has_file
                    fallback=move || view! {
                        <div
                            class=drop_class
                            on:dragenter=on_dragover
                            on:dragover=on_dragover
                            on:dragleave=on_dragleave
                            on:drop=on_drop
                        >
                            <input
                                id=PICKER_ID
                                type="file"
                                class="visually-hidden"
                                accept=accept_attr(SPEC_FILE_EXTENSIONS)
                                on:change=on_input
                            />
                            <div class="drop-icon">"⇪"</div>
                            <p class="drop-title">"Drag & Drop Specifications"</p>
                            <p class="drop-hint">"Supports PDF, CAD (.dwg), Revit (.rvt), IFC"</p>
                            <Button variant=ButtonVariant::Outline size=ButtonSize::Sm on_click=move |_| open_picker()>
                                "Browse Files"
                            </Button>
                        </div>
                    }
                >
                    <div class="file-card">
                        <div class="file-row">
                            <span class="file-icon">"▤"</span>
                            <div class="file-meta">
                                <p class="file-name">
                                    {move || flow.with(|f| f.file().map(|f| f.name.clone()).unwrap_or_default())}
                                </p>
                                <p class="file-size">
                                    {move || flow.with(|f| f.file().map(|f| f.size_label()).unwrap_or_default())}
                                </p>
                            </div>
                            <button class="icon-btn remove" title="Remove file" on:click=move |_| flow.update(|f| f.clear())>
                                "×"
                            </button>
                        </div>

                        <div class="parse-status">
                            <span>"AI Analysis Status"</span>
                            <span class=status_class>{move || flow.with(|f| f.status_label())}</span>
                        </div>
                        <div class="progress-track">
                            <div class=progress_class></div>
                        </div>

                        {move || flow.with(|f| f.extraction()).map(|text| view! {
                            <div class="extraction">
                                <p class="extraction-title">"Extraction Successful"</p>
                                <p>{text}</p>
                            </div>
                        })}
                    </div>
                </Show>
            </section>

            <div class="page-actions">
                <Button
                    size=ButtonSize::Lg
                    disabled=Signal::derive(move || !flow.with(|f| f.can_proceed()))
                    on_click=move |_| proceed()
                >
                    {move || if phase() == UploadPhase::Parsing { "Processing" } else { "🔒 Secure Artisan Access" }}
                </Button>
            </div>
        </div>
    }
}
