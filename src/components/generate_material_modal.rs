//! Generate Material Modal
//!
//! Collects a name, category and visual description, then asks the AI
//! service for a texture image and specification estimates.

use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::components::{Button, ButtonVariant};
use crate::context::use_app_context;
use crate::genai::{generate_material, generated_id, MaterialRequest};
use crate::mock_data::MATERIAL_CATEGORIES;
use crate::models::ToastKind;
use crate::store::{store_prepend_material, store_set_generating, use_app_store, AppStateStoreFields};

#[component]
pub fn GenerateMaterialModal(#[prop(into)] on_close: Callback<()>) -> impl IntoView {
    let ctx = use_app_context();
    let store = use_app_store();

    let name = RwSignal::new(String::new());
    let category = RwSignal::new(MATERIAL_CATEGORIES[0].to_string());
    let description = RwSignal::new(String::new());

    let request = move || MaterialRequest {
        name: name.get(),
        category: category.get(),
        description: description.get(),
    };
    let generating = move || store.generating().get();

    let close = move || {
        if !store.generating().get_untracked() {
            on_close.run(());
        }
    };

    let submit = move || {
        let request = request();
        if !request.is_complete() || store.generating().get_untracked() {
            return;
        }
        store_set_generating(&store, true);
        let client = ctx.genai();
        log::info!("Generating material {} ({})", request.name, request.category);
        spawn_local(async move {
            match generate_material(&client, &request, generated_id()).await {
                Ok(material) => {
                    log::info!("Generated material {}", material.id);
                    let label = material.name.clone();
                    store_prepend_material(&store, material);
                    store_set_generating(&store, false);
                    ctx.notify(ToastKind::Success, format!("{} added to your matches.", label));
                    on_close.run(());
                }
                Err(e) => {
                    log::error!("Material generation failed: {}", e);
                    store_set_generating(&store, false);
                    ctx.notify(ToastKind::Error, e.user_message());
                }
            }
        });
    };

    let category_options = MATERIAL_CATEGORIES
        .iter()
        .map(|&c| view! { <option value=c>{c}</option> })
        .collect_view();

    view! {
        <div class="modal-backdrop" on:click=move |_| close()>
            <div class="modal generate-modal" on:click=|ev| ev.stop_propagation()>
                <div class="modal-header">
                    <h3>"✦ Generate Custom Material"</h3>
                    <button class="icon-btn" on:click=move |_| close()>"×"</button>
                </div>

                <form
                    class="modal-body"
                    on:submit=move |ev| {
                        ev.prevent_default();
                        submit();
                    }
                >
                    <label class="field">
                        <span class="field-label">"Material Name"</span>
                        <input
                            type="text"
                            placeholder="e.g. Noir Saint Laurent Marble"
                            prop:value=move || name.get()
                            on:input=move |ev| name.set(event_target_value(&ev))
                            prop:disabled=generating
                        />
                    </label>
                    <label class="field">
                        <span class="field-label">"Category"</span>
                        <select
                            prop:value=move || category.get()
                            on:change=move |ev| category.set(event_target_value(&ev))
                            prop:disabled=generating
                        >
                            {category_options}
                        </select>
                    </label>
                    <label class="field">
                        <span class="field-label">"Visual Description"</span>
                        <textarea
                            rows="4"
                            placeholder="Describe the texture, colors, patterns, and finish..."
                            prop:value=move || description.get()
                            on:input=move |ev| description.set(event_target_value(&ev))
                            prop:disabled=generating
                        ></textarea>
                        <p class="field-hint">
                            "The AI will generate a photorealistic texture and estimate technical specifications based on this description."
                        </p>
                    </label>

                    <div class="modal-actions">
                        <Button
                            variant=ButtonVariant::Outline
                            disabled=Signal::derive(generating)
                            on_click=move |_| close()
                        >
                            "Cancel"
                        </Button>
                        <Button
                            disabled=Signal::derive(move || generating() || !request().is_complete())
                            on_click=move |_| submit()
                        >
                            {move || if generating() { "Generating Asset..." } else { "Generate Material" }}
                        </Button>
                    </div>
                </form>
            </div>
        </div>
    }
}
