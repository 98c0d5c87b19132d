//! Results Screen
//!
//! AI-matched material grid with a category filter, per-card image
//! enhancement, the details modal and the generate-material modal.

use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::catalog::{self, ALL_FILTER};
use crate::components::{Button, ButtonSize, ButtonVariant, GenerateMaterialModal, MaterialDetailsModal};
use crate::context::use_app_context;
use crate::genai::enhance_image;
use crate::models::{Material, ToastKind};
use crate::screen::Screen;
use crate::store::{store_replace_image, store_set_enhancing, use_app_store, AppStateStoreFields};

#[component]
pub fn ResultsView() -> impl IntoView {
    let ctx = use_app_context();
    let store = use_app_store();

    let (filter, set_filter) = signal(ALL_FILTER.to_string());
    let (viewing, set_viewing) = signal::<Option<Material>>(None);
    let (show_generate, set_show_generate) = signal(false);

    let visible = move || store.materials().with(|all| catalog::filter_materials(all, &filter.get()));
    let categories = move || {
        let mut options = vec![ALL_FILTER.to_string()];
        options.extend(store.materials().with(|all| catalog::categories_of(all)));
        options
    };

    let enhance = move |material: Material| {
        if !store_set_enhancing(&store, &material.id, true) {
            return;
        }
        let client = ctx.genai();
        log::info!("Enhancing image for {}", material.id);
        spawn_local(async move {
            match enhance_image(&client, &material).await {
                Ok(Some(url)) => {
                    if store_replace_image(&store, &material.id, url) {
                        ctx.notify(ToastKind::Success, format!("{} texture enhanced.", material.name));
                    }
                }
                Ok(None) => {
                    log::warn!("No image returned for {}", material.id);
                    ctx.notify(ToastKind::Warning, "The AI service returned no image. The original is kept.");
                }
                Err(e) => {
                    log::error!("Image enhancement failed for {}: {}", material.id, e);
                    ctx.notify(ToastKind::Error, e.user_message());
                }
            }
            store_set_enhancing(&store, &material.id, false);
        });
    };

    view! {
        <div class="results-view fade-in">
            <header class="page-header">
                <div>
                    <button class="back-link" on:click=move |_| ctx.navigate(Screen::UploadSpecs)>
                        "← Back to Specs"
                    </button>
                    <h2>"AI-Matched Materials"</h2>
                    <p class="subtitle">
                        {move || format!("{} matches found based on technical specifications.", visible().len())}
                    </p>
                </div>
                <div class="header-actions">
                    <Button size=ButtonSize::Sm on_click=move |_| set_show_generate.set(true)>"+ Generate Custom"</Button>
                    <label class="filter-control">
                        <span>"Filter"</span>
                        <select
                            prop:value=move || filter.get()
                            on:change=move |ev| set_filter.set(event_target_value(&ev))
                        >
                            <For
                                each=categories
                                key=|c| c.clone()
                                children=|c| {
                                    let value = c.clone();
                                    view! { <option value=value>{c}</option> }
                                }
                            />
                        </select>
                    </label>
                </div>
            </header>

            <div class="material-grid">
                <For
                    each=visible
                    key=|m| m.id.clone()
                    children=move |material| {
                        view! {
                            <MaterialCard
                                material=material
                                on_enhance=enhance
                                on_view=move |m| set_viewing.set(Some(m))
                                on_select=move |m| ctx.select_material(m)
                            />
                        }
                    }
                />
            </div>
            <Show when=move || visible().is_empty()>
                <p class="empty-state">"No materials in this category."</p>
            </Show>

            {move || viewing.get().map(|material| view! {
                <MaterialDetailsModal
                    material=material
                    on_close=move |_| set_viewing.set(None)
                    on_select=move |m| {
                        set_viewing.set(None);
                        ctx.select_material(m);
                    }
                />
            })}

            <Show when=move || show_generate.get()>
                <GenerateMaterialModal on_close=move |_| set_show_generate.set(false) />
            </Show>
        </div>
    }
}

/// One result card. The image is read from the store so enhancements show up
/// without re-keying the grid.
#[component]
fn MaterialCard(
    material: Material,
    #[prop(into)] on_enhance: Callback<Material>,
    #[prop(into)] on_view: Callback<Material>,
    #[prop(into)] on_select: Callback<Material>,
) -> impl IntoView {
    let store = use_app_store();
    let current = StoredValue::new(material.clone());

    // Catalog copy of this material, so selections carry an enhanced image
    let latest = move || {
        let snapshot = current.get_value();
        store
            .materials()
            .with_untracked(|all| all.iter().find(|m| m.id == snapshot.id).cloned())
            .unwrap_or(snapshot)
    };
    let image_url = move || {
        current.with_value(|m| {
            store.materials().with(|all| {
                all.iter()
                    .find(|candidate| candidate.id == m.id)
                    .map(|candidate| candidate.image_url.clone())
                    .unwrap_or_default()
            })
        })
    };
    let enhancing = move || current.with_value(|m| store.enhancing_ids().with(|ids| ids.contains(&m.id)));
    let verified = material.verified;

    view! {
        <article class="material-card">
            <div class="card-image">
                <img
                    src=image_url
                    alt=material.name.clone()
                    class:blurred=enhancing
                />
                <span class="match-badge">{format!("{}% Match", material.match_score)}</span>
                <button
                    class="enhance-btn"
                    class:busy=enhancing
                    disabled=enhancing
                    on:click=move |ev| {
                        ev.stop_propagation();
                        on_enhance.run(latest());
                    }
                >
                    {move || if enhancing() { "Enhancing..." } else { "✦ AI Enhance" }}
                </button>
                <Show when=move || verified>
                    <div class="verified-strip">"🛡 Provenance Verified"</div>
                </Show>
            </div>
            <div class="card-body">
                <div class="card-title-row">
                    <h3>{material.name.clone()}</h3>
                    <span class="origin">{material.origin.clone()}</span>
                </div>
                <p class="supplier">{material.supplier.clone()}</p>
                <div class="card-specs">
                    <div>
                        <p class="spec-label">"Price"</p>
                        <p class="spec-value">{format!("${}", material.price_per_sq_ft)}<span class="unit">"/sq ft"</span></p>
                    </div>
                    <div>
                        <p class="spec-label">"Lead Time"</p>
                        <p class="spec-value">{material.lead_time_weeks}<span class="unit">"weeks"</span></p>
                    </div>
                </div>
                <div class="card-actions">
                    <Button on_click=move |_| on_select.run(latest())>"Select for Visualization"</Button>
                    <Button variant=ButtonVariant::Text on_click=move |_| on_view.run(latest())>
                        "View Details & Chain"
                    </Button>
                </div>
            </div>
        </article>
    }
}
