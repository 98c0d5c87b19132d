//! Material Details Modal
//!
//! Specification summary and provenance chain for one material.

use leptos::prelude::*;

use crate::components::{Button, ButtonVariant, ProvenanceTimeline};
use crate::mock_data;
use crate::models::Material;

#[component]
pub fn MaterialDetailsModal(
    material: Material,
    #[prop(into)] on_close: Callback<()>,
    #[prop(into)] on_select: Callback<Material>,
) -> impl IntoView {
    let selected = StoredValue::new(material.clone());
    let verified = material.verified;

    view! {
        <div class="modal-backdrop" on:click=move |_| on_close.run(())>
            <div class="modal details-modal" on:click=|ev| ev.stop_propagation()>
                <div class="modal-hero">
                    <img src=material.image_url.clone() alt=material.name.clone() />
                    <span class="match-badge">{format!("{}% Match", material.match_score)}</span>
                    <Show when=move || verified>
                        <span class="verified-tag">"Verified Source"</span>
                    </Show>
                    <p class="material-id">{format!("ID: {}", material.id.to_uppercase())}</p>
                </div>

                <div class="modal-body">
                    <h2>{material.name.clone()}</h2>
                    <div class="material-meta">
                        <span>"📍 " {material.origin.clone()}</span>
                        <span>"🏭 " {material.supplier.clone()}</span>
                    </div>

                    <div class="spec-grid">
                        <div>
                            <p class="spec-label">"Price / Sq Ft"</p>
                            <p class="spec-value">
                                {format!("{}", material.price_per_sq_ft)}
                                <span class="unit">{material.currency.clone()}</span>
                            </p>
                        </div>
                        <div>
                            <p class="spec-label">"Lead Time"</p>
                            <p class="spec-value">{material.lead_time_weeks}<span class="unit">"Weeks"</span></p>
                        </div>
                    </div>

                    <h3 class="section-title">"Provenance History"</h3>
                    <ProvenanceTimeline steps=mock_data::provenance_steps() />
                    <p class="provenance-id">{format!("Provenance ID: {}", material.provenance_id)}</p>
                </div>

                <div class="modal-actions">
                    <Button variant=ButtonVariant::Outline on_click=move |_| on_close.run(())>"Close"</Button>
                    <Button on_click=move |_| on_select.run(selected.get_value())>"Select Material"</Button>
                </div>
            </div>
        </div>
    }
}
