//! Provenance Timeline
//!
//! Ordered supply-chain checkpoints for a material.

use leptos::prelude::*;

use crate::models::ProvenanceStep;

#[component]
pub fn ProvenanceTimeline(steps: Vec<ProvenanceStep>) -> impl IntoView {
    let last = steps.len().saturating_sub(1);
    let items = steps
        .into_iter()
        .enumerate()
        .map(|(i, step)| {
            let marker = if step.verified { "timeline-dot verified" } else { "timeline-dot" };
            view! {
                <li class="timeline-step">
                    <div class=marker>{if step.verified { "✓" } else { "" }}</div>
                    <Show when=move || i < last>
                        <div class="timeline-line"></div>
                    </Show>
                    <div class="timeline-body">
                        <p class="timeline-label">{step.label}</p>
                        <p class="timeline-entity">{step.entity}</p>
                        <p class="timeline-meta">{format!("{} · {}", step.date, step.location)}</p>
                    </div>
                </li>
            }
        })
        .collect_view();

    view! { <ol class="provenance-timeline">{items}</ol> }
}
