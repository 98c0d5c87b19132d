//! Success Screen

use leptos::prelude::*;

use crate::components::{Button, ButtonVariant};
use crate::context::use_app_context;
use crate::mock_data::TOKEN_ID;
use crate::models::ToastKind;
use crate::screen::Screen;

#[component]
pub fn SuccessView() -> impl IntoView {
    let ctx = use_app_context();

    view! {
        <div class="success-view fade-in">
            <div class="success-icon">"✓"</div>
            <h2>"Project Procurement Certainty Secured"</h2>
            <p class="subtitle">
                "Your commitment for " <strong>"Sterling Residence"</strong>
                " has been tokenized on the Polygon network. Supply chain tracking is now active."
            </p>

            <div class="panel record">
                <p class="caps">"Immutable Provenance Record"</p>
                <div class="record-row">
                    <div>
                        <p class="mono strong">{format!("Token ID: {}", TOKEN_ID)}</p>
                        <p class="muted">"Minted: Just now"</p>
                    </div>
                    <a href="#" class="accent-link">"View on Explorer"</a>
                </div>
            </div>

            <div class="page-actions">
                <Button
                    variant=ButtonVariant::Outline
                    on_click=move |_| ctx.notify(ToastKind::Info, "Audit report is being prepared for download.")
                >
                    "Download Audit Report"
                </Button>
                <Button on_click=move |_| ctx.navigate(Screen::Dashboard)>"Return to Dashboard →"</Button>
            </div>
        </div>
    }
}
