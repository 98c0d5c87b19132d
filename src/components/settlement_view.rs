//! Settlement method detail page

use leptos::prelude::*;

use crate::components::{Button, ButtonVariant};
use crate::context::use_app_context;
use crate::pricing::{Money, PaymentMethod};
use crate::screen::Screen;

#[component]
pub fn SettlementView(method: PaymentMethod) -> impl IntoView {
    let ctx = use_app_context();
    let terms = ctx.config(|c| c.order.terms());
    let fee_bps = method.fee_bps(terms.escrow_fee_bps);
    // Fee on a reference $10,000 order
    let example_fee = Money::from_cents(1_000_000).basis_points(fee_bps);
    let fee_label = if fee_bps == 0 {
        "No platform security fee".to_string()
    } else {
        format!("{:.2}% security fee ({} on a $10,000 order)", fee_bps as f64 / 100.0, example_fee)
    };

    view! {
        <div class="settlement-view fade-in">
            <header class="page-header">
                <div>
                    <p class="caps">"Settlement Method"</p>
                    <h2>{method.label()}</h2>
                    <p class="subtitle">{method.tagline()}</p>
                </div>
            </header>
            <section class="panel">
                <dl class="detail-list">
                    <dt>"Settlement time"</dt>
                    <dd>{method.settlement_time()}</dd>
                    <dt>"Fees"</dt>
                    <dd>{fee_label}</dd>
                </dl>
            </section>
            <div class="page-actions">
                <Button variant=ButtonVariant::Outline on_click=move |_| ctx.navigate(Screen::Results)>
                    "Browse Materials"
                </Button>
            </div>
        </div>
    }
}
