//! Commitment Screen
//!
//! Contract panel, provenance chain, payment method and order summary. The
//! confirm button is gated on the acknowledgment checkbox.

use gloo_timers::future::TimeoutFuture;
use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::components::{Button, ButtonSize, ProvenanceTimeline};
use crate::context::use_app_context;
use crate::mock_data::{self, BENEFICIARY, CONTRACT_ID};
use crate::models::Material;
use crate::pricing::{Money, PaymentMethod};
use crate::screen::Screen;

#[component]
pub fn CommitmentView(material: Material) -> impl IntoView {
    let ctx = use_app_context();
    let terms = ctx.config(|c| c.order.terms());
    let unit_price = Money::from_major(material.price_per_sq_ft);

    let (method, set_method) = signal(PaymentMethod::Escrow);
    let (agreed, set_agreed) = signal(false);
    let (processing, set_processing) = signal(false);

    let quote = Memo::new(move |_| terms.quote(unit_price, method.get()));

    let execute = move || {
        if !agreed.get_untracked() || processing.get_untracked() {
            return;
        }
        set_processing.set(true);
        let delay = ctx.config(|c| c.timing.commitment_ms);
        let total = quote.get_untracked().total;
        log::info!("Executing commitment {} for {} via {}", CONTRACT_ID, total, method.get_untracked().as_str());
        let checkpoint = ctx.checkpoint();
        spawn_local(async move {
            TimeoutFuture::new(delay).await;
            // Any navigation since confirming voids this commitment
            if !ctx.jump_from(checkpoint, Screen::Success) {
                log::debug!("Commitment finished after leaving the screen");
            }
        });
    };

    let method_options = PaymentMethod::ALL
        .into_iter()
        .map(|m| {
            view! {
                <label class="method-option" class:selected=move || method.get() == m>
                    <input
                        type="radio"
                        name="payment-method"
                        value=m.as_str()
                        prop:checked=move || method.get() == m
                        on:change=move |ev| {
                            if let Some(m) = PaymentMethod::from_slug(&event_target_value(&ev)) {
                                set_method.set(m);
                            }
                        }
                    />
                    <span class="method-label">{m.label()}</span>
                    <span class="method-tagline">{m.tagline()}</span>
                </label>
            }
        })
        .collect_view();

    view! {
        <div class="commitment-view fade-in">
            <button
                class="back-link"
                prop:disabled=move || processing.get()
                on:click=move |_| ctx.navigate(Screen::Results)
            >
                "← Back to Results"
            </button>

            <div class="commitment-grid">
                <div class="commitment-main">
                    <section class="panel contract">
                        <h2>"🔒 Finalizing Immutable Contract"</h2>
                        <div class="kv-row">
                            <span>"Contract ID"</span>
                            <span class="mono chip">{CONTRACT_ID}</span>
                        </div>
                        <div class="kv-row">
                            <span>"Project"</span>
                            <span class="serif">"Sterling Residence"</span>
                        </div>
                        <div class="kv-row">
                            <span>"Beneficiary"</span>
                            <span>{BENEFICIARY}</span>
                        </div>
                    </section>

                    <section class="panel">
                        <h3>"Verified Provenance Chain"</h3>
                        <ProvenanceTimeline steps=mock_data::provenance_steps() />
                        <div class="panel-footer">
                            <p class="caps">"Blockchain Verification"</p>
                            <a href="#" class="accent-link">"View on Polygon Scan ›"</a>
                        </div>
                    </section>

                    <section class="panel">
                        <h3>"Payment Method"</h3>
                        <div class="method-list">{method_options}</div>
                    </section>
                </div>

                <aside class="commitment-side">
                    <section class="panel order-summary">
                        <h3>"Order Summary"</h3>
                        <div class="summary-head">
                            <p class="summary-name">{material.name.clone()}</p>
                            <p class="summary-origin">{material.origin.clone()}</p>
                        </div>
                        <div class="kv-row">
                            <span>"Quantity"</span>
                            <span class="mono">{move || format!("{} sq ft", quote.get().quantity_sq_ft)}</span>
                        </div>
                        <div class="kv-row">
                            <span>"Unit Price"</span>
                            <span class="mono">{move || quote.get().unit_price.to_string()}</span>
                        </div>
                        <div class="kv-row">
                            <span>"Est. Logistics"</span>
                            <span class="mono">{move || quote.get().logistics_fee.whole()}</span>
                        </div>
                        <Show when=move || quote.get().has_security_fee()>
                            <div class="kv-row">
                                <span>"Escrow Security Fee (0.5%)"</span>
                                <span class="mono">{move || quote.get().security_fee.to_string()}</span>
                            </div>
                        </Show>
                        <div class="kv-row total">
                            <span class="caps accent">"Total Estimate"</span>
                            <span class="mono big">{move || quote.get().total.to_string()}</span>
                        </div>
                        <p class="settlement-note">
                            {move || format!("Settlement: {}", method.get().settlement_time())}
                        </p>
                    </section>

                    <section class="panel confirm">
                        <label class="ack">
                            <input
                                type="checkbox"
                                prop:checked=move || agreed.get()
                                on:change=move |ev| set_agreed.set(event_target_checked(&ev))
                            />
                            <span>
                                "I acknowledge the terms of this "
                                <strong>"immutable commitment"</strong>
                                " and authorize Web3 tokenization of the assets. I understand this action utilizes 2FA security."
                            </span>
                        </label>
                        <Button
                            size=ButtonSize::Lg
                            disabled=Signal::derive(move || !agreed.get() || processing.get())
                            on_click=move |_| execute()
                        >
                            {move || if processing.get() { "Tokenizing Assets..." } else { "🛡 Execute Smart Contract" }}
                        </Button>
                    </section>
                </aside>
            </div>
        </div>
    }
}
