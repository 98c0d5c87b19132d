//! Sidebar Component
//!
//! Primary navigation plus an expandable Settlement group with one entry per
//! payment method.

use leptos::prelude::*;

use crate::components::HouseLogo;
use crate::context::use_app_context;
use crate::pricing::PaymentMethod;
use crate::screen::{Screen, PRIMARY_NAV};

fn entry_class(active: bool) -> &'static str {
    if active {
        "nav-item active"
    } else {
        "nav-item"
    }
}

#[component]
pub fn Sidebar(#[prop(into)] on_logout: Callback<()>) -> impl IntoView {
    let ctx = use_app_context();
    let (settlement_open, set_settlement_open) = signal(false);

    // Open the group when one of its pages is showing
    Effect::new(move |_| {
        if matches!(ctx.screen(), Screen::Settlement(_)) {
            set_settlement_open.set(true);
        }
    });

    let primary = PRIMARY_NAV
        .iter()
        .map(|entry| {
            let screen = entry.screen;
            view! {
                <button
                    class=move || entry_class(ctx.screen() == screen)
                    on:click=move |_| ctx.navigate(screen)
                >
                    <span class="nav-icon">{entry.icon}</span>
                    {entry.label}
                </button>
            }
        })
        .collect_view();

    let settlement = PaymentMethod::ALL
        .into_iter()
        .map(|method| {
            let screen = Screen::Settlement(method);
            view! {
                <button
                    class=move || format!("{} nav-sub", entry_class(ctx.screen() == screen))
                    on:click=move |_| ctx.navigate(screen)
                >
                    {method.label()}
                </button>
            }
        })
        .collect_view();

    view! {
        <aside class="sidebar">
            <div class="sidebar-brand">
                <HouseLogo class="brand-logo" />
                <h1>
                    "CLASSIC HOMES"
                    <br />
                    <span class="brand-sub">"MARKETPLACE"</span>
                </h1>
            </div>

            <nav class="sidebar-nav">
                {primary}
                <button
                    class=move || entry_class(matches!(ctx.screen(), Screen::Settlement(_)))
                    on:click=move |_| set_settlement_open.update(|open| *open = !*open)
                >
                    <span class="nav-icon">"⇄"</span>
                    "Settlement"
                    <span class="nav-caret">{move || if settlement_open.get() { "▾" } else { "▸" }}</span>
                </button>
                <div class="nav-group" class:hidden=move || !settlement_open.get()>
                    {settlement}
                </div>
            </nav>

            <div class="sidebar-user">
                <div class="user-card">
                    <img src="https://picsum.photos/100/100" alt="User" class="avatar" />
                    <div>
                        <p class="user-name">"V. Sterling"</p>
                        <p class="user-role">"Chief Procurement"</p>
                    </div>
                </div>
                <div class="user-actions">
                    <button class="icon-btn" title="Notifications">"🔔"</button>
                    <button class="icon-btn" title="Sign out" on:click=move |_| on_logout.run(())>"⎋"</button>
                </div>
            </div>
        </aside>
    }
}
