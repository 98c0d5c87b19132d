//! Secondary Dashboard Views
//!
//! Orders, wallet, analytics, supplier directory and account settings.

use leptos::prelude::*;

use crate::catalog::{self, OrdersTab};
use crate::components::{BarChart, Button, ButtonSize, ButtonVariant, DonutChart};
use crate::context::use_app_context;
use crate::mock_data::{CATEGORY_SPLIT, CHART_COLORS, MONTHLY_SPEND, TRANSACTIONS};
use crate::models::{OrderStatus, ToastKind, TransactionKind};

// ========================
// Orders
// ========================

fn order_status_class(status: OrderStatus) -> &'static str {
    match status {
        OrderStatus::Processing => "status-pill processing",
        OrderStatus::Shipped => "status-pill shipped",
        OrderStatus::Delivered => "status-pill delivered",
    }
}

#[component]
pub fn OrdersView() -> impl IntoView {
    let ctx = use_app_context();
    let (tab, set_tab) = signal(OrdersTab::Active);
    let orders = move || catalog::orders_for_tab(tab.get());

    let tabs = OrdersTab::ALL
        .into_iter()
        .map(|t| {
            view! {
                <button class="tab" class:active=move || tab.get() == t on:click=move |_| set_tab.set(t)>
                    {t.label()}
                </button>
            }
        })
        .collect_view();

    view! {
        <div class="orders-view fade-in">
            <header class="page-header">
                <h2>"Order Management"</h2>
                <div class="tab-bar">{tabs}</div>
            </header>
            <section class="panel flush">
                <table class="data-table">
                    <thead>
                        <tr>
                            <th>"Order ID"</th>
                            <th>"Project"</th>
                            <th>"Items"</th>
                            <th>"Date"</th>
                            <th>"Status"</th>
                            <th class="right">"Total"</th>
                            <th class="center">"Action"</th>
                        </tr>
                    </thead>
                    <tbody>
                        <For
                            each=orders
                            key=|order| order.id
                            children=move |order| {
                                let id = order.id;
                                view! {
                                    <tr>
                                        <td class="mono">{order.id}</td>
                                        <td>{order.project}</td>
                                        <td class="muted">{order.items}</td>
                                        <td class="muted">{order.date}</td>
                                        <td><span class=order_status_class(order.status)>{order.status.label()}</span></td>
                                        <td class="right">{order.total}</td>
                                        <td class="center">
                                            <Button
                                                variant=ButtonVariant::Text
                                                size=ButtonSize::Sm
                                                on_click=move |_| ctx.notify(ToastKind::Info, format!("Order {} details requested.", id))
                                            >
                                                "Details"
                                            </Button>
                                        </td>
                                    </tr>
                                }
                            }
                        />
                    </tbody>
                </table>
                <Show when=move || orders().is_empty()>
                    <p class="empty-state">"No orders in this view."</p>
                </Show>
            </section>
        </div>
    }
}

// ========================
// Wallet
// ========================

#[component]
pub fn WalletView() -> impl IntoView {
    let ctx = use_app_context();

    let rows = TRANSACTIONS
        .iter()
        .map(|tx| {
            let kind_class = if tx.kind == TransactionKind::Deposit { "tx-kind deposit" } else { "tx-kind" };
            let amount_class = if tx.amount.starts_with('+') { "right mono credit" } else { "right mono" };
            view! {
                <tr>
                    <td><span class=kind_class>{tx.kind.label()}</span></td>
                    <td class="strong">{tx.counterparty}</td>
                    <td class="muted">{tx.date}</td>
                    <td>{tx.status}</td>
                    <td class=amount_class>{tx.amount}</td>
                </tr>
            }
        })
        .collect_view();

    view! {
        <div class="wallet-view fade-in">
            <header class="page-header">
                <h2>"Digital Wallet & Escrow"</h2>
            </header>
            <div class="wallet-grid">
                <section class="balance-card">
                    <p class="caps">"Total Liquidity"</p>
                    <h3 class="balance">"$2,450,890.00"</h3>
                    <div class="balance-split">
                        <span>"USDC: $1.2M"</span>
                        <span>"USD: $1.25M"</span>
                    </div>
                </section>
                <button
                    class="wallet-action"
                    on:click=move |_| ctx.notify(ToastKind::Info, "Deposit instructions sent to your treasury team.")
                >
                    <span class="strong">"Deposit Funds"</span>
                </button>
                <button
                    class="wallet-action"
                    on:click=move |_| ctx.notify(ToastKind::Info, "Withdrawals require 2FA confirmation from a second signer.")
                >
                    <span class="strong">"Withdraw / Pay"</span>
                </button>
            </div>
            <section class="panel flush">
                <div class="panel-header">
                    <h3>"Recent Transactions"</h3>
                </div>
                <table class="data-table">
                    <thead>
                        <tr>
                            <th>"Type"</th>
                            <th>"Entity"</th>
                            <th>"Date"</th>
                            <th>"Status"</th>
                            <th class="right">"Amount"</th>
                        </tr>
                    </thead>
                    <tbody>{rows}</tbody>
                </table>
            </section>
        </div>
    }
}

// ========================
// Analytics
// ========================

#[component]
pub fn AnalyticsView() -> impl IntoView {
    view! {
        <div class="analytics-view fade-in">
            <header class="page-header">
                <h2>"Procurement Analytics"</h2>
                <select class="filter-select">
                    <option>"Last 6 Months"</option>
                    <option>"YTD"</option>
                </select>
            </header>
            <div class="analytics-grid">
                <section class="panel">
                    <h3>"Monthly Procurement Spend (k$)"</h3>
                    <BarChart series=MONTHLY_SPEND color="#1A2A44" />
                </section>
                <section class="panel">
                    <h3>"Material Category Split"</h3>
                    <DonutChart series=CATEGORY_SPLIT colors=CHART_COLORS />
                </section>
            </div>
        </div>
    }
}

// ========================
// Suppliers
// ========================

#[component]
pub fn SuppliersView() -> impl IntoView {
    let (query, set_query) = signal(String::new());
    let results = move || catalog::search_suppliers(&query.get());

    view! {
        <div class="suppliers-view fade-in">
            <header class="page-header">
                <div>
                    <h2>"Vetted Global Network"</h2>
                    <p class="subtitle">"Only top 1% of suppliers meet our provenance standards."</p>
                </div>
                <input
                    type="text"
                    class="search-input"
                    placeholder="Search suppliers..."
                    prop:value=move || query.get()
                    on:input=move |ev| set_query.set(event_target_value(&ev))
                />
            </header>
            <div class="supplier-grid">
                <For
                    each=results
                    key=|s| s.name
                    children=|s| {
                        let verified = s.verified;
                        view! {
                            <article class="supplier-card">
                                <img src=s.image alt=s.name />
                                <div class="supplier-body">
                                    <h3>{s.name}</h3>
                                    <p class="muted">{s.location}</p>
                                    <div class="supplier-meta">
                                        <span class="chip">{s.specialty}</span>
                                        <span class="rating">{format!("★ {:.1}", s.rating)}</span>
                                        <Show when=move || verified>
                                            <span class="verified-tag">"Verified"</span>
                                        </Show>
                                    </div>
                                </div>
                            </article>
                        }
                    }
                />
            </div>
            <Show when=move || results().is_empty()>
                <p class="empty-state">{move || format!("No suppliers match \"{}\".", query.get())}</p>
            </Show>
        </div>
    }
}

// ========================
// Settings
// ========================

#[component]
pub fn SettingsView() -> impl IntoView {
    let ctx = use_app_context();
    let full_name = RwSignal::new("Victoria Sterling".to_string());
    let email = RwSignal::new("v.sterling@classichomes.com".to_string());
    let two_factor = RwSignal::new(true);
    let login_alerts = RwSignal::new(true);
    let (log_lines, set_log_lines) = signal(console_logger::recent_lines());

    let save = move || {
        log::info!(
            "Profile saved (2FA: {}, login alerts: {})",
            two_factor.get_untracked(),
            login_alerts.get_untracked()
        );
        ctx.notify(ToastKind::Success, format!("Settings saved for {}.", full_name.get_untracked()));
        set_log_lines.set(console_logger::recent_lines());
    };

    view! {
        <div class="settings-view fade-in">
            <h2>"Account Settings"</h2>

            <section class="panel">
                <h3>"Profile Information"</h3>
                <div class="form-grid">
                    <label class="field">
                        <span class="field-label">"Full Name"</span>
                        <input
                            type="text"
                            prop:value=move || full_name.get()
                            on:input=move |ev| full_name.set(event_target_value(&ev))
                        />
                    </label>
                    <label class="field">
                        <span class="field-label">"Email Address"</span>
                        <input
                            type="email"
                            prop:value=move || email.get()
                            on:input=move |ev| email.set(event_target_value(&ev))
                        />
                    </label>
                    <label class="field">
                        <span class="field-label">"Role"</span>
                        <input type="text" value="Chief Procurement Officer" disabled />
                    </label>
                </div>
            </section>

            <section class="panel">
                <h3>"Security Preferences"</h3>
                <label class="toggle-row">
                    <div>
                        <p class="strong">"Two-Factor Authentication"</p>
                        <p class="muted">"Secure your account with 2FA."</p>
                    </div>
                    <input
                        type="checkbox"
                        prop:checked=move || two_factor.get()
                        on:change=move |ev| two_factor.set(event_target_checked(&ev))
                    />
                </label>
                <label class="toggle-row">
                    <div>
                        <p class="strong">"Login Notifications"</p>
                        <p class="muted">"Alerts when accessed from new IP."</p>
                    </div>
                    <input
                        type="checkbox"
                        prop:checked=move || login_alerts.get()
                        on:change=move |ev| login_alerts.set(event_target_checked(&ev))
                    />
                </label>
            </section>

            <section class="panel diagnostics">
                <div class="panel-header">
                    <h3>"Diagnostics"</h3>
                    <Button
                        variant=ButtonVariant::Text
                        size=ButtonSize::Sm
                        on_click=move |_| set_log_lines.set(console_logger::recent_lines())
                    >
                        "Refresh"
                    </Button>
                </div>
                <pre class="log-view">{move || log_lines.get().join("\n")}</pre>
            </section>

            <div class="page-actions">
                <Button
                    variant=ButtonVariant::Outline
                    on_click=move |_| {
                        full_name.set("Victoria Sterling".to_string());
                        email.set("v.sterling@classichomes.com".to_string());
                    }
                >
                    "Cancel"
                </Button>
                <Button on_click=move |_| save()>"Save Changes"</Button>
            </div>
        </div>
    }
}
