//! Executive Dashboard
//!
//! KPI sparklines, supply-risk radar, cost forecast, the project table with a
//! status filter and executive alerts.

use leptos::prelude::*;

use crate::catalog::{self, ALL_FILTER};
use crate::components::{Button, ButtonSize, ButtonVariant, ForecastChart, Sparkline};
use crate::context::use_app_context;
use crate::mock_data::{self, COST_FORECAST, SPEND_SERIES, VOLUME_SERIES};
use crate::models::{ProjectStatus, ToastKind};
use crate::screen::Screen;

/// Watched sourcing regions and their logistics status
const RADAR_LOCATIONS: &[(&str, &str, bool)] = &[
    ("Tuscany, Italy", "LOGISTICS: SECURE", false),
    ("São Paulo, Brazil", "DELAY RISK: +2 WKS", true),
    ("Vermont, USA", "PRODUCTION: ON TRACK", false),
];

fn status_class(status: ProjectStatus) -> &'static str {
    match status {
        ProjectStatus::Draft => "status-pill draft",
        ProjectStatus::InProgress => "status-pill in-progress",
        ProjectStatus::Committed => "status-pill committed",
    }
}

#[component]
pub fn Dashboard() -> impl IntoView {
    let ctx = use_app_context();
    let projects = StoredValue::new(mock_data::projects());
    let (status_filter, set_status_filter) = signal(ALL_FILTER.to_string());

    let filtered = move || {
        let status = ProjectStatus::from_label(&status_filter.get());
        projects.with_value(|all| catalog::filter_projects(all, status))
    };

    let status_options = std::iter::once(ALL_FILTER)
        .chain(ProjectStatus::ALL.iter().map(|s| s.label()))
        .map(|label| view! { <option value=label>{label}</option> })
        .collect_view();

    let radar = mock_data::risk_radar()
        .into_iter()
        .map(|entry| {
            let width = format!("width:{}%", entry.supply_volatility_score);
            let level = if entry.supply_volatility_score >= 70 { "risk-bar high" } else { "risk-bar" };
            view! {
                <div class="risk-row">
                    <span class="risk-label">{entry.material}</span>
                    <div class="risk-track">
                        <div class=level style=width></div>
                    </div>
                    <span class="risk-days">{format!("{}d", entry.lead_time_days)}</span>
                </div>
            }
        })
        .collect_view();

    let locations = RADAR_LOCATIONS
        .iter()
        .map(|&(place, status, at_risk)| {
            let (dot, label) = if at_risk {
                ("radar-dot warn", "radar-status warn")
            } else {
                ("radar-dot", "radar-status")
            };
            view! {
                <div class="radar-location">
                    <span class=dot></span>
                    <span class="radar-place">{place}</span>
                    <span class=label>{status}</span>
                </div>
            }
        })
        .collect_view();

    view! {
        <div class="dashboard fade-in">
            <header class="page-header">
                <div>
                    <h2>"Executive Dashboard"</h2>
                    <p class="subtitle">"Real-time procurement intelligence across your portfolio."</p>
                </div>
                <div class="header-actions">
                    <Button variant=ButtonVariant::Outline on_click=move |_| ctx.navigate(Screen::Analytics)>
                        "View Analytics"
                    </Button>
                    <Button on_click=move |_| ctx.navigate(Screen::UploadSpecs)>"New Sourcing Cycle"</Button>
                </div>
            </header>

            <section class="kpi-grid">
                <div class="kpi-card">
                    <h3>"Total Procurement Spend"</h3>
                    <p class="kpi-value">"$4.5M"</p>
                    <p class="kpi-note">"YTD Accumulated"</p>
                    <Sparkline series=SPEND_SERIES color="#1A2A44" />
                </div>
                <div class="kpi-card">
                    <h3>"Tokenized Volume"</h3>
                    <p class="kpi-value">"$4.2M"</p>
                    <p class="kpi-note">"Secured on Polygon"</p>
                    <Sparkline series=VOLUME_SERIES color="#D4AF37" />
                </div>
                <div class="kpi-card radar">
                    <h3>"Global Supply Risk Radar"</h3>
                    {locations}
                    <div class="risk-bars">{radar}</div>
                </div>
            </section>

            <div class="dashboard-main">
                <div class="dashboard-left">
                    <section class="panel">
                        <div class="panel-header">
                            <div>
                                <h3>"Sourcing Cost Forecast"</h3>
                                <p class="subtitle">"AI-Predicted Material Inflation (Next 2 Months)"</p>
                            </div>
                        </div>
                        <ForecastChart points=COST_FORECAST />
                    </section>

                    <section class="panel">
                        <div class="panel-header">
                            <h3>"Active Procurement Cycles"</h3>
                            <select
                                class="filter-select"
                                prop:value=move || status_filter.get()
                                on:change=move |ev| set_status_filter.set(event_target_value(&ev))
                            >
                                {status_options}
                            </select>
                        </div>
                        <table class="data-table">
                            <thead>
                                <tr>
                                    <th>"Project"</th>
                                    <th>"Location"</th>
                                    <th>"Status"</th>
                                    <th>"Last Activity"</th>
                                    <th></th>
                                </tr>
                            </thead>
                            <tbody>
                                <For
                                    each=filtered
                                    key=|project| project.id.clone()
                                    children=move |project| {
                                        let in_progress = project.status == ProjectStatus::InProgress;
                                        view! {
                                            <tr>
                                                <td class="project-name">{project.name}</td>
                                                <td>{project.location}</td>
                                                <td>
                                                    <span class=status_class(project.status)>{project.status.label()}</span>
                                                </td>
                                                <td class="muted">{project.last_activity}</td>
                                                <td>
                                                    <Show when=move || in_progress>
                                                        <Button
                                                            variant=ButtonVariant::Text
                                                            size=ButtonSize::Sm
                                                            on_click=move |_| ctx.navigate(Screen::UploadSpecs)
                                                        >
                                                            "Continue"
                                                        </Button>
                                                    </Show>
                                                </td>
                                            </tr>
                                        }
                                    }
                                />
                            </tbody>
                        </table>
                        <Show when=move || filtered().is_empty()>
                            <p class="empty-state">"No projects match this status."</p>
                        </Show>
                    </section>
                </div>

                <aside class="dashboard-right">
                    <section class="panel alerts">
                        <h3>"Executive Alerts"</h3>
                        <div class="alert warn">
                            <p class="alert-title">"Lead Time Increase"</p>
                            <p>"Italian logistics strike may affect Sterling Residence marble delivery by +2 weeks."</p>
                        </div>
                        <div class="alert opportunity">
                            <p class="alert-title">"Price Opportunity"</p>
                            <p>"Teak spot prices dropped 5%. Lock rate for Vanguard Estate now."</p>
                        </div>
                    </section>
                    <section class="panel">
                        <h4>"Fiscal Year Closing"</h4>
                        <p class="muted">"4 sourcing cycles pending finalization before Q4 close."</p>
                        <Button
                            variant=ButtonVariant::Outline
                            on_click=move |_| ctx.notify(ToastKind::Info, "Q4 report queued. It will appear under Analytics.")
                        >
                            "Generate Q4 Report"
                        </Button>
                    </section>
                </aside>
            </div>
        </div>
    }
}
