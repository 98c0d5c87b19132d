//! UI Components
//!
//! Screens and the shared pieces they are built from.

mod button;
mod chart_views;
mod commitment_view;
mod dashboard;
mod dashboard_views;
mod footer;
mod generate_material_modal;
mod info_views;
mod loading;
mod login_view;
mod material_details_modal;
mod provenance_timeline;
mod results_view;
mod settlement_view;
mod sidebar;
mod success_view;
mod toasts;
mod upload_specs;

pub use button::{Button, ButtonSize, ButtonVariant};
pub use chart_views::{BarChart, DonutChart, ForecastChart, Sparkline};
pub use commitment_view::CommitmentView;
pub use dashboard::Dashboard;
pub use dashboard_views::{AnalyticsView, OrdersView, SettingsView, SuppliersView, WalletView};
pub use footer::Footer;
pub use generate_material_modal::GenerateMaterialModal;
pub use info_views::{HelpCenterView, PolicyView, SupportView};
pub use loading::{HouseLogo, LoadingOverlay};
pub use login_view::LoginView;
pub use material_details_modal::MaterialDetailsModal;
pub use provenance_timeline::ProvenanceTimeline;
pub use results_view::ResultsView;
pub use settlement_view::SettlementView;
pub use sidebar::Sidebar;
pub use success_view::SuccessView;
pub use toasts::ToastStack;
pub use upload_specs::UploadSpecs;
