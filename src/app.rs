//! Classic Homes Marketplace App
//!
//! Session gate, sidebar layout and the screen router.

use leptos::prelude::*;
use reactive_stores::Store;

use crate::components::{
    AnalyticsView, CommitmentView, Dashboard, Footer, HelpCenterView, LoadingOverlay, LoginView, OrdersView,
    PolicyView, ResultsView, SettingsView, SettlementView, Sidebar, SuccessView, SupportView, SuppliersView,
    ToastStack, UploadSpecs, WalletView,
};
use crate::config::AppConfig;
use crate::context::{use_app_context, AppContext, CONTENT_PANE_ID};
use crate::navigator::Navigator;
use crate::policies;
use crate::screen::Screen;
use crate::store::AppState;

#[component]
pub fn App(config: AppConfig) -> impl IntoView {
    let store = Store::new(AppState::new());
    provide_context(store);

    let ctx = AppContext::new(signal(Navigator::new()), config, store);
    provide_context(ctx);

    let (logged_in, set_logged_in) = signal(false);

    let on_login = move |_| {
        log::info!("Session started");
        set_logged_in.set(true);
    };
    let on_logout = move |_| {
        log::info!("Session ended");
        ctx.jump(Screen::Dashboard);
        set_logged_in.set(false);
    };

    view! {
        <Show
            when=move || logged_in.get()
            fallback=move || view! { <LoginView on_login=on_login /> }
        >
            <div class="app-layout">
                <Sidebar on_logout=on_logout />
                <main id=CONTENT_PANE_ID class="main-content">
                    <div class="content-area">
                        <ScreenRouter />
                    </div>
                    <Footer />
                </main>
                <Show when=move || ctx.is_loading()>
                    <LoadingOverlay />
                </Show>
            </div>
        </Show>
        <ToastStack />
    }
}

/// Renders the resolved screen. Only re-renders when the screen itself
/// changes, not when a navigation starts.
#[component]
fn ScreenRouter() -> impl IntoView {
    let ctx = use_app_context();
    let screen = Memo::new(move |_| ctx.screen());

    move || {
        let screen = screen.get();
        log::debug!("Rendering {}", screen.as_str());
        match screen {
            Screen::Dashboard => view! { <Dashboard /> }.into_any(),
            Screen::UploadSpecs => view! { <UploadSpecs /> }.into_any(),
            Screen::Results => view! { <ResultsView /> }.into_any(),
            Screen::Commitment => match ctx.navigator.with_untracked(|nav| nav.selected_material().cloned()) {
                Some(material) => view! { <CommitmentView material=material /> }.into_any(),
                None => view! { <Dashboard /> }.into_any(),
            },
            Screen::Success => view! { <SuccessView /> }.into_any(),
            Screen::Orders => view! { <OrdersView /> }.into_any(),
            Screen::Wallet => view! { <WalletView /> }.into_any(),
            Screen::Analytics => view! { <AnalyticsView /> }.into_any(),
            Screen::Suppliers => view! { <SuppliersView /> }.into_any(),
            Screen::Settings => view! { <SettingsView /> }.into_any(),
            Screen::SecurityPolicy | Screen::Web3Policy | Screen::PrivacyPolicy | Screen::TermsService => {
                match policies::for_screen(screen) {
                    Some(doc) => view! { <PolicyView doc=doc /> }.into_any(),
                    None => view! { <Dashboard /> }.into_any(),
                }
            }
            Screen::HelpCenter => view! { <HelpCenterView /> }.into_any(),
            Screen::ContactSupport => view! { <SupportView /> }.into_any(),
            Screen::Settlement(method) => view! { <SettlementView method=method /> }.into_any(),
        }
    }
}
