//! Footer Component

use leptos::prelude::*;

use crate::context::use_app_context;
use crate::models::ToastKind;
use crate::screen::Screen;

const FOOTER_LINKS: &[(&str, Screen)] = &[
    ("Security", Screen::SecurityPolicy),
    ("Provenance", Screen::Web3Policy),
    ("Privacy", Screen::PrivacyPolicy),
    ("Terms", Screen::TermsService),
    ("Help Center", Screen::HelpCenter),
    ("Contact Support", Screen::ContactSupport),
];

#[component]
pub fn Footer() -> impl IntoView {
    let ctx = use_app_context();

    let links = FOOTER_LINKS
        .iter()
        .map(|&(label, screen)| {
            view! {
                <button class="footer-link" on:click=move |_| ctx.navigate(screen)>
                    {label}
                </button>
            }
        })
        .collect_view();

    view! {
        <footer class="app-footer">
            <p class="copyright">"© 2025 Classic Homes Marketplace. All rights reserved."</p>
            <div class="footer-links">
                {links}
                <button
                    class="footer-link concierge"
                    on:click=move |_| ctx.notify(ToastKind::Info, "A concierge will join the chat shortly.")
                >
                    "Live Concierge"
                </button>
            </div>
        </footer>
    }
}
