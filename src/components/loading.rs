//! Loading Overlay
//!
//! Full-screen brand overlay shown while a navigation is pending.

use leptos::prelude::*;

pub const HOUSE_LOGO_OUTLINE: &str = "M3 10L12 2L21 10V20C21 20.5304 20.7893 21.0391 20.4142 21.4142C20.0391 21.7893 19.5304 22 19 22H5C4.46957 22 3.96086 21.7893 3.58579 21.4142C3.21071 21.0391 3 20.5304 3 20V10Z";

/// Abstract house mark used by the sidebar, login and loading screens
#[component]
pub fn HouseLogo(#[prop(optional, into)] class: String) -> impl IntoView {
    view! {
        <svg viewBox="0 0 24 24" fill="none" stroke="currentColor" stroke-width="1" class=class>
            <path d=HOUSE_LOGO_OUTLINE />
            <path d="M9 22V12H15V22" />
            <path d="M12 2L12 4" stroke-width="2" stroke="#D4AF37" />
        </svg>
    }
}

#[component]
pub fn LoadingOverlay() -> impl IntoView {
    view! {
        <div class="loading-overlay">
            <div class="loading-logo">
                <div class="loading-glow"></div>
                <HouseLogo class="logo-svg pulse" />
            </div>
            <h2 class="loading-brand">"CLASSIC HOMES"</h2>
            <div class="loading-caption">
                <span class="rule"></span>
                <p class="pulse">"Establishing Digital Certainty..."</p>
                <span class="rule"></span>
            </div>
        </div>
    }
}
