//! Login Gate
//!
//! Simulated enterprise sign-in. No credentials are checked; either entry
//! path plays the verification stages and then enters the app.

use gloo_timers::future::TimeoutFuture;
use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::components::HouseLogo;

/// Status line shown at each offset (ms) after sign-in starts
pub const LOGIN_STAGES: &[(u32, &str)] = &[
    (0, "Verifying Credentials against Whitelist..."),
    (1500, "Querying Immutable Ledger for Access Rights..."),
    (2800, "Decryption Key Handshake Successful..."),
];

/// Offset (ms) at which the app opens
pub const LOGIN_COMPLETE_MS: u32 = 3500;

/// Waits between consecutive stages, ending with the wait before completion
fn stage_gaps() -> Vec<(u32, Option<&'static str>)> {
    let mut gaps = Vec::with_capacity(LOGIN_STAGES.len());
    let mut elapsed = 0;
    for &(at, text) in LOGIN_STAGES.iter().skip(1) {
        gaps.push((at.saturating_sub(elapsed), Some(text)));
        elapsed = at;
    }
    gaps.push((LOGIN_COMPLETE_MS.saturating_sub(elapsed), None));
    gaps
}

#[component]
pub fn LoginView(#[prop(into)] on_login: Callback<()>) -> impl IntoView {
    let (email, set_email) = signal(String::new());
    let (authenticating, set_authenticating) = signal(false);
    let (status, set_status) = signal(LOGIN_STAGES[0].1);

    let start = move || {
        if authenticating.get_untracked() {
            return;
        }
        log::info!("Sign-in started");
        set_status.set(LOGIN_STAGES[0].1);
        set_authenticating.set(true);
        spawn_local(async move {
            for (wait, text) in stage_gaps() {
                TimeoutFuture::new(wait).await;
                match text {
                    Some(text) => set_status.set(text),
                    None => on_login.run(()),
                }
            }
        });
    };

    let on_submit = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        log::debug!("Magic link requested for {}", email.get_untracked());
        start();
    };

    view! {
        <div class="login-screen">
            <div class="login-grid"></div>
            <div class="login-card">
                <div class="login-header">
                    <HouseLogo class="login-logo" />
                    <h1>"CLASSIC HOMES " <span class="accent">"MARKETPLACE"</span></h1>
                    <p class="tagline">"Verified Provenance. Digital Certainty."</p>
                </div>

                <Show
                    when=move || authenticating.get()
                    fallback=move || view! {
                        <button class="sso-button" on:click=move |_| start()>
                            "Authenticate via SSO (Microsoft/Okta)"
                        </button>
                        <div class="divider"><span>"or secure link"</span></div>
                        <form class="magic-link" on:submit=on_submit>
                            <label>"Business Email"</label>
                            <input
                                type="email"
                                placeholder="name@organization.com"
                                prop:value=move || email.get()
                                on:input=move |ev| set_email.set(event_target_value(&ev))
                            />
                            <button type="submit" class="magic-button">"Request Secure Magic Link"</button>
                        </form>
                    }
                >
                    <div class="login-progress">
                        <div class="spinner"></div>
                        <p class="status-line">{move || status.get()}</p>
                    </div>
                </Show>

                <div class="trust-signals">
                    <span>"✓ SOC2 Encrypted"</span>
                    <span>"✓ ISO 27001 Verified"</span>
                    <span>"🔒 256-bit SSL"</span>
                </div>
                <p class="login-notice">
                    "Authorized Personnel Only. All access attempts are logged on the immutable ledger."
                </p>
            </div>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_stage_gaps_sum_to_completion() {
        let gaps = stage_gaps();
        assert_eq!(gaps, vec![
            (1500, Some("Querying Immutable Ledger for Access Rights...")),
            (1300, Some("Decryption Key Handshake Successful...")),
            (700, None),
        ]);
        let total: u32 = gaps.iter().map(|(wait, _)| wait).sum();
        assert_eq!(total, LOGIN_COMPLETE_MS);
    }
}
