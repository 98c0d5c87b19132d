//! Application Context
//!
//! Navigator state, configuration and notifications, provided via the
//! Leptos Context API. Navigation is only ever changed through
//! [`AppContext::navigate`] and friends.

use gloo_timers::future::TimeoutFuture;
use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::config::AppConfig;
use crate::genai::GeminiClient;
use crate::models::{Material, ToastKind};
use crate::navigator::{NavTicket, Navigator};
use crate::screen::Screen;
use crate::store::{store_dismiss_toast, store_push_toast, AppStore};

/// Id of the scrollable content pane, reset on every committed navigation
pub const CONTENT_PANE_ID: &str = "main-content";

/// App-wide signals provided via context
#[derive(Clone, Copy)]
pub struct AppContext {
    /// Navigator state - read
    pub navigator: ReadSignal<Navigator>,
    /// Navigator state - write
    set_navigator: WriteSignal<Navigator>,
    config: StoredValue<AppConfig>,
    store: AppStore,
}

impl AppContext {
    pub fn new(navigator: (ReadSignal<Navigator>, WriteSignal<Navigator>), config: AppConfig, store: AppStore) -> Self {
        Self {
            navigator: navigator.0,
            set_navigator: navigator.1,
            config: StoredValue::new(config),
            store,
        }
    }

    /// Read a value out of the configuration
    pub fn config<T>(&self, f: impl FnOnce(&AppConfig) -> T) -> T {
        self.config.with_value(f)
    }

    /// Client for the generative AI service, built from the current config
    pub fn genai(&self) -> GeminiClient {
        GeminiClient::new(self.config(|c| c.genai.clone()))
    }

    /// Screen to render
    pub fn screen(&self) -> Screen {
        self.navigator.with(|nav| nav.resolved())
    }

    pub fn is_loading(&self) -> bool {
        self.navigator.with(|nav| nav.is_loading())
    }

    pub fn selected_material(&self) -> Option<Material> {
        self.navigator.with(|nav| nav.selected_material().cloned())
    }

    /// Show the loading overlay, then switch to `screen`
    pub fn navigate(&self, screen: Screen) {
        if let Some(ticket) = self.set_navigator.try_update(|nav| nav.request(screen)) {
            log::debug!("Navigation requested: {}", screen.as_str());
            self.settle_later(ticket);
        }
    }

    /// Hand `material` to the commitment screen
    pub fn select_material(&self, material: Material) {
        log::info!("Material selected for commitment: {}", material.id);
        if let Some(ticket) = self.set_navigator.try_update(|nav| nav.select_material(material)) {
            self.settle_later(ticket);
        }
    }

    /// Switch without the loading pause, cancelling any pending navigation
    pub fn jump(&self, screen: Screen) {
        self.set_navigator.update(|nav| nav.jump(screen));
        log::info!("Screen: {}", screen.as_str());
        reset_content_scroll();
    }

    /// Marker for "no navigation since now", redeemed by [`AppContext::jump_from`]
    pub fn checkpoint(&self) -> NavTicket {
        self.navigator.with_untracked(|nav| nav.checkpoint())
    }

    /// Jump to `screen` unless the user navigated after `checkpoint`
    pub fn jump_from(&self, checkpoint: NavTicket, screen: Screen) -> bool {
        let jumped = self
            .set_navigator
            .try_update(|nav| nav.jump_from(checkpoint, screen))
            .unwrap_or(false);
        if jumped {
            log::info!("Screen: {}", screen.as_str());
            reset_content_scroll();
        }
        jumped
    }

    fn settle_later(&self, ticket: NavTicket) {
        let delay = self.config(|c| c.timing.navigation_ms);
        let set_navigator = self.set_navigator;
        spawn_local(async move {
            TimeoutFuture::new(delay).await;
            match set_navigator.try_update(|nav| nav.settle(ticket)).flatten() {
                Some(screen) => {
                    log::info!("Screen: {}", screen.as_str());
                    reset_content_scroll();
                }
                None => log::debug!("Superseded navigation dropped"),
            }
        });
    }

    /// Show a notification that dismisses itself after the configured delay
    pub fn notify(&self, kind: ToastKind, message: impl Into<String>) {
        let store = self.store;
        let id = store_push_toast(&store, kind, message);
        let delay = self.config(|c| c.timing.toast_ms);
        spawn_local(async move {
            TimeoutFuture::new(delay).await;
            store_dismiss_toast(&store, id);
        });
    }
}

/// Get the app context
pub fn use_app_context() -> AppContext {
    use_context::<AppContext>().expect("AppContext should be provided")
}

fn reset_content_scroll() {
    let pane = web_sys::window()
        .and_then(|w| w.document())
        .and_then(|d| d.get_element_by_id(CONTENT_PANE_ID));
    if let Some(pane) = pane {
        pane.set_scroll_top(0);
    }
}
