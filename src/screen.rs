//! Screen Enumeration
//!
//! Closed set of views the navigator can show.

use crate::pricing::PaymentMethod;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Screen {
    // Sourcing flow
    #[default]
    Dashboard,
    UploadSpecs,
    Results,
    Commitment,
    Success,
    // Secondary dashboard views
    Orders,
    Wallet,
    Analytics,
    Suppliers,
    Settings,
    // Footer / info pages
    SecurityPolicy,
    Web3Policy,
    PrivacyPolicy,
    TermsService,
    HelpCenter,
    ContactSupport,
    /// Settlement method detail page
    Settlement(PaymentMethod),
}

/// Sidebar entry: icon glyph, label, target
pub struct NavEntry {
    pub icon: &'static str,
    pub label: &'static str,
    pub screen: Screen,
}

pub const PRIMARY_NAV: &[NavEntry] = &[
    NavEntry { icon: "▦", label: "Dashboard", screen: Screen::Dashboard },
    NavEntry { icon: "▤", label: "Projects", screen: Screen::UploadSpecs },
    NavEntry { icon: "◈", label: "Materials", screen: Screen::Results },
    NavEntry { icon: "☰", label: "Orders", screen: Screen::Orders },
    NavEntry { icon: "◎", label: "Wallet", screen: Screen::Wallet },
    NavEntry { icon: "▲", label: "Analytics", screen: Screen::Analytics },
    NavEntry { icon: "✦", label: "Vetted Suppliers", screen: Screen::Suppliers },
    NavEntry { icon: "⚙", label: "Settings", screen: Screen::Settings },
];

impl Screen {
    /// Every screen reachable from the sidebar, settlement group included
    pub fn sidebar_screens() -> Vec<Screen> {
        PRIMARY_NAV
            .iter()
            .map(|entry| entry.screen)
            .chain(PaymentMethod::ALL.into_iter().map(Screen::Settlement))
            .collect()
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Screen::Dashboard => "DASHBOARD",
            Screen::UploadSpecs => "UPLOAD_SPECS",
            Screen::Results => "RESULTS",
            Screen::Commitment => "COMMITMENT",
            Screen::Success => "SUCCESS",
            Screen::Orders => "ORDERS",
            Screen::Wallet => "WALLET",
            Screen::Analytics => "ANALYTICS",
            Screen::Suppliers => "SUPPLIERS",
            Screen::Settings => "SETTINGS",
            Screen::SecurityPolicy => "SECURITY_POLICY",
            Screen::Web3Policy => "WEB3_POLICY",
            Screen::PrivacyPolicy => "PRIVACY_POLICY",
            Screen::TermsService => "TERMS_SERVICE",
            Screen::HelpCenter => "HELP_CENTER",
            Screen::ContactSupport => "CONTACT_SUPPORT",
            Screen::Settlement(PaymentMethod::Escrow) => "SETTLEMENT_ESCROW",
            Screen::Settlement(PaymentMethod::Wire) => "SETTLEMENT_WIRE",
            Screen::Settlement(PaymentMethod::Card) => "SETTLEMENT_CARD",
            Screen::Settlement(PaymentMethod::Stablecoin) => "SETTLEMENT_USDC",
        }
    }

    pub fn title(&self) -> &'static str {
        match self {
            Screen::Dashboard => "Executive Dashboard",
            Screen::UploadSpecs => "Specification Upload",
            Screen::Results => "AI-Matched Materials",
            Screen::Commitment => "Finalize Commitment",
            Screen::Success => "Commitment Secured",
            Screen::Orders => "Order Management",
            Screen::Wallet => "Digital Wallet & Escrow",
            Screen::Analytics => "Procurement Analytics",
            Screen::Suppliers => "Vetted Global Network",
            Screen::Settings => "Account Settings",
            Screen::SecurityPolicy => "Security Policy",
            Screen::Web3Policy => "Web3 Provenance Policy",
            Screen::PrivacyPolicy => "Privacy Policy",
            Screen::TermsService => "Terms of Service",
            Screen::HelpCenter => "Help Center",
            Screen::ContactSupport => "Contact Support",
            Screen::Settlement(method) => method.label(),
        }
    }

    /// Part of the upload -> results -> commitment -> success flow
    pub fn is_sourcing_flow(&self) -> bool {
        matches!(
            self,
            Screen::UploadSpecs | Screen::Results | Screen::Commitment | Screen::Success
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sidebar_covers_settlement_pages() {
        let screens = Screen::sidebar_screens();
        assert_eq!(screens.len(), PRIMARY_NAV.len() + PaymentMethod::ALL.len());
        assert!(screens.contains(&Screen::Settlement(PaymentMethod::Stablecoin)));
        assert!(!screens.contains(&Screen::Commitment));
    }

    #[test]
    fn test_screen_keys_unique() {
        let mut keys: Vec<_> = Screen::sidebar_screens().iter().map(|s| s.as_str()).collect();
        keys.sort();
        keys.dedup();
        assert_eq!(keys.len(), Screen::sidebar_screens().len());
    }
}
