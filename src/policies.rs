//! Policy Documents
//!
//! Static legal and security pages, authored as markdown under `content/`.

use crate::screen::Screen;

pub struct PolicyDoc {
    pub title: &'static str,
    pub subtitle: Option<&'static str>,
    pub body: &'static str,
}

pub const SECURITY: PolicyDoc = PolicyDoc {
    title: "Security Policy",
    subtitle: Some("Last updated: October 1, 2025"),
    body: include_str!("../content/security.md"),
};

pub const WEB3: PolicyDoc = PolicyDoc {
    title: "Web3 Provenance Policy",
    subtitle: Some("Immutable supply chain tracking standards."),
    body: include_str!("../content/web3.md"),
};

pub const PRIVACY: PolicyDoc = PolicyDoc {
    title: "Privacy Policy",
    subtitle: None,
    body: include_str!("../content/privacy.md"),
};

pub const TERMS: PolicyDoc = PolicyDoc {
    title: "Terms of Service",
    subtitle: None,
    body: include_str!("../content/terms.md"),
};

/// Document shown on a policy screen
pub fn for_screen(screen: Screen) -> Option<&'static PolicyDoc> {
    match screen {
        Screen::SecurityPolicy => Some(&SECURITY),
        Screen::Web3Policy => Some(&WEB3),
        Screen::PrivacyPolicy => Some(&PRIVACY),
        Screen::TermsService => Some(&TERMS),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::markdown::parse_markdown;

    #[test]
    fn test_policy_screens_have_documents() {
        for screen in [Screen::SecurityPolicy, Screen::Web3Policy, Screen::PrivacyPolicy, Screen::TermsService] {
            let doc = for_screen(screen).unwrap();
            assert_eq!(doc.title, screen.title());
            assert!(!doc.body.trim().is_empty());
        }
        assert!(for_screen(Screen::HelpCenter).is_none());
    }

    #[test]
    fn test_security_sections_are_anchored() {
        let html = parse_markdown(SECURITY.body);
        assert!(html.contains(r#"id="1-data-encryption-standards""#));
        assert!(html.contains(r#"id="3-smart-contract-audits""#));
        assert!(html.contains("AES-256"));
    }

    #[test]
    fn test_terms_render_as_ordered_list() {
        let html = parse_markdown(TERMS.body);
        assert!(html.contains("<ol>"));
        assert_eq!(html.matches("<li>").count(), 4);
    }
}
