//! Frontend Models
//!
//! Catalog, project and mock dashboard records.

use serde::{Deserialize, Serialize};

/// A sourceable construction material
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Material {
    pub id: String,
    pub name: String,
    /// Category tag, e.g. "Natural Stone"
    #[serde(rename = "type")]
    pub category: String,
    pub origin: String,
    /// 0-100
    pub match_score: u8,
    pub price_per_sq_ft: f64,
    pub currency: String,
    pub lead_time_weeks: u32,
    pub verified: bool,
    pub provenance_id: String,
    pub image_url: String,
    pub supplier: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ProjectStatus {
    Draft,
    #[serde(rename = "In Progress")]
    InProgress,
    Committed,
}

impl ProjectStatus {
    pub const ALL: [ProjectStatus; 3] = [ProjectStatus::Draft, ProjectStatus::InProgress, ProjectStatus::Committed];

    pub fn label(&self) -> &'static str {
        match self {
            ProjectStatus::Draft => "Draft",
            ProjectStatus::InProgress => "In Progress",
            ProjectStatus::Committed => "Committed",
        }
    }

    pub fn from_label(s: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|status| status.label() == s)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Project {
    pub id: String,
    pub name: String,
    pub status: ProjectStatus,
    pub location: String,
    pub last_activity: String,
}

/// Supply-chain checkpoint shown on the provenance timeline
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProvenanceStep {
    pub id: u32,
    pub label: String,
    pub entity: String,
    pub date: String,
    pub location: String,
    pub verified: bool,
}

// ========================
// Dashboard records
// ========================

/// Single labelled value of a chart series
#[derive(Debug, Clone, PartialEq)]
pub struct SeriesPoint {
    pub label: &'static str,
    pub value: f64,
}

/// Forecast row; `actual` is absent for future months
#[derive(Debug, Clone, PartialEq)]
pub struct ForecastPoint {
    pub label: &'static str,
    pub actual: Option<f64>,
    pub predicted: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RiskRadarEntry {
    pub material: String,
    pub supply_volatility_score: u8,
    pub geopolitical_risk_score: u8,
    pub lead_time_days: u32,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OrderStatus {
    Processing,
    Shipped,
    Delivered,
}

impl OrderStatus {
    pub fn label(&self) -> &'static str {
        match self {
            OrderStatus::Processing => "Processing",
            OrderStatus::Shipped => "Shipped",
            OrderStatus::Delivered => "Delivered",
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Order {
    pub id: &'static str,
    pub project: &'static str,
    pub items: &'static str,
    pub date: &'static str,
    pub status: OrderStatus,
    pub total: &'static str,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TransactionKind {
    Payment,
    Deposit,
    Escrow,
}

impl TransactionKind {
    pub fn label(&self) -> &'static str {
        match self {
            TransactionKind::Payment => "Payment",
            TransactionKind::Deposit => "Deposit",
            TransactionKind::Escrow => "Escrow",
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Transaction {
    pub id: u32,
    pub kind: TransactionKind,
    pub counterparty: &'static str,
    pub amount: &'static str,
    pub date: &'static str,
    pub status: &'static str,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Supplier {
    pub name: &'static str,
    pub location: &'static str,
    pub rating: f32,
    pub specialty: &'static str,
    pub verified: bool,
    pub image: &'static str,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Faq {
    pub question: &'static str,
    pub answer: &'static str,
}

// ========================
// Notifications
// ========================

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ToastKind {
    Success,
    Info,
    Warning,
    Error,
}

impl ToastKind {
    pub fn class(&self) -> &'static str {
        match self {
            ToastKind::Success => "toast toast-success",
            ToastKind::Info => "toast toast-info",
            ToastKind::Warning => "toast toast-warning",
            ToastKind::Error => "toast toast-error",
        }
    }
}

/// Transient notification shown in the corner of the app
#[derive(Debug, Clone, PartialEq)]
pub struct Toast {
    pub id: u32,
    pub kind: ToastKind,
    pub message: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_project_status_labels_round_trip() {
        for status in ProjectStatus::ALL {
            assert_eq!(ProjectStatus::from_label(status.label()), Some(status));
        }
        assert_eq!(ProjectStatus::from_label("All"), None);
    }

    #[test]
    fn test_material_deserializes_camel_case() {
        let json = r#"{
            "id": "m9", "name": "Nero Marquina", "type": "Natural Stone",
            "origin": "Basque Country, Spain", "matchScore": 90, "pricePerSqFt": 210.5,
            "currency": "USD", "leadTimeWeeks": 7, "verified": false,
            "provenanceId": "0x0", "imageUrl": "x", "supplier": "Iberia Stone"
        }"#;
        let m: Material = serde_json::from_str(json).unwrap();
        assert_eq!(m.category, "Natural Stone");
        assert_eq!(m.match_score, 90);
        assert_eq!(m.lead_time_weeks, 7);
    }
}
