//! Mock Data Tables
//!
//! Fixed records standing in for a catalog backend.

use crate::models::{
    Faq, ForecastPoint, Material, Order, OrderStatus, Project, ProjectStatus, ProvenanceStep, RiskRadarEntry,
    SeriesPoint, Supplier, Transaction, TransactionKind,
};

/// Material categories offered in selects and the generate form
pub const MATERIAL_CATEGORIES: &[&str] = &[
    "Natural Stone",
    "Architectural Steel",
    "Exotic Wood",
    "Ceramic",
    "Composite",
];

/// Hard-coded result of the simulated specification parse
pub const EXTRACTION_RESULT: &str = "Identified: 120 sq ft Calacatta Marble, Bookmatched, 2cm thickness.";

/// Specification document types accepted by the upload flow
pub const SPEC_FILE_EXTENSIONS: &[&str] = &[".pdf", ".dwg", ".rvt", ".ifc"];

pub const CONTRACT_ID: &str = "CT-2025-8X92";
pub const BENEFICIARY: &str = "Sterling & Associates (Wallet: 0x8a...4b)";
pub const TOKEN_ID: &str = "0x892...2b1";

fn material(
    id: &str,
    name: &str,
    origin: &str,
    match_score: u8,
    price_per_sq_ft: f64,
    lead_time_weeks: u32,
    provenance_id: &str,
    image_url: &str,
    supplier: &str,
) -> Material {
    Material {
        id: id.to_string(),
        name: name.to_string(),
        category: "Natural Stone".to_string(),
        origin: origin.to_string(),
        match_score,
        price_per_sq_ft,
        currency: "USD".to_string(),
        lead_time_weeks,
        verified: true,
        provenance_id: provenance_id.to_string(),
        image_url: image_url.to_string(),
        supplier: supplier.to_string(),
    }
}

pub fn materials() -> Vec<Material> {
    vec![
        // White stone with warm golden veining
        material(
            "m1",
            "Calacatta Oro Marble",
            "Carrara, Italy",
            94,
            395.0,
            8,
            "0x7f3...9a2",
            "https://images.unsplash.com/photo-1615800098779-1be32e60cca3?auto=format&fit=crop&q=80&w=800",
            "Tuscany Stoneworks",
        ),
        material(
            "m2",
            "Statuario Venato",
            "Tuscany, Italy",
            91,
            420.0,
            12,
            "0x8b4...2c1",
            "https://images.unsplash.com/photo-1605218427306-eea998d78908?auto=format&fit=crop&q=80&w=800",
            "Apex Materials",
        ),
        material(
            "m3",
            "Arabescato Corchia",
            "Apuan Alps, Italy",
            86,
            310.0,
            6,
            "0x1c9...5d4",
            "https://images.unsplash.com/photo-1618221195710-dd6b41faaea6?auto=format&fit=crop&q=80&w=800",
            "Global Stone Imports",
        ),
    ]
}

pub fn projects() -> Vec<Project> {
    let project = |id: &str, name: &str, status, location: &str, last_activity: &str| Project {
        id: id.to_string(),
        name: name.to_string(),
        status,
        location: location.to_string(),
        last_activity: last_activity.to_string(),
    };
    vec![
        project("p1", "Sterling Residence", ProjectStatus::InProgress, "Aspen, CO", "2 mins ago"),
        project("p2", "Apex Tower Penthouse", ProjectStatus::Draft, "New York, NY", "4 hours ago"),
        project("p3", "Vanguard Estate", ProjectStatus::Committed, "London, UK", "1 day ago"),
    ]
}

pub fn provenance_steps() -> Vec<ProvenanceStep> {
    let step = |id, label: &str, entity: &str, date: &str, location: &str, verified| ProvenanceStep {
        id,
        label: label.to_string(),
        entity: entity.to_string(),
        date: date.to_string(),
        location: location.to_string(),
        verified,
    };
    vec![
        step(1, "Extraction", "Carrara Quarry #4", "Oct 12, 2025", "Italy", true),
        step(2, "Fabrication", "Master Artisans S.p.A", "Nov 03, 2025", "Milan", true),
        step(3, "Quality Audit", "AI Visual Scan v2.4", "Nov 05, 2025", "Digital", true),
        step(4, "Logistics", "Global Freight Partners", "Pending", "Transit", false),
    ]
}

pub fn risk_radar() -> Vec<RiskRadarEntry> {
    let entry = |material: &str, volatility, geopolitical, lead_time_days| RiskRadarEntry {
        material: material.to_string(),
        supply_volatility_score: volatility,
        geopolitical_risk_score: geopolitical,
        lead_time_days,
    };
    vec![
        entry("Italian Marble", 45, 20, 45),
        entry("Exotic Hardwood", 75, 65, 60),
        entry("Structural Steel", 30, 40, 25),
        entry("Smart Home Tech", 85, 55, 90),
        entry("Architectural Glass", 40, 30, 35),
    ]
}

// ========================
// Chart series
// ========================

/// Total procurement spend, $M
pub const SPEND_SERIES: &[SeriesPoint] = &[
    SeriesPoint { label: "May", value: 3.2 },
    SeriesPoint { label: "Jun", value: 3.5 },
    SeriesPoint { label: "Jul", value: 3.4 },
    SeriesPoint { label: "Aug", value: 3.8 },
    SeriesPoint { label: "Sep", value: 4.1 },
    SeriesPoint { label: "Oct", value: 4.5 },
];

/// Tokenized volume, $M
pub const VOLUME_SERIES: &[SeriesPoint] = &[
    SeriesPoint { label: "May", value: 1.2 },
    SeriesPoint { label: "Jun", value: 1.5 },
    SeriesPoint { label: "Jul", value: 2.1 },
    SeriesPoint { label: "Aug", value: 3.2 },
    SeriesPoint { label: "Sep", value: 3.8 },
    SeriesPoint { label: "Oct", value: 4.2 },
];

pub const COST_FORECAST: &[ForecastPoint] = &[
    ForecastPoint { label: "May", actual: Some(400.0), predicted: 400.0 },
    ForecastPoint { label: "Jun", actual: Some(420.0), predicted: 420.0 },
    ForecastPoint { label: "Jul", actual: Some(410.0), predicted: 430.0 },
    ForecastPoint { label: "Aug", actual: Some(450.0), predicted: 460.0 },
    ForecastPoint { label: "Sep", actual: Some(480.0), predicted: 480.0 },
    ForecastPoint { label: "Oct", actual: Some(520.0), predicted: 510.0 },
    ForecastPoint { label: "Nov", actual: None, predicted: 540.0 },
    ForecastPoint { label: "Dec", actual: None, predicted: 580.0 },
];

/// Monthly procurement spend, k$
pub const MONTHLY_SPEND: &[SeriesPoint] = &[
    SeriesPoint { label: "Jan", value: 4000.0 },
    SeriesPoint { label: "Feb", value: 3000.0 },
    SeriesPoint { label: "Mar", value: 2000.0 },
    SeriesPoint { label: "Apr", value: 2780.0 },
    SeriesPoint { label: "May", value: 1890.0 },
    SeriesPoint { label: "Jun", value: 2390.0 },
    SeriesPoint { label: "Jul", value: 3490.0 },
];

pub const CATEGORY_SPLIT: &[SeriesPoint] = &[
    SeriesPoint { label: "Natural Stone", value: 400.0 },
    SeriesPoint { label: "Hardwoods", value: 300.0 },
    SeriesPoint { label: "Steel", value: 300.0 },
    SeriesPoint { label: "Glass", value: 200.0 },
];

pub const CHART_COLORS: &[&str] = &["#1A2A44", "#D4AF37", "#2C3E50", "#9CA3AF"];

// ========================
// Secondary views
// ========================

pub const ORDERS: &[Order] = &[
    Order {
        id: "ORD-8921",
        project: "Sterling Residence",
        items: "Calacatta Oro (120 sq ft)",
        date: "Oct 24, 2025",
        status: OrderStatus::Processing,
        total: "$48,250",
    },
    Order {
        id: "ORD-8920",
        project: "Apex Tower",
        items: "Structural Glass (4 Panes)",
        date: "Oct 20, 2025",
        status: OrderStatus::Shipped,
        total: "$12,400",
    },
    Order {
        id: "ORD-8815",
        project: "Vanguard Estate",
        items: "Teak Flooring (500 sq ft)",
        date: "Oct 15, 2025",
        status: OrderStatus::Delivered,
        total: "$35,000",
    },
];

pub const TRANSACTIONS: &[Transaction] = &[
    Transaction {
        id: 1,
        kind: TransactionKind::Payment,
        counterparty: "Tuscany Stoneworks",
        amount: "-$42,500.00",
        date: "Today, 10:23 AM",
        status: "Completed",
    },
    Transaction {
        id: 2,
        kind: TransactionKind::Deposit,
        counterparty: "Sterling Main Account",
        amount: "+$150,000.00",
        date: "Yesterday",
        status: "Completed",
    },
    Transaction {
        id: 3,
        kind: TransactionKind::Escrow,
        counterparty: "Apex Materials",
        amount: "-$12,450.00",
        date: "Oct 24, 2025",
        status: "Locked",
    },
];

pub const SUPPLIERS: &[Supplier] = &[
    Supplier {
        name: "Tuscany Stoneworks",
        location: "Carrara, Italy",
        rating: 4.9,
        specialty: "Marble & Travertine",
        verified: true,
        image: "https://picsum.photos/100/100?random=1",
    },
    Supplier {
        name: "Apex Materials",
        location: "New York, USA",
        rating: 4.8,
        specialty: "Steel & Glass",
        verified: true,
        image: "https://picsum.photos/100/100?random=2",
    },
    Supplier {
        name: "Kyoto Timber Co.",
        location: "Kyoto, Japan",
        rating: 5.0,
        specialty: "Sustainable Wood",
        verified: true,
        image: "https://picsum.photos/100/100?random=3",
    },
    Supplier {
        name: "Nordic Slate",
        location: "Oslo, Norway",
        rating: 4.7,
        specialty: "Roofing Slate",
        verified: true,
        image: "https://picsum.photos/100/100?random=4",
    },
];

pub const FAQS: &[Faq] = &[
    Faq {
        question: "How does the AI matching algorithm work?",
        answer: "Our AI analyzes your technical specifications (PDF/CAD) and matches them against our global database of 50,000+ verified materials based on visual similarity, technical properties, and availability.",
    },
    Faq {
        question: "What is 'Procurement Certainty'?",
        answer: "It is our proprietary metric that combines supplier reliability, logistics risk, and material verification status into a single score.",
    },
    Faq {
        question: "Do I need a crypto wallet to use this?",
        answer: "While a wallet is created for you to track provenance, you can pay via standard wire transfer or credit card. We handle the blockchain complexity.",
    },
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_material_ids_unique() {
        let materials = materials();
        let mut ids: Vec<_> = materials.iter().map(|m| m.id.as_str()).collect();
        ids.sort();
        ids.dedup();
        assert_eq!(ids.len(), materials.len());
    }

    #[test]
    fn test_forecast_actuals_end_before_predictions() {
        let first_gap = COST_FORECAST.iter().position(|p| p.actual.is_none()).unwrap();
        assert!(COST_FORECAST[first_gap..].iter().all(|p| p.actual.is_none()));
    }

    #[test]
    fn test_only_last_provenance_step_pending() {
        let steps = provenance_steps();
        assert!(steps[..steps.len() - 1].iter().all(|s| s.verified));
        assert!(!steps.last().unwrap().verified);
    }
}
