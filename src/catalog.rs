//! Catalog Utilities
//!
//! Linear filters over the in-memory mock tables and the two mutations the
//! results screen may apply to its material list.

use crate::mock_data::{FAQS, ORDERS, SUPPLIERS};
use crate::models::{Faq, Material, Order, OrderStatus, Project, ProjectStatus, Supplier};

/// Select value meaning "no filter"
pub const ALL_FILTER: &str = "All";

/// Materials whose category matches `category`, or all of them for "All"
pub fn filter_materials(materials: &[Material], category: &str) -> Vec<Material> {
    materials
        .iter()
        .filter(|m| category == ALL_FILTER || m.category == category)
        .cloned()
        .collect()
}

/// Projects with the given status; `None` keeps every project
pub fn filter_projects(projects: &[Project], status: Option<ProjectStatus>) -> Vec<Project> {
    projects
        .iter()
        .filter(|p| status.map_or(true, |s| p.status == s))
        .cloned()
        .collect()
}

/// Distinct categories in first-seen order, for the filter dropdown
pub fn categories_of(materials: &[Material]) -> Vec<String> {
    let mut seen: Vec<String> = Vec::new();
    for m in materials {
        if !seen.contains(&m.category) {
            seen.push(m.category.clone());
        }
    }
    seen
}

/// Swap the image of material `id`. Returns false if no such material.
pub fn replace_image(materials: &mut [Material], id: &str, image_url: String) -> bool {
    match materials.iter_mut().find(|m| m.id == id) {
        Some(material) => {
            material.image_url = image_url;
            true
        }
        None => false,
    }
}

/// Newly generated materials go to the top of the list
pub fn prepend(materials: &mut Vec<Material>, material: Material) {
    materials.insert(0, material);
}

/// Case-insensitive match on supplier name, location or specialty
pub fn search_suppliers(query: &str) -> Vec<&'static Supplier> {
    let query = query.trim().to_lowercase();
    SUPPLIERS
        .iter()
        .filter(|s| {
            query.is_empty()
                || s.name.to_lowercase().contains(&query)
                || s.location.to_lowercase().contains(&query)
                || s.specialty.to_lowercase().contains(&query)
        })
        .collect()
}

pub fn search_faqs(query: &str) -> Vec<&'static Faq> {
    let query = query.trim().to_lowercase();
    FAQS.iter()
        .filter(|f| {
            query.is_empty() || f.question.to_lowercase().contains(&query) || f.answer.to_lowercase().contains(&query)
        })
        .collect()
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OrdersTab {
    Active,
    History,
    Issues,
}

impl OrdersTab {
    pub const ALL: [OrdersTab; 3] = [OrdersTab::Active, OrdersTab::History, OrdersTab::Issues];

    pub fn label(&self) -> &'static str {
        match self {
            OrdersTab::Active => "Active Orders",
            OrdersTab::History => "History",
            OrdersTab::Issues => "Issues",
        }
    }

    pub fn includes(&self, status: OrderStatus) -> bool {
        match self {
            OrdersTab::Active => matches!(status, OrderStatus::Processing | OrderStatus::Shipped),
            OrdersTab::History => status == OrderStatus::Delivered,
            // No mock order is in dispute
            OrdersTab::Issues => false,
        }
    }
}

pub fn orders_for_tab(tab: OrdersTab) -> Vec<&'static Order> {
    ORDERS.iter().filter(|o| tab.includes(o.status)).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::mock_data;

    fn with_generated() -> Vec<Material> {
        let mut materials = mock_data::materials();
        let mut wood = materials[0].clone();
        wood.id = "gen-1".to_string();
        wood.category = "Exotic Wood".to_string();
        prepend(&mut materials, wood);
        materials
    }

    #[test]
    fn test_filter_materials_by_category() {
        let materials = with_generated();
        let stone = filter_materials(&materials, "Natural Stone");
        assert_eq!(stone.len(), 3);
        assert!(stone.iter().all(|m| m.category == "Natural Stone"));

        let wood = filter_materials(&materials, "Exotic Wood");
        assert_eq!(wood.len(), 1);
        assert_eq!(wood[0].id, "gen-1");

        assert!(filter_materials(&materials, "Ceramic").is_empty());
    }

    #[test]
    fn test_filter_all_returns_everything() {
        let materials = with_generated();
        assert_eq!(filter_materials(&materials, ALL_FILTER), materials);

        let projects = mock_data::projects();
        assert_eq!(filter_projects(&projects, None), projects);
    }

    #[test]
    fn test_filter_projects_by_status() {
        let projects = mock_data::projects();
        for status in ProjectStatus::ALL {
            let filtered = filter_projects(&projects, Some(status));
            assert_eq!(filtered.len(), 1);
            assert_eq!(filtered[0].status, status);
        }
    }

    #[test]
    fn test_categories_of_keeps_first_seen_order() {
        assert_eq!(categories_of(&with_generated()), vec!["Exotic Wood", "Natural Stone"]);
    }

    #[test]
    fn test_replace_image() {
        let mut materials = mock_data::materials();
        assert!(replace_image(&mut materials, "m2", "data:image/png;base64,AAAA".to_string()));
        assert_eq!(materials[1].image_url, "data:image/png;base64,AAAA");
        assert_eq!(materials[0], mock_data::materials()[0]);

        assert!(!replace_image(&mut materials, "missing", "x".to_string()));
    }

    #[test]
    fn test_prepend_puts_material_first() {
        let materials = with_generated();
        assert_eq!(materials.len(), 4);
        assert_eq!(materials[0].id, "gen-1");
    }

    #[test]
    fn test_search_suppliers() {
        assert_eq!(search_suppliers("").len(), SUPPLIERS.len());
        let hits = search_suppliers("  JAPAN ");
        assert_eq!(hits.len(), 1);
        assert_eq!(hits[0].name, "Kyoto Timber Co.");
        assert_eq!(search_suppliers("marble")[0].name, "Tuscany Stoneworks");
        assert!(search_suppliers("titanium").is_empty());
    }

    #[test]
    fn test_search_faqs() {
        assert_eq!(search_faqs("wallet").len(), 1);
        assert_eq!(search_faqs("").len(), FAQS.len());
    }

    #[test]
    fn test_orders_tabs() {
        let active: Vec<_> = orders_for_tab(OrdersTab::Active).iter().map(|o| o.id).collect();
        assert_eq!(active, vec!["ORD-8921", "ORD-8920"]);
        assert_eq!(orders_for_tab(OrdersTab::History).len(), 1);
        assert!(orders_for_tab(OrdersTab::Issues).is_empty());
    }
}
