// Shelf monitoring service - Use case for the shelves section
use crate::application::store::DashboardStore;
use crate::domain::shelf::{Shelf, ShelfStatus};
use serde::Serialize;
use std::sync::Arc;

#[derive(Debug, Clone, Default)]
pub struct ShelfFilter {
    pub zone: Option<String>,
    pub status: Option<ShelfStatus>,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ShelfCounts {
    pub fully_stocked: usize,
    pub low_stock: usize,
    pub empty: usize,
    pub misplaced: usize,
}

/// A shelf plus the display strings the cards render with.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ShelfView {
    #[serde(flatten)]
    pub shelf: Shelf,
    pub status_label: &'static str,
    pub badge_class: &'static str,
    pub stock_bar_class: &'static str,
}

impl From<Shelf> for ShelfView {
    fn from(shelf: Shelf) -> Self {
        Self {
            status_label: shelf.status.label(),
            badge_class: shelf.status.badge_class(),
            stock_bar_class: crate::domain::display::stock_level_class(shelf.stock_level),
            shelf,
        }
    }
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ShelvesPayload {
    pub shelves: Vec<ShelfView>,
    pub counts: ShelfCounts,
    pub zones: Vec<String>,
}

#[derive(Clone)]
pub struct ShelfService {
    store: Arc<DashboardStore>,
}

impl ShelfService {
    pub fn new(store: Arc<DashboardStore>) -> Self {
        Self { store }
    }

    /// Counts and the zone list always cover the full shelf set; only
    /// the listing itself is filtered.
    pub async fn list(&self, filter: ShelfFilter) -> ShelvesPayload {
        let state = self.store.snapshot().await;

        let counts = ShelfCounts {
            fully_stocked: count_status(&state.shelves, ShelfStatus::FullyStocked),
            low_stock: count_status(&state.shelves, ShelfStatus::LowStock),
            empty: count_status(&state.shelves, ShelfStatus::Empty),
            misplaced: count_status(&state.shelves, ShelfStatus::Misplaced),
        };

        let mut zones: Vec<String> = state.shelves.iter().map(|s| s.zone.clone()).collect();
        zones.sort();
        zones.dedup();

        let shelves = state
            .shelves
            .into_iter()
            .filter(|s| filter.zone.as_ref().is_none_or(|z| &s.zone == z))
            .filter(|s| filter.status.is_none_or(|st| s.status == st))
            .map(ShelfView::from)
            .collect();

        ShelvesPayload {
            shelves,
            counts,
            zones,
        }
    }
}

fn count_status(shelves: &[Shelf], status: ShelfStatus) -> usize {
    shelves.iter().filter(|s| s.status == status).count()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::infrastructure::fixtures;

    #[tokio::test]
    async fn test_unfiltered_listing() {
        let store = Arc::new(DashboardStore::new(fixtures::demo_state()));
        let payload = ShelfService::new(store).list(ShelfFilter::default()).await;

        assert_eq!(payload.shelves.len(), 8);
        assert_eq!(payload.counts.fully_stocked, 3);
        assert_eq!(payload.counts.low_stock, 2);
        assert_eq!(payload.counts.empty, 2);
        assert_eq!(payload.counts.misplaced, 1);
        assert_eq!(payload.zones, vec!["Zone A", "Zone B", "Zone C", "Zone D"]);
    }

    #[tokio::test]
    async fn test_zone_and_status_filters_compose() {
        let store = Arc::new(DashboardStore::new(fixtures::demo_state()));
        let service = ShelfService::new(store);

        let zone_a = service
            .list(ShelfFilter {
                zone: Some("Zone A".to_string()),
                status: None,
            })
            .await;
        assert_eq!(zone_a.shelves.len(), 3);
        assert!(zone_a.shelves.iter().all(|v| v.shelf.zone == "Zone A"));

        let empty_in_a = service
            .list(ShelfFilter {
                zone: Some("Zone A".to_string()),
                status: Some(ShelfStatus::Empty),
            })
            .await;
        assert_eq!(empty_in_a.shelves.len(), 1);
        assert_eq!(empty_in_a.shelves[0].shelf.id, "SH-A003");
        assert_eq!(empty_in_a.shelves[0].status_label, "Empty");
        assert_eq!(empty_in_a.shelves[0].stock_bar_class, "bg-red-500");

        // counts stay global under a filter
        assert_eq!(empty_in_a.counts.empty, 2);
    }
}
