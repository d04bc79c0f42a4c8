// Shelf domain model
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ShelfStatus {
    FullyStocked,
    LowStock,
    Empty,
    Misplaced,
}

impl ShelfStatus {
    pub fn label(&self) -> &'static str {
        match self {
            ShelfStatus::FullyStocked => "Fully Stocked",
            ShelfStatus::LowStock => "Low Stock",
            ShelfStatus::Empty => "Empty",
            ShelfStatus::Misplaced => "Misplaced Items",
        }
    }

    /// Badge classes consumed verbatim by the front-end.
    pub fn badge_class(&self) -> &'static str {
        match self {
            ShelfStatus::FullyStocked => "text-emerald-600 bg-emerald-50 border-emerald-200",
            ShelfStatus::LowStock => "text-amber-600 bg-amber-50 border-amber-200",
            ShelfStatus::Empty => "text-red-600 bg-red-50 border-red-200",
            ShelfStatus::Misplaced => "text-purple-600 bg-purple-50 border-purple-200",
        }
    }

    pub fn tone(&self) -> &'static str {
        match self {
            ShelfStatus::FullyStocked => "emerald",
            ShelfStatus::LowStock => "amber",
            ShelfStatus::Empty => "red",
            ShelfStatus::Misplaced => "purple",
        }
    }

    /// Parse the free-form status column of a telemetry row.
    /// The sheet is hand-fed, so "LOW STOCK", "low_stock" and
    /// "low-stock" all appear in practice.
    pub fn parse_sheet(raw: &str) -> Option<Self> {
        let normalized = raw.trim().to_lowercase().replace([' ', '_'], "-");
        match normalized.as_str() {
            "fully-stocked" | "stocked" | "full" => Some(ShelfStatus::FullyStocked),
            "low-stock" | "low" => Some(ShelfStatus::LowStock),
            "empty" | "empty-shelf" => Some(ShelfStatus::Empty),
            "misplaced" | "misplaced-items" => Some(ShelfStatus::Misplaced),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Shelf {
    pub id: String,
    pub zone: String,
    pub aisle: String,
    pub status: ShelfStatus,
    pub stock_level: u8,
    pub last_updated: DateTime<Utc>,
    pub image_url: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_sheet_variants() {
        assert_eq!(
            ShelfStatus::parse_sheet("FULLY STOCKED"),
            Some(ShelfStatus::FullyStocked)
        );
        assert_eq!(ShelfStatus::parse_sheet("low_stock"), Some(ShelfStatus::LowStock));
        assert_eq!(ShelfStatus::parse_sheet(" empty "), Some(ShelfStatus::Empty));
        assert_eq!(ShelfStatus::parse_sheet("MISPLACED"), Some(ShelfStatus::Misplaced));
        assert_eq!(ShelfStatus::parse_sheet("???"), None);
    }

    #[test]
    fn test_wire_encoding_is_kebab_case() {
        let json = serde_json::to_string(&ShelfStatus::FullyStocked).unwrap();
        assert_eq!(json, "\"fully-stocked\"");
    }

    #[test]
    fn test_labels() {
        assert_eq!(ShelfStatus::Misplaced.label(), "Misplaced Items");
        assert_eq!(ShelfStatus::Empty.tone(), "red");
    }
}
