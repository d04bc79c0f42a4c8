// Warehouse domain model
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Warehouse {
    pub id: String,
    pub name: String,
    pub location: String,
    pub total_shelves: u32,
    pub system_health: u8,
}

impl Warehouse {
    pub fn health_tone(&self) -> &'static str {
        if self.system_health > 80 {
            "emerald"
        } else if self.system_health > 60 {
            "amber"
        } else {
            "red"
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_health_tone_cutoffs() {
        let mut wh = Warehouse {
            id: "wh-001".to_string(),
            name: "Central Distribution Hub".to_string(),
            location: "Building A, Floor 1".to_string(),
            total_shelves: 248,
            system_health: 94,
        };
        assert_eq!(wh.health_tone(), "emerald");
        wh.system_health = 70;
        assert_eq!(wh.health_tone(), "amber");
        wh.system_health = 60;
        assert_eq!(wh.health_tone(), "red");
    }
}
