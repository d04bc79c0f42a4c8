// AI insight cards - static dataset, never mutated at runtime
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AiInsight {
    pub id: String,
    pub timestamp: DateTime<Utc>,
    pub issue: String,
    pub confidence: f32,
    pub shelf_id: String,
    pub before_image_url: String,
    pub after_image_url: String,
    pub resolved: bool,
}
