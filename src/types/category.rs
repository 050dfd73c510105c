use chrono::{DateTime, Utc};
use serde::Deserialize;

use super::common::Pictures;

/// A curated browse category.
#[derive(Deserialize, Debug, Clone, Default)]
#[serde(default)]
pub struct Category {
    pub uri: String,
    pub name: String,
    pub link: String,
    pub top_level: bool,
    pub pictures: Option<Pictures>,
    pub last_video_featured_time: Option<DateTime<Utc>>,
    pub parent: Option<SubCategory>,
    pub subcategories: Vec<SubCategory>,
    pub resource_key: String,
}

/// A category reference nested under a top-level category.
#[derive(Deserialize, Debug, Clone, Default)]
#[serde(default)]
pub struct SubCategory {
    pub uri: String,
    pub name: String,
    pub link: String,
}
