use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::common::Pictures;

/// A Vimeo account.
#[derive(Deserialize, Debug, Clone, Default)]
#[serde(default)]
pub struct User {
    pub uri: String,
    pub name: String,
    pub link: String,
    pub location: Option<String>,
    pub bio: Option<String>,
    pub created_time: Option<DateTime<Utc>>,
    /// Account tier: `basic`, `plus`, `pro`, `business`, or `live_pro`.
    pub account: String,
    pub pictures: Option<Pictures>,
    pub websites: Vec<Website>,
    pub resource_key: String,
}

#[derive(Deserialize, Debug, Clone, Default)]
#[serde(default)]
pub struct Website {
    pub name: Option<String>,
    pub link: String,
    pub description: Option<String>,
}

/// Profile fields accepted when editing a user.
#[derive(Serialize, Debug, Clone, Default)]
pub struct UserRequest {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub location: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub bio: Option<String>,
}
