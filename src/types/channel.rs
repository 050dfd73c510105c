use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::common::{Pictures, Privacy};
use super::user::User;

/// A curated channel of videos.
#[derive(Deserialize, Debug, Clone, Default)]
#[serde(default)]
pub struct Channel {
    pub uri: String,
    pub name: String,
    pub description: Option<String>,
    pub link: String,
    pub created_time: Option<DateTime<Utc>>,
    pub modified_time: Option<DateTime<Utc>>,
    pub user: Option<User>,
    pub pictures: Option<Pictures>,
    pub header: Option<Pictures>,
    pub privacy: Option<Privacy>,
    pub resource_key: String,
}

/// Fields accepted when creating or editing a channel. Unset fields are left
/// untouched by the server.
#[derive(Serialize, Debug, Clone, Default)]
pub struct ChannelRequest {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub privacy: Option<String>,
}
