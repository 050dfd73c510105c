use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::common::{Pictures, Privacy};
use super::user::User;

/// A showcase of videos curated by a user.
#[derive(Deserialize, Debug, Clone, Default)]
#[serde(default)]
pub struct Album {
    pub uri: String,
    pub name: String,
    pub description: Option<String>,
    pub link: String,
    /// Combined duration of the album's videos, in seconds.
    pub duration: i64,
    pub created_time: Option<DateTime<Utc>>,
    pub modified_time: Option<DateTime<Utc>>,
    pub user: Option<User>,
    pub pictures: Option<Pictures>,
    pub privacy: Option<Privacy>,
    pub resource_key: String,
}

/// Fields accepted when creating or editing an album.
#[derive(Serialize, Debug, Clone, Default)]
pub struct AlbumRequest {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    /// `anybody` or `password`; the latter requires `password` to be set.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub privacy: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub password: Option<String>,
}
