use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::common::{Pictures, Privacy, Stats};
use super::tag::Tag;
use super::user::User;

/// A video.
#[derive(Deserialize, Debug, Clone, Default)]
#[serde(default)]
pub struct Video {
    pub uri: String,
    pub name: String,
    pub description: Option<String>,
    pub link: String,
    /// Duration in seconds.
    pub duration: i64,
    pub width: i64,
    pub height: i64,
    pub language: Option<String>,
    pub created_time: Option<DateTime<Utc>>,
    pub modified_time: Option<DateTime<Utc>>,
    pub release_time: Option<DateTime<Utc>>,
    pub privacy: Option<Privacy>,
    pub pictures: Option<Pictures>,
    pub tags: Vec<Tag>,
    pub stats: Option<Stats>,
    pub user: Option<User>,
    /// Transcode status: `available`, `uploading`, `transcoding`, or an error state.
    pub status: Option<String>,
    pub upload: Option<Upload>,
    pub resource_key: String,
}

/// Upload state attached to a video created through an upload ticket.
#[derive(Deserialize, Debug, Clone, Default)]
#[serde(default)]
pub struct Upload {
    pub status: String,
    pub approach: Option<String>,
    pub size: Option<i64>,
    pub upload_link: Option<String>,
    pub redirect_url: Option<String>,
    pub link: Option<String>,
}

/// Fields accepted when editing a video.
#[derive(Serialize, Debug, Clone, Default)]
pub struct VideoRequest {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub license: Option<String>,
}

/// Body for creating an upload ticket under a user's videos collection.
#[derive(Serialize, Debug, Clone)]
pub struct UploadVideoRequest {
    pub upload: UploadApproach,
}

#[derive(Serialize, Debug, Clone)]
pub struct UploadApproach {
    pub approach: String,
    pub size: u64,
}

impl UploadVideoRequest {
    /// Ticket request for a resumable (tus) upload of `size` bytes.
    pub fn tus(size: u64) -> Self {
        Self {
            upload: UploadApproach {
                approach: "tus".to_string(),
                size,
            },
        }
    }
}
