use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::user::User;

/// A comment left on a video.
#[derive(Deserialize, Debug, Clone, Default)]
#[serde(default)]
pub struct Comment {
    pub uri: String,
    pub text: String,
    pub created_on: Option<DateTime<Utc>>,
    pub user: Option<User>,
    pub resource_key: String,
}

/// Body for posting a comment.
#[derive(Serialize, Debug, Clone, Default)]
pub struct CommentRequest {
    pub text: String,
}
