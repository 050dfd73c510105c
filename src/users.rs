use crate::client::{Client, Response};
use crate::error::Error;
use crate::query::CallOption;
use crate::types::{User, UserRequest};

/// Resolves a user-scoped path: a concrete id maps to `users/{id}`, `None`
/// maps to the authenticated `me` scope.
pub(crate) fn user_path(user_id: Option<&str>, suffix: &str) -> String {
    match user_id {
        Some(id) => format!("users/{}{}", id, suffix),
        None => format!("me{}", suffix),
    }
}

impl Client {
    /// Searches users matching the given options.
    pub async fn search_users(
        &self,
        options: &[CallOption],
    ) -> Result<(Vec<User>, Response), Error> {
        self.get_list("users", options).await
    }

    /// Fetches a user, or the authenticated user when `user_id` is `None`.
    pub async fn get_user(
        &self,
        user_id: Option<&str>,
        options: &[CallOption],
    ) -> Result<(User, Response), Error> {
        self.get_object(&user_path(user_id, ""), options).await
    }

    /// Updates profile fields on a user, or on the authenticated user when
    /// `user_id` is `None`.
    pub async fn edit_user(
        &self,
        user_id: Option<&str>,
        request: &UserRequest,
    ) -> Result<(User, Response), Error> {
        self.patch_object(&user_path(user_id, ""), request).await
    }
}
