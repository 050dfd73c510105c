use crate::client::{Client, Response};
use crate::error::Error;
use crate::query::CallOption;
use crate::types::{Group, GroupRequest, Video};

impl Client {
    /// Fetches the paginated list of groups matching the given options.
    pub async fn list_groups(
        &self,
        options: &[CallOption],
    ) -> Result<(Vec<Group>, Response), Error> {
        self.get_list("groups", options).await
    }

    /// Fetches a single group by its short name or numeric id.
    pub async fn get_group(
        &self,
        group: &str,
        options: &[CallOption],
    ) -> Result<(Group, Response), Error> {
        self.get_object(&format!("groups/{}", group), options).await
    }

    /// Creates a group owned by the authenticated user.
    pub async fn create_group(&self, request: &GroupRequest) -> Result<(Group, Response), Error> {
        self.post_object("groups", request).await
    }

    /// Deletes a group.
    pub async fn delete_group(&self, group: &str) -> Result<Response, Error> {
        self.delete(&format!("groups/{}", group)).await
    }

    /// Fetches the paginated list of videos shared to a group.
    pub async fn list_group_videos(
        &self,
        group: &str,
        options: &[CallOption],
    ) -> Result<(Vec<Video>, Response), Error> {
        self.get_list(&format!("groups/{}/videos", group), options)
            .await
    }

    /// Shares a video to a group.
    pub async fn add_group_video(&self, group: &str, video_id: i64) -> Result<Response, Error> {
        self.put_bodiless(&format!("groups/{}/videos/{}", group, video_id))
            .await
    }

    /// Removes a video from a group.
    pub async fn remove_group_video(&self, group: &str, video_id: i64) -> Result<Response, Error> {
        self.delete(&format!("groups/{}/videos/{}", group, video_id))
            .await
    }
}
