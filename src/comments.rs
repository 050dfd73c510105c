use crate::client::{Client, Response};
use crate::error::Error;
use crate::query::CallOption;
use crate::types::{Comment, CommentRequest};

impl Client {
    /// Fetches the paginated list of comments on a video.
    pub async fn list_video_comments(
        &self,
        video_id: i64,
        options: &[CallOption],
    ) -> Result<(Vec<Comment>, Response), Error> {
        self.get_list(&format!("videos/{}/comments", video_id), options)
            .await
    }

    /// Posts a comment on a video.
    pub async fn add_video_comment(
        &self,
        video_id: i64,
        request: &CommentRequest,
    ) -> Result<(Comment, Response), Error> {
        self.post_object(&format!("videos/{}/comments", video_id), request)
            .await
    }

    /// Deletes a comment from a video.
    pub async fn delete_video_comment(
        &self,
        video_id: i64,
        comment_id: i64,
    ) -> Result<Response, Error> {
        self.delete(&format!("videos/{}/comments/{}", video_id, comment_id))
            .await
    }
}
