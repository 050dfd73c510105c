use std::path::Path;

use crate::client::{Client, Response};
use crate::error::Error;
use crate::query::CallOption;
use crate::types::{UploadVideoRequest, Video, VideoRequest};
use crate::users::user_path;

impl Client {
    /// Searches all public videos matching the given options.
    pub async fn list_videos(
        &self,
        options: &[CallOption],
    ) -> Result<(Vec<Video>, Response), Error> {
        self.get_list("videos", options).await
    }

    /// Fetches the paginated list of a user's videos, or of the
    /// authenticated user's when `user_id` is `None`.
    pub async fn list_user_videos(
        &self,
        user_id: Option<&str>,
        options: &[CallOption],
    ) -> Result<(Vec<Video>, Response), Error> {
        self.get_list(&user_path(user_id, "/videos"), options).await
    }

    /// Fetches a single video by its numeric id.
    pub async fn get_video(
        &self,
        video_id: i64,
        options: &[CallOption],
    ) -> Result<(Video, Response), Error> {
        self.get_object(&format!("videos/{}", video_id), options)
            .await
    }

    /// Updates fields on an existing video.
    pub async fn edit_video(
        &self,
        video_id: i64,
        request: &VideoRequest,
    ) -> Result<(Video, Response), Error> {
        self.patch_object(&format!("videos/{}", video_id), request)
            .await
    }

    /// Deletes a video.
    pub async fn delete_video(&self, video_id: i64) -> Result<Response, Error> {
        self.delete(&format!("videos/{}", video_id)).await
    }

    /// Uploads a video file for a user (the authenticated user when
    /// `user_id` is `None`).
    ///
    /// Creates a resumable upload ticket sized to the file, then delegates
    /// the byte transfer to the uploader configured on the client. The
    /// returned [`Video`] is the ticket's video record; transcoding status
    /// can be polled through [`get_video`](Client::get_video) afterwards.
    pub async fn upload_video(
        &self,
        user_id: Option<&str>,
        file: &Path,
    ) -> Result<(Video, Response), Error> {
        let uploader = self
            .uploader()
            .cloned()
            .ok_or(Error::UploaderNotConfigured)?;
        let size = std::fs::metadata(file)?.len();
        let request = UploadVideoRequest::tus(size);
        let (video, response): (Video, Response) = self
            .post_object(&user_path(user_id, "/videos"), &request)
            .await?;
        let upload_link = video
            .upload
            .as_ref()
            .and_then(|upload| upload.upload_link.clone())
            .ok_or(Error::MissingUploadLink)?;
        uploader.upload(self, &upload_link, file).await?;
        Ok((video, response))
    }
}
