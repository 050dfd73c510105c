use crate::client::{Client, Response};
use crate::error::Error;
use crate::query::CallOption;
use crate::types::{Album, AlbumRequest, Video};
use crate::users::user_path;

impl Client {
    /// Fetches the paginated list of a user's albums, or of the
    /// authenticated user's when `user_id` is `None`.
    pub async fn list_user_albums(
        &self,
        user_id: Option<&str>,
        options: &[CallOption],
    ) -> Result<(Vec<Album>, Response), Error> {
        self.get_list(&user_path(user_id, "/albums"), options).await
    }

    /// Fetches a single album.
    pub async fn get_album(
        &self,
        user_id: Option<&str>,
        album_id: i64,
        options: &[CallOption],
    ) -> Result<(Album, Response), Error> {
        self.get_object(&user_path(user_id, &format!("/albums/{}", album_id)), options)
            .await
    }

    /// Creates an album for a user.
    pub async fn create_album(
        &self,
        user_id: Option<&str>,
        request: &AlbumRequest,
    ) -> Result<(Album, Response), Error> {
        self.post_object(&user_path(user_id, "/albums"), request)
            .await
    }

    /// Updates fields on an existing album.
    pub async fn edit_album(
        &self,
        user_id: Option<&str>,
        album_id: i64,
        request: &AlbumRequest,
    ) -> Result<(Album, Response), Error> {
        self.patch_object(&user_path(user_id, &format!("/albums/{}", album_id)), request)
            .await
    }

    /// Deletes an album.
    pub async fn delete_album(
        &self,
        user_id: Option<&str>,
        album_id: i64,
    ) -> Result<Response, Error> {
        self.delete(&user_path(user_id, &format!("/albums/{}", album_id)))
            .await
    }

    /// Fetches the paginated list of videos in an album.
    pub async fn list_album_videos(
        &self,
        user_id: Option<&str>,
        album_id: i64,
        options: &[CallOption],
    ) -> Result<(Vec<Video>, Response), Error> {
        self.get_list(
            &user_path(user_id, &format!("/albums/{}/videos", album_id)),
            options,
        )
        .await
    }

    /// Adds a video to an album.
    pub async fn add_album_video(
        &self,
        user_id: Option<&str>,
        album_id: i64,
        video_id: i64,
    ) -> Result<Response, Error> {
        self.put_bodiless(&user_path(
            user_id,
            &format!("/albums/{}/videos/{}", album_id, video_id),
        ))
        .await
    }

    /// Removes a video from an album.
    pub async fn remove_album_video(
        &self,
        user_id: Option<&str>,
        album_id: i64,
        video_id: i64,
    ) -> Result<Response, Error> {
        self.delete(&user_path(
            user_id,
            &format!("/albums/{}/videos/{}", album_id, video_id),
        ))
        .await
    }
}
