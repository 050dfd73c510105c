use crate::client::{Client, Response};
use crate::error::Error;
use crate::query::CallOption;
use crate::types::{Channel, ChannelRequest, Video};

impl Client {
    /// Fetches the paginated list of channels matching the given options.
    pub async fn list_channels(
        &self,
        options: &[CallOption],
    ) -> Result<(Vec<Channel>, Response), Error> {
        self.get_list("channels", options).await
    }

    /// Fetches a single channel by its short name or numeric id.
    pub async fn get_channel(
        &self,
        channel: &str,
        options: &[CallOption],
    ) -> Result<(Channel, Response), Error> {
        self.get_object(&format!("channels/{}", channel), options)
            .await
    }

    /// Creates a channel owned by the authenticated user.
    pub async fn create_channel(
        &self,
        request: &ChannelRequest,
    ) -> Result<(Channel, Response), Error> {
        self.post_object("channels", request).await
    }

    /// Updates fields on an existing channel.
    pub async fn edit_channel(
        &self,
        channel: &str,
        request: &ChannelRequest,
    ) -> Result<(Channel, Response), Error> {
        self.patch_object(&format!("channels/{}", channel), request)
            .await
    }

    /// Deletes a channel.
    pub async fn delete_channel(&self, channel: &str) -> Result<Response, Error> {
        self.delete(&format!("channels/{}", channel)).await
    }

    /// Fetches the paginated list of videos in a channel.
    pub async fn list_channel_videos(
        &self,
        channel: &str,
        options: &[CallOption],
    ) -> Result<(Vec<Video>, Response), Error> {
        self.get_list(&format!("channels/{}/videos", channel), options)
            .await
    }

    /// Adds a video to a channel.
    pub async fn add_channel_video(
        &self,
        channel: &str,
        video_id: i64,
    ) -> Result<Response, Error> {
        self.put_bodiless(&format!("channels/{}/videos/{}", channel, video_id))
            .await
    }

    /// Removes a video from a channel.
    pub async fn remove_channel_video(
        &self,
        channel: &str,
        video_id: i64,
    ) -> Result<Response, Error> {
        self.delete(&format!("channels/{}/videos/{}", channel, video_id))
            .await
    }
}
