use crate::client::{Client, Response};
use crate::error::Error;
use crate::query::CallOption;
use crate::types::{Tag, Video};

impl Client {
    /// Fetches a single tag by its canonical word.
    pub async fn get_tag(
        &self,
        word: &str,
        options: &[CallOption],
    ) -> Result<(Tag, Response), Error> {
        self.get_object(&format!("tags/{}", word), options).await
    }

    /// Fetches the paginated list of videos carrying a tag.
    pub async fn list_tag_videos(
        &self,
        word: &str,
        options: &[CallOption],
    ) -> Result<(Vec<Video>, Response), Error> {
        self.get_list(&format!("tags/{}/videos", word), options)
            .await
    }
}
