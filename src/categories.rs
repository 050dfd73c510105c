use crate::client::{Client, Response};
use crate::error::Error;
use crate::query::CallOption;
use crate::types::{Category, Video};

impl Client {
    /// Fetches the paginated list of curated categories.
    pub async fn list_categories(
        &self,
        options: &[CallOption],
    ) -> Result<(Vec<Category>, Response), Error> {
        self.get_list("categories", options).await
    }

    /// Fetches a single category by its short name.
    pub async fn get_category(
        &self,
        category: &str,
        options: &[CallOption],
    ) -> Result<(Category, Response), Error> {
        self.get_object(&format!("categories/{}", category), options)
            .await
    }

    /// Fetches the paginated list of videos featured in a category.
    pub async fn list_category_videos(
        &self,
        category: &str,
        options: &[CallOption],
    ) -> Result<(Vec<Video>, Response), Error> {
        self.get_list(&format!("categories/{}/videos", category), options)
            .await
    }
}
