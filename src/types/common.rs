use serde::Deserialize;

/// Picture set attached to users, videos, categories, and channels.
#[derive(Deserialize, Debug, Clone, Default)]
#[serde(default)]
pub struct Pictures {
    pub uri: Option<String>,
    pub active: bool,
    #[serde(rename = "type")]
    pub kind: String,
    pub sizes: Vec<PictureSize>,
    pub resource_key: String,
}

#[derive(Deserialize, Debug, Clone, Default)]
#[serde(default)]
pub struct PictureSize {
    pub width: i64,
    pub height: i64,
    pub link: String,
    pub link_with_play_button: Option<String>,
}

/// Privacy settings. Endpoints omit the fields they do not use: channels
/// only carry `view`, videos carry the full set.
#[derive(Deserialize, Debug, Clone, Default)]
#[serde(default)]
pub struct Privacy {
    pub view: Option<String>,
    pub embed: Option<String>,
    pub download: bool,
    pub add: bool,
    pub comments: Option<String>,
}

#[derive(Deserialize, Debug, Clone, Default)]
#[serde(default)]
pub struct Stats {
    pub plays: i64,
}
