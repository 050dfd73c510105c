use serde::Deserialize;

/// A tag attached to videos.
#[derive(Deserialize, Debug, Clone, Default)]
#[serde(default)]
pub struct Tag {
    pub uri: String,
    pub name: String,
    pub tag: String,
    pub canonical: String,
    pub resource_key: String,
}
