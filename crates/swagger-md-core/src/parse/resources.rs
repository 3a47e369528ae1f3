use serde::{Deserialize, Serialize};

/// The resource listing: API metadata plus one entry per documented resource.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ResourceIndex {
    #[serde(rename = "apiVersion")]
    pub api_version: Option<String>,

    #[serde(rename = "basePath")]
    pub base_path: Option<String>,

    pub apis: Vec<ResourceEntry>,
}

/// A single resource in the listing, e.g. `/pets.{format}`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ResourceEntry {
    pub path: String,
    pub description: Option<String>,
}
