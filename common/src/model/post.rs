use serde::{Deserialize, Serialize};

/// A blog article as described by the CMS.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BlogPost {
    pub id: u32,
    pub title: String,
    pub slug: String,
    pub excerpt: String,
    pub content: String,
    #[serde(rename = "publishedAt")]
    pub published_at: String,
}
