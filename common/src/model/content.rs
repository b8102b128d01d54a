use std::fmt;

use serde::{Deserialize, Serialize};

/// Where a content payload actually came from.
///
/// Every CMS-backed response carries this tag so a fixture fallback is
/// visible to callers instead of masquerading as live data. `Fixture` means
/// the CMS was unreachable (or misconfigured) and the built-in seed catalog
/// was served in its place.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ContentSource {
    Live,
    Fixture,
}

impl fmt::Display for ContentSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ContentSource::Live => f.write_str("live"),
            ContentSource::Fixture => f.write_str("fixture"),
        }
    }
}
