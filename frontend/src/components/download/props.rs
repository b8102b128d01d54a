//! Properties for the download trigger.

use common::model::syllabus::Level;
use yew::prelude::*;

/// Configuration passed by the syllabus card that owns the button.
#[derive(Properties, PartialEq, Clone)]
pub struct DownloadProps {
    /// Which paper this button downloads. The server derives the object key
    /// from this code alone.
    pub level: Level,
    /// Paper title shown in the button label.
    pub title: String,
}
