//! Runtime state of the download trigger.

/// State container for one download button.
///
/// Both flags false is the rest state. `downloading` guards against double
/// clicks while a request is in flight; `show_capture` mounts the lead
/// capture modal.
pub struct DownloadButton {
    /// A request to the download issuer is in flight.
    pub downloading: bool,
    /// The capture modal is open.
    pub show_capture: bool,
}

impl DownloadButton {
    pub fn new() -> Self {
        Self {
            downloading: false,
            show_capture: false,
        }
    }
}
