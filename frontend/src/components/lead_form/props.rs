//! Properties for the lead capture modal.

use yew::prelude::*;

/// Configuration passed by the parent that owns the modal.
#[derive(Properties, PartialEq, Clone)]
pub struct LeadFormProps {
    /// Whether the modal is shown. The parent owns this flag; the modal
    /// requests changes through the callbacks below.
    pub open: bool,
    /// Invoked when the user dismisses the modal, and again after the
    /// success panel's auto-close delay.
    pub on_close: Callback<()>,
    /// Invoked once the intake endpoint has accepted the submission. The
    /// parent typically schedules its download retry on this.
    pub on_success: Callback<()>,
}
