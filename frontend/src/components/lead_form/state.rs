//! Form state for the lead capture modal.

use super::helpers::FieldErrors;

/// State container for the capture form.
///
/// Fields are `pub` because they are accessed by the `view` and `update`
/// modules.
pub struct LeadFormModal {
    pub email: String,
    pub name: String,
    /// Optional; submitted only when non-empty.
    pub phone: String,
    pub consent: bool,
    pub errors: FieldErrors,
    /// A submission is in flight; inputs and the cancel button are locked.
    pub loading: bool,
    /// Shows the success panel instead of the form. Set on acceptance and
    /// cleared again when the modal closes, so a later reopen (stale marker,
    /// expired cookie) lands back on the form.
    pub submitted: bool,
}

impl LeadFormModal {
    pub fn new() -> Self {
        Self {
            email: String::new(),
            name: String::new(),
            phone: String::new(),
            consent: false,
            errors: FieldErrors::default(),
            loading: false,
            submitted: false,
        }
    }
}
