use common::responses::DownloadGrant;

pub enum Msg {
    Clicked,
    GrantReady(DownloadGrant),
    LeadRequired,
    AttemptFailed(String),
    LeadCaptured,
    CaptureDismissed,
    Retry,
}
