pub enum Msg {
    EmailChanged(String),
    NameChanged(String),
    PhoneChanged(String),
    ConsentToggled(bool),
    Submit,
    Accepted,
    Rejected(String),
    Dismiss,
    AutoClose,
}
