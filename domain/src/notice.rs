/// Transient notice emitted when a lead is captured.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notice {
    pub title: String,
    pub description: String,
}

impl Notice {
    pub fn lead_captured() -> Self {
        Self {
            title: "Contact Information Received".to_string(),
            description: "Our team will reach out to you soon!".to_string(),
        }
    }
}

/// Surface that can show a transient notice. Fire-and-forget: callers never
/// wait on or inspect the outcome.
pub trait Notifier {
    fn notify(&self, notice: &Notice);
}
