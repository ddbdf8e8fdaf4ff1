//! Cross-layer test support.

use std::sync::{Arc, Mutex};

use domain::notice::{Notice, Notifier};

/// Notifier that records every notice it is shown. Clones share the same
/// underlying log, so a handle kept by the test observes what the boxed
/// copy received.
#[derive(Clone, Default)]
pub struct RecordingNotifier {
    notices: Arc<Mutex<Vec<Notice>>>,
}

impl RecordingNotifier {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn notices(&self) -> Vec<Notice> {
        self.notices.lock().unwrap().clone()
    }
}

impl Notifier for RecordingNotifier {
    fn notify(&self, notice: &Notice) {
        self.notices.lock().unwrap().push(notice.clone());
    }
}
