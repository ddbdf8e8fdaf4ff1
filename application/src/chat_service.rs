use domain::catalog::Catalog;
use domain::contact::ContactForm;
use domain::conversation::{Conversation, ConversationError, Message, Stage};
use domain::notice::Notifier;

/// Drives one visitor conversation and forwards the completion notice to the
/// notification surface. The service owns the conversation exclusively; there
/// is no cross-session state.
pub struct ChatService {
    conversation: Conversation,
    notifier: Box<dyn Notifier>,
}

impl ChatService {
    pub fn new(catalog: Catalog, notifier: Box<dyn Notifier>) -> Self {
        Self {
            conversation: Conversation::new(catalog),
            notifier,
        }
    }

    pub fn stage(&self) -> Stage {
        self.conversation.stage()
    }

    pub fn messages(&self) -> &[Message] {
        self.conversation.messages()
    }

    pub fn category_labels(&self) -> Vec<&'static str> {
        self.conversation.catalog().labels()
    }

    pub fn available_questions(&self) -> &'static [&'static str] {
        self.conversation.available_questions()
    }

    pub fn select_category(&mut self, label: &str) -> Result<(), ConversationError> {
        tracing::debug!(category = label, "category selected");
        self.conversation.select_category(label)
    }

    pub fn select_question(&mut self, question: &str) -> Result<(), ConversationError> {
        tracing::debug!(question, "question selected");
        self.conversation.select_question(question)
    }

    /// Accept the contact form and fire the lead-captured notice. The notice
    /// is fire-and-forget: no acknowledgement, no retry.
    pub fn submit_contact(&mut self, form: &ContactForm) -> Result<(), ConversationError> {
        let notice = self.conversation.submit_contact(form)?;
        tracing::info!(name = %form.name, email = %form.email, "lead captured");
        self.notifier.notify(&notice);
        Ok(())
    }
}
