use serde::Serialize;
use thiserror::Error;

use crate::catalog::Catalog;
use crate::contact::ContactForm;
use crate::notice::Notice;

pub const GREETING: &str = "Thanks For Reaching Us! What Would You Like To Know?";

const ASK_CONTACT: &str = "I'd love to discuss this with you in detail! Please share your \
                           contact information so our team can reach out to you shortly.";

/// Phases of the scripted conversation, in the only order they can occur.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Stage {
    Category,
    Questions,
    Contact,
    Complete,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Role {
    Bot,
    User,
}

/// One entry in the transcript. The transcript is append-only: entries are
/// never edited or removed once pushed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Message {
    pub role: Role,
    pub text: String,
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConversationError {
    #[error("operation is not accepted in the {0:?} stage")]
    WrongStage(Stage),
    #[error("unknown category: {0}")]
    UnknownCategory(String),
    #[error("question is not part of the {category} script: {question}")]
    UnknownQuestion { category: String, question: String },
    #[error("contact form is incomplete")]
    IncompleteContact,
}

/// A single visitor's scripted conversation. Owns its transcript and stage
/// exclusively; progression is strictly linear (category -> questions ->
/// contact -> complete) with no reset and no backward transition. Rejected
/// operations leave the state untouched.
#[derive(Debug)]
pub struct Conversation {
    catalog: Catalog,
    stage: Stage,
    selected_category: Option<&'static str>,
    messages: Vec<Message>,
}

impl Conversation {
    pub fn new(catalog: Catalog) -> Self {
        Self {
            catalog,
            stage: Stage::Category,
            selected_category: None,
            messages: vec![Message {
                role: Role::Bot,
                text: GREETING.to_string(),
            }],
        }
    }

    pub fn stage(&self) -> Stage {
        self.stage
    }

    pub fn selected_category(&self) -> Option<&'static str> {
        self.selected_category
    }

    pub fn messages(&self) -> &[Message] {
        &self.messages
    }

    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    /// Questions on offer in the `Questions` stage; empty in every other
    /// stage before a category is chosen.
    pub fn available_questions(&self) -> &'static [&'static str] {
        match self.selected_category {
            Some(label) => self.catalog.questions_for(label).unwrap_or(&[]),
            None => &[],
        }
    }

    /// Record the visitor's topic and move on to its scripted questions.
    pub fn select_category(&mut self, label: &str) -> Result<(), ConversationError> {
        if self.stage != Stage::Category {
            return Err(ConversationError::WrongStage(self.stage));
        }
        let entry = self
            .catalog
            .entry(label)
            .ok_or_else(|| ConversationError::UnknownCategory(label.to_string()))?;

        self.selected_category = Some(entry.label);
        self.push(Role::User, entry.label.to_string());
        self.push(
            Role::Bot,
            format!(
                "Great! I can help you with {}. Here are some common questions:",
                entry.label
            ),
        );
        self.stage = Stage::Questions;
        Ok(())
    }

    /// Echo the chosen question and ask for contact details.
    pub fn select_question(&mut self, question: &str) -> Result<(), ConversationError> {
        if self.stage != Stage::Questions {
            return Err(ConversationError::WrongStage(self.stage));
        }
        let category = self.selected_category.unwrap_or_default();
        if !self.available_questions().iter().any(|q| *q == question) {
            return Err(ConversationError::UnknownQuestion {
                category: category.to_string(),
                question: question.to_string(),
            });
        }

        self.push(Role::User, question.to_string());
        self.push(Role::Bot, ASK_CONTACT.to_string());
        self.stage = Stage::Contact;
        Ok(())
    }

    /// Accept a complete contact form, thank the visitor, and finish the
    /// conversation. Returns the notice the caller should hand to the
    /// notification surface. An incomplete form changes nothing.
    pub fn submit_contact(&mut self, form: &ContactForm) -> Result<Notice, ConversationError> {
        if self.stage != Stage::Contact {
            return Err(ConversationError::WrongStage(self.stage));
        }
        if !form.is_complete() {
            return Err(ConversationError::IncompleteContact);
        }

        self.push(
            Role::Bot,
            format!(
                "Thank you, {}! Our team will contact you shortly at {}. We appreciate your interest!",
                form.name, form.email
            ),
        );
        self.stage = Stage::Complete;
        Ok(Notice::lead_captured())
    }

    fn push(&mut self, role: Role, text: String) {
        self.messages.push(Message { role, text });
    }
}
