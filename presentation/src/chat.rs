use std::io;

use application::chat_service::ChatService;
use colored::Colorize;
use crossterm::cursor::MoveTo;
use crossterm::execute;
use crossterm::terminal::{Clear, ClearType};
use dialoguer::{theme::ColorfulTheme, Input, Select};
use domain::contact::ContactForm;
use domain::conversation::{Role, Stage};
use infrastructure::config::Config;
use shared::confirmation::ask_confirmation;
use shared::types::Result;

const CLOSE: &str = "Close chat";

fn required(input: &String) -> std::result::Result<(), &'static str> {
    if input.is_empty() {
        Err("This field is required")
    } else {
        Ok(())
    }
}

/// Interactive rendition of the lead-capture chat. The widget does not own
/// its visibility: the launcher mounts it, and the close affordance invokes
/// the injected callback before the widget returns control.
pub struct ChatWidget<'a> {
    service: ChatService,
    owner_name: String,
    owner_title: String,
    on_close: Box<dyn FnMut() + 'a>,
    rendered: usize,
}

impl<'a> ChatWidget<'a> {
    pub fn new(service: ChatService, config: &Config, on_close: Box<dyn FnMut() + 'a>) -> Self {
        Self {
            service,
            owner_name: config.owner_name.clone(),
            owner_title: config.owner_title.clone(),
            on_close,
            rendered: 0,
        }
    }

    pub fn run(&mut self) -> Result<()> {
        self.open()?;
        loop {
            self.render_new();
            match self.service.stage() {
                Stage::Category => {
                    let labels = self.service.category_labels();
                    match self.offer(&labels, "What would you like to know about?")? {
                        Some(label) => self.service.select_category(label)?,
                        None => {
                            if self.close()? {
                                return Ok(());
                            }
                        }
                    }
                }
                Stage::Questions => {
                    let questions = self.service.available_questions();
                    match self.offer(questions, "Common questions")? {
                        Some(question) => self.service.select_question(question)?,
                        None => {
                            if self.close()? {
                                return Ok(());
                            }
                        }
                    }
                }
                Stage::Contact => {
                    let choices = ["Share contact details"];
                    match self.offer(&choices, "How would you like to proceed?")? {
                        Some(_) => {
                            let form = self.collect_contact()?;
                            self.service.submit_contact(&form)?;
                        }
                        None => {
                            if self.close()? {
                                return Ok(());
                            }
                        }
                    }
                }
                Stage::Complete => {
                    self.offer(&[], "The conversation is complete")?;
                    self.close()?;
                    return Ok(());
                }
            }
        }
    }

    fn open(&self) -> Result<()> {
        execute!(io::stdout(), Clear(ClearType::All), MoveTo(0, 0))?;
        println!("{}", self.owner_name.bold());
        println!("{}", self.owner_title.dimmed());
        println!();
        Ok(())
    }

    /// Print transcript entries added since the last turn; the transcript
    /// is append-only.
    fn render_new(&mut self) {
        for message in &self.service.messages()[self.rendered..] {
            match message.role {
                Role::Bot => println!("{} {}", "bot>".cyan().bold(), message.text),
                Role::User => println!("{} {}", "you>".green().bold(), message.text),
            }
        }
        self.rendered = self.service.messages().len();
    }

    /// Offer the stage's choices plus the close affordance. `None` means the
    /// visitor picked close.
    fn offer<'i>(&self, items: &[&'i str], prompt: &str) -> Result<Option<&'i str>> {
        let mut entries: Vec<&str> = items.to_vec();
        entries.push(CLOSE);
        let picked = Select::with_theme(&ColorfulTheme::default())
            .with_prompt(prompt)
            .items(&entries)
            .default(0)
            .interact()?;
        Ok(items.get(picked).copied())
    }

    fn collect_contact(&self) -> Result<ContactForm> {
        let theme = ColorfulTheme::default();
        let name: String = Input::with_theme(&theme)
            .with_prompt("Your Name")
            .validate_with(required)
            .interact_text()?;
        let email: String = Input::with_theme(&theme)
            .with_prompt("Your Email")
            .validate_with(required)
            .interact_text()?;
        let phone: String = Input::with_theme(&theme)
            .with_prompt("Your Phone")
            .validate_with(required)
            .interact_text()?;
        Ok(ContactForm::new(name, email, phone))
    }

    fn close(&mut self) -> Result<bool> {
        if self.service.stage() != Stage::Complete
            && !ask_confirmation("Close the chat? The conversation cannot be resumed.", false)?
        {
            return Ok(false);
        }
        (self.on_close)();
        Ok(true)
    }
}
