use std::cell::Cell;

use application::chat_service::ChatService;
use clap::Parser;
use colored::Colorize;
use dialoguer::{theme::ColorfulTheme, Select};
use domain::catalog::Catalog;
use infrastructure::config::Config;
use infrastructure::notifier::TerminalNotifier;
use shared::types::Result;

use crate::chat::ChatWidget;
use crate::{contact, skills};

#[derive(Parser)]
#[command(name = "folio-cli")]
#[command(about = "Portfolio concierge with a scripted lead-capture chat")]
pub struct Cli {
    /// Open the chat directly, skipping the menu
    #[arg(long)]
    pub chat: bool,

    /// Print the skills showcase
    #[arg(long)]
    pub skills: bool,

    /// Print the contact card
    #[arg(long)]
    pub contact: bool,

    /// Print the conversation script
    #[arg(long)]
    pub catalog: bool,

    /// Emit --catalog output as JSON
    #[arg(long)]
    pub json: bool,
}

pub struct CliApp {
    config: Config,
}

impl CliApp {
    pub fn new() -> Self {
        Self {
            config: Config::load(),
        }
    }

    pub fn run(&mut self, cli: Cli) -> Result<()> {
        if cli.skills {
            skills::render();
            return Ok(());
        }
        if cli.contact {
            contact::render();
            return Ok(());
        }
        if cli.catalog {
            return print_catalog(&Catalog::default(), cli.json);
        }
        if cli.chat {
            return self.open_chat();
        }
        self.run_menu()
    }

    /// Top-level menu. Owns the chat's mounted/unmounted flag; the widget
    /// itself only reports closure through its callback.
    fn run_menu(&mut self) -> Result<()> {
        loop {
            let header = format!("{} — {}", self.config.owner_name, self.config.owner_title);
            let picked = Select::with_theme(&ColorfulTheme::default())
                .with_prompt(header)
                .items(&["Chat with me", "Skills", "Contact", "Quit"])
                .default(0)
                .interact()?;
            match picked {
                0 => self.open_chat()?,
                1 => skills::render(),
                2 => contact::render(),
                _ => break,
            }
        }
        Ok(())
    }

    fn open_chat(&self) -> Result<()> {
        let open = Cell::new(true);
        let service = ChatService::new(Catalog::default(), Box::new(TerminalNotifier::new()));
        let mut widget = ChatWidget::new(service, &self.config, Box::new(|| open.set(false)));
        widget.run()?;
        debug_assert!(!open.get(), "widget returned without closing");
        Ok(())
    }
}

impl Default for CliApp {
    fn default() -> Self {
        Self::new()
    }
}

pub fn render_catalog_json(catalog: &Catalog) -> Result<String> {
    Ok(serde_json::to_string_pretty(catalog.entries())?)
}

fn print_catalog(catalog: &Catalog, json: bool) -> Result<()> {
    if json {
        println!("{}", render_catalog_json(catalog)?);
        return Ok(());
    }
    for entry in catalog.entries() {
        println!("{}", entry.label.cyan().bold());
        for question in &entry.questions {
            println!("  - {question}");
        }
        println!();
    }
    Ok(())
}
