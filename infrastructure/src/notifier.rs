use colored::Colorize;
use domain::notice::{Notice, Notifier};

/// Renders transient notices as a banner on the terminal.
pub struct TerminalNotifier;

impl TerminalNotifier {
    pub fn new() -> Self {
        Self
    }
}

impl Default for TerminalNotifier {
    fn default() -> Self {
        Self::new()
    }
}

impl Notifier for TerminalNotifier {
    fn notify(&self, notice: &Notice) {
        tracing::debug!(title = %notice.title, "showing notice");
        println!();
        println!("  {}", notice.title.green().bold());
        println!("  {}", notice.description.dimmed());
        println!();
    }
}
