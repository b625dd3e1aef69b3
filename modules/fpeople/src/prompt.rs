use std::io;

use console::style;
use dialoguer::theme::ColorfulTheme;
use dialoguer::{Confirm, Input};

/// How a console line should be presented.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Tone {
    Plain,
    Header,
    Info,
    Success,
    Error,
}

/// The console side of the session. Ctrl-C at a prompt surfaces as an
/// `io::ErrorKind::Interrupted` error.
pub trait Prompter {
    /// Free-text input; may return an empty string.
    fn input(&mut self, prompt: &str) -> io::Result<String>;

    fn confirm(&mut self, prompt: &str) -> io::Result<bool>;

    fn say(&mut self, tone: Tone, text: &str);
}

/// Prompter backed by the real terminal.
pub struct TerminalPrompter {
    theme: ColorfulTheme,
}

impl TerminalPrompter {
    pub fn new() -> Self {
        Self {
            theme: ColorfulTheme::default(),
        }
    }
}

impl Default for TerminalPrompter {
    fn default() -> Self {
        Self::new()
    }
}

impl Prompter for TerminalPrompter {
    fn input(&mut self, prompt: &str) -> io::Result<String> {
        Input::<String>::with_theme(&self.theme)
            .with_prompt(prompt)
            .allow_empty(true)
            .interact_text()
            .map_err(into_io)
    }

    fn confirm(&mut self, prompt: &str) -> io::Result<bool> {
        Confirm::with_theme(&self.theme)
            .with_prompt(prompt)
            .default(false)
            .interact()
            .map_err(into_io)
    }

    fn say(&mut self, tone: Tone, text: &str) {
        match tone {
            Tone::Plain => println!("{text}"),
            Tone::Header => println!("\n{}", style(text).bold().cyan()),
            Tone::Info => println!("\n{}", style(text).dim()),
            Tone::Success => println!("{}", style(text).green()),
            Tone::Error => println!("{}", style(text).red()),
        }
    }
}

fn into_io(err: dialoguer::Error) -> io::Error {
    match err {
        dialoguer::Error::IO(e) => e,
    }
}
