//! The interactive lookup loop.
//!
//! Each iteration walks `Prompting → Searching → Displaying → Saving →
//! Continuing`, returning to `Prompting` or ending in `Terminated`. Invalid
//! names and provider errors send the loop straight back to `Prompting`; a
//! failed save is reported and the loop carries on. Ctrl-C at any point
//! (at a prompt, mid-search, during the pause), or any other console failure,
//! ends the session.

use std::future::Future;
use std::io;
use std::path::PathBuf;
use std::time::Duration;

use serpstack_client::SearchOverrides;
use thiserror::Error;
use tracing::{error, info, warn};

use crate::format::{format_results, render_result, Filter, FormattedResult};
use crate::persist::ResultWriter;
use crate::prompt::{Prompter, Tone};
use crate::search::PeopleSearcher;
use crate::validate::validate_name;

/// Pause between consecutive searches, to stay clear of provider rate limits.
pub const SEARCH_PAUSE: Duration = Duration::from_secs(1);

pub const BANNER: &str = "=== F-People: OSINT People Search Tool ===";
pub const FAREWELL: &str = "Thank you for using F-People!";
pub const INTERRUPTED: &str = "Program stopped by user.";
pub const INVALID_NAME: &str = "Error: Invalid name. Minimum 2 characters.";

#[derive(Debug, Error)]
pub enum SessionError {
    #[error("interrupted by user")]
    Interrupted,

    #[error("console I/O failed: {0}")]
    Io(io::Error),
}

impl From<io::Error> for SessionError {
    fn from(err: io::Error) -> Self {
        if err.kind() == io::ErrorKind::Interrupted {
            SessionError::Interrupted
        } else {
            SessionError::Io(err)
        }
    }
}

/// Everything one name lookup needs.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Query {
    pub full_name: String,
    pub overrides: SearchOverrides,
    pub filter: Filter,
}

#[derive(Debug, PartialEq, Eq)]
pub enum State {
    Prompting,
    Searching(Query),
    Displaying(Vec<FormattedResult>),
    Saving(Vec<FormattedResult>),
    Continuing,
    Terminated,
}

/// State accumulated over one run of the loop. Results are only ever appended.
#[derive(Debug, Default)]
pub struct Session {
    results: Vec<FormattedResult>,
    searches: usize,
    saved: Vec<PathBuf>,
}

impl Session {
    pub fn results(&self) -> &[FormattedResult] {
        &self.results
    }

    pub fn searches(&self) -> usize {
        self.searches
    }

    pub fn saved(&self) -> &[PathBuf] {
        &self.saved
    }

    fn record_search(&mut self, results: &[FormattedResult]) {
        self.searches += 1;
        self.results.extend_from_slice(results);
    }
}

#[derive(Debug, PartialEq, Eq)]
pub enum EndReason {
    Finished,
    Interrupted,
    Failed(String),
}

#[derive(Debug)]
pub struct SessionReport {
    pub session: Session,
    pub ended: EndReason,
}

pub struct SessionLoop<'a, S: ?Sized, P> {
    searcher: &'a S,
    prompter: P,
    writer: &'a ResultWriter,
    pause: Duration,
}

impl<'a, S, P> SessionLoop<'a, S, P>
where
    S: PeopleSearcher + ?Sized,
    P: Prompter,
{
    pub fn new(searcher: &'a S, prompter: P, writer: &'a ResultWriter) -> Self {
        Self {
            searcher,
            prompter,
            writer,
            pause: SEARCH_PAUSE,
        }
    }

    pub fn with_pause(mut self, pause: Duration) -> Self {
        self.pause = pause;
        self
    }

    pub fn prompter(&self) -> &P {
        &self.prompter
    }

    /// Run until the user stops, Ctrl-C arrives, or the console fails.
    /// Every outcome is reported to the user; nothing escapes as an error.
    pub async fn run(&mut self) -> SessionReport {
        self.run_until(interrupt_signal()).await
    }

    /// Like [`run`](Self::run), but the session ends as interrupted as soon as
    /// `interrupt` completes, whatever state it is in.
    pub async fn run_until<F>(&mut self, interrupt: F) -> SessionReport
    where
        F: Future<Output = ()>,
    {
        self.prompter.say(Tone::Header, BANNER);

        let mut session = Session::default();
        // The interrupt is polled first so a signal handler is in place before
        // the first prompt blocks.
        let outcome = tokio::select! {
            biased;
            _ = interrupt => Err(SessionError::Interrupted),
            result = self.drive(&mut session) => result,
        };

        let ended = match outcome {
            Ok(()) => {
                self.prompter.say(Tone::Plain, &format!("\n{FAREWELL}"));
                EndReason::Finished
            }
            Err(SessionError::Interrupted) => {
                info!(searches = session.searches(), "Session interrupted by user");
                self.prompter.say(Tone::Plain, &format!("\n{INTERRUPTED}"));
                EndReason::Interrupted
            }
            Err(e) => {
                error!(error = %e, searches = session.searches(), "Session aborted");
                self.prompter
                    .say(Tone::Error, &format!("\nAn error occurred: {e}"));
                EndReason::Failed(e.to_string())
            }
        };

        info!(
            searches = session.searches(),
            results = session.results().len(),
            saved = session.saved().len(),
            "Session ended"
        );
        SessionReport { session, ended }
    }

    async fn drive(&mut self, session: &mut Session) -> Result<(), SessionError> {
        let mut state = State::Prompting;
        while state != State::Terminated {
            state = self.step(state, session).await?;
        }
        Ok(())
    }

    /// Perform one transition.
    pub async fn step(&mut self, state: State, session: &mut Session) -> Result<State, SessionError> {
        match state {
            State::Prompting => self.prompt_query(),
            State::Searching(query) => Ok(self.search(query, session).await),
            State::Displaying(results) => {
                self.display(&results);
                Ok(State::Saving(results))
            }
            State::Saving(results) => {
                self.offer_save(&results, session)?;
                Ok(State::Continuing)
            }
            State::Continuing => {
                if self.prompter.confirm("Search for another person?")? {
                    tokio::time::sleep(self.pause).await;
                    Ok(State::Prompting)
                } else {
                    Ok(State::Terminated)
                }
            }
            State::Terminated => Ok(State::Terminated),
        }
    }

    fn prompt_query(&mut self) -> Result<State, SessionError> {
        let full_name = self
            .prompter
            .input("Enter the full name to search")?
            .trim()
            .to_string();
        if !validate_name(&full_name) {
            self.prompter.say(Tone::Error, INVALID_NAME);
            return Ok(State::Prompting);
        }

        let region = self.optional("Region code (e.g. us, id), blank for default")?;
        let language = self.optional("Language code (e.g. en, id), blank for default")?;
        let num = match self.optional("Number of results, blank for default")? {
            Some(raw) => match parse_result_count(&raw) {
                Some(n) => Some(n),
                None => {
                    warn!(input = %raw, "Ignoring invalid result count");
                    self.prompter
                        .say(Tone::Error, "Invalid result count, using the default.");
                    None
                }
            },
            None => None,
        };
        let domain = self.optional("Only keep results whose domain contains (blank for any)")?;
        let keyword = self.optional("Only keep results whose description contains (blank for any)")?;

        Ok(State::Searching(Query {
            full_name,
            overrides: SearchOverrides {
                region,
                language,
                num,
            },
            filter: Filter { domain, keyword },
        }))
    }

    async fn search(&mut self, query: Query, session: &mut Session) -> State {
        self.prompter
            .say(Tone::Info, "Searching for information... please wait.");

        let response = self.searcher.lookup(&query.full_name, &query.overrides).await;
        if let Some(message) = response.error_message() {
            warn!(full_name = %query.full_name, error = %message, "Search error");
            self.prompter
                .say(Tone::Error, &format!("Search error: {message}"));
            return State::Prompting;
        }

        let results = format_results(&response, &query.filter);
        info!(
            full_name = %query.full_name,
            count = results.len(),
            filtered = !query.filter.is_empty(),
            "Search formatted"
        );
        session.record_search(&results);
        State::Displaying(results)
    }

    fn display(&mut self, results: &[FormattedResult]) {
        self.prompter.say(Tone::Header, "Search Results:");
        if results.is_empty() {
            self.prompter.say(Tone::Plain, "No results found.");
        }
        for (idx, result) in results.iter().enumerate() {
            self.prompter
                .say(Tone::Plain, &format!("\n{}", render_result(idx + 1, result)));
        }
    }

    fn offer_save(
        &mut self,
        results: &[FormattedResult],
        session: &mut Session,
    ) -> Result<(), SessionError> {
        if !self.prompter.confirm("Save the results?")? {
            return Ok(());
        }

        let stem = self.prompter.input("File name (without extension)")?;
        match self.writer.save(&stem, results) {
            Ok(path) => {
                self.prompter.say(
                    Tone::Success,
                    &format!("Results saved to {}", path.display()),
                );
                session.saved.push(path);
            }
            Err(e) => {
                error!(stem = %stem, error = %e, "Save failed");
                self.prompter
                    .say(Tone::Error, &format!("Failed to save results: {e}"));
            }
        }
        Ok(())
    }

    fn optional(&mut self, prompt: &str) -> Result<Option<String>, SessionError> {
        let raw = self.prompter.input(prompt)?;
        let trimmed = raw.trim();
        Ok((!trimmed.is_empty()).then(|| trimmed.to_string()))
    }
}

/// Resolves on Ctrl-C. The handler is installed on first poll and replaces the
/// default kill-on-SIGINT, so a key read that raises SIGINT is survivable too.
async fn interrupt_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        warn!(error = %e, "Failed to install Ctrl-C handler");
        std::future::pending::<()>().await;
    }
}

/// A result count must be a positive integer.
pub fn parse_result_count(raw: &str) -> Option<u32> {
    raw.trim().parse::<u32>().ok().filter(|n| *n > 0)
}
