pub mod config;
pub mod format;
pub mod logging;
pub mod lookup;
pub mod persist;
pub mod prompt;
pub mod search;
pub mod session;
pub mod validate;

pub use config::{Config, ConfigError};
pub use format::{format_results, render_result, Filter, FormattedResult};
pub use lookup::{run_lookup, LookupError, LookupOutcome, LookupRequest};
pub use persist::{PersistError, ResultWriter};
pub use prompt::{Prompter, TerminalPrompter, Tone};
pub use search::PeopleSearcher;
pub use session::{EndReason, Query, Session, SessionError, SessionLoop, SessionReport, State};
pub use validate::validate_name;
