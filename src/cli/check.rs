//! Run sift commands against filter or order text

use std::path::PathBuf;

use tracing::info;

use super::CliError;
use crate::{FilterPrinter, ParseOptions, Vocabulary, parse_filter, parse_order};

/// What to do with the input text
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Command {
    /// Print the clause tree as JSON
    #[default]
    Filter,
    /// Print the order list as JSON
    Order,
    /// Only validate filter syntax
    Check,
    /// Print the filter in canonical form
    Format,
}

/// Options shared by every command
#[derive(Debug, Clone, Default)]
pub struct CommandOptions {
    pub command: Command,
    /// Filter or order text
    pub text: String,
    /// JSON vocabulary file; the `odata` preset when absent
    pub vocabulary: Option<PathBuf>,
    /// Treat bare `null` as the null marker
    pub handle_null_value: bool,
    /// Maximum group nesting
    pub max_depth: Option<usize>,
    /// Pretty-print JSON output
    pub pretty: bool,
}

/// Resolve the vocabulary a command runs with.
pub fn load_vocabulary(path: Option<&std::path::Path>) -> Result<Vocabulary, CliError> {
    match path {
        Some(path) => {
            info!(path = %path.display(), "loading vocabulary");
            Ok(Vocabulary::from_path(path)?)
        }
        None => Ok(Vocabulary::odata()),
    }
}

/// Execute a command and return the text to print.
pub fn execute(options: &CommandOptions) -> Result<String, CliError> {
    let vocabulary = load_vocabulary(options.vocabulary.as_deref())?;
    let parse_options = ParseOptions {
        handle_null_value: options.handle_null_value,
        max_depth: options.max_depth,
    };

    match options.command {
        Command::Filter => {
            let clause = parse_filter(&options.text, &vocabulary, parse_options)?;
            to_json(&clause, options.pretty)
        }
        Command::Order => {
            let clauses = parse_order(&options.text, &vocabulary)?;
            to_json(&clauses, options.pretty)
        }
        Command::Check => {
            let clause = parse_filter(&options.text, &vocabulary, parse_options)?;
            let conditions = clause.as_ref().map_or(0, |c| c.leaves().count());
            Ok(format!("Syntax is valid ({} conditions)", conditions))
        }
        Command::Format => {
            let clause = parse_filter(&options.text, &vocabulary, parse_options)?;
            match clause {
                Some(clause) => Ok(FilterPrinter::new(&vocabulary).print(&clause)?),
                None => Ok(String::new()),
            }
        }
    }
}

fn to_json<T: serde::Serialize>(value: &T, pretty: bool) -> Result<String, CliError> {
    let json = if pretty {
        serde_json::to_string_pretty(value)
    } else {
        serde_json::to_string(value)
    }?;
    Ok(json)
}
