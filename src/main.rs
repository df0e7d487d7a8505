use clap::{Args, Parser as ClapParser, Subcommand};
use sift_lang::cli::{self, CliError, Command, CommandOptions};
use std::io::{self, Read};
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

#[derive(ClapParser)]
#[command(name = "sift")]
#[command(about = "Sift - parse compact filter and ordering text into typed clauses")]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Parse a filter and print its clause tree as JSON
    Filter {
        #[command(flatten)]
        input: InputArgs,

        #[command(flatten)]
        filter: FilterArgs,

        /// Pretty-print the output
        #[arg(short, long)]
        pretty: bool,
    },

    /// Parse an order list and print it as JSON
    Order {
        #[command(flatten)]
        input: InputArgs,

        /// Pretty-print the output
        #[arg(short, long)]
        pretty: bool,
    },

    /// Validate filter syntax only
    Check {
        #[command(flatten)]
        input: InputArgs,

        #[command(flatten)]
        filter: FilterArgs,
    },

    /// Print a filter in canonical form
    Format {
        #[command(flatten)]
        input: InputArgs,

        #[command(flatten)]
        filter: FilterArgs,
    },

    /// Show the syntax reference
    Docs,
}

#[derive(Args)]
struct InputArgs {
    /// Filter or order text (reads from stdin if not provided)
    text: Option<String>,

    /// JSON vocabulary file (defaults to the built-in odata preset)
    #[arg(long, env = "SIFT_VOCABULARY")]
    vocabulary: Option<PathBuf>,
}

/// Options that only apply when parsing a filter
#[derive(Args, Default)]
struct FilterArgs {
    /// Treat the bare word `null` as "no value"
    #[arg(long)]
    null: bool,

    /// Reject groups nested deeper than this
    #[arg(long)]
    max_depth: Option<usize>,
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(io::stderr)
        .init();

    let cli = Cli::parse();

    let result = match cli.command {
        Commands::Filter {
            input,
            filter,
            pretty,
        } => run(Command::Filter, input, filter, pretty),
        Commands::Order { input, pretty } => {
            run(Command::Order, input, FilterArgs::default(), pretty)
        }
        Commands::Check { input, filter } => run(Command::Check, input, filter, false),
        Commands::Format { input, filter } => run(Command::Format, input, filter, false),
        Commands::Docs => {
            print!("{}", cli::get_syntax_reference());
            Ok(())
        }
    };

    if let Err(e) = result {
        eprintln!("{}", e);
        std::process::exit(1);
    }
}

fn run(
    command: Command,
    input: InputArgs,
    filter: FilterArgs,
    pretty: bool,
) -> Result<(), CliError> {
    let text = match input.text {
        Some(s) => s,
        None if !atty::is(atty::Stream::Stdin) => {
            let mut buffer = String::new();
            io::stdin().read_to_string(&mut buffer)?;
            buffer
        }
        None => return Err(CliError::NoInput),
    };

    let options = CommandOptions {
        command,
        text,
        vocabulary: input.vocabulary,
        handle_null_value: filter.null,
        max_depth: filter.max_depth,
        pretty,
    };

    println!("{}", cli::execute(&options)?);
    Ok(())
}
