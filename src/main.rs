mod clipboard;
mod config;
mod errors;
mod generators;
mod history;
mod password;
mod strength;

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};
use log::warn;
use rand::SeedableRng;
use rand::rngs::StdRng;

use crate::config::Config;
use crate::errors::{AppError, HistoryError};
use crate::history::History;
use crate::password::{GenerationOptions, synthesize, synthesize_with};

const BAR_WIDTH: usize = 30;

#[derive(Parser, Debug)]
#[command(name = "passforge", version, about = "Generate random passwords and rate their strength")]
struct Cli {
    /// Config file to use instead of the platform default
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Generate one or more passwords
    Generate(GenerateArgs),
    /// Rate the strength of a password (prompts when omitted)
    Strength {
        #[arg(allow_hyphen_values = true)]
        password: Option<String>,
    },
    /// Show previously generated passwords
    History {
        /// Only show the most recent N entries
        #[arg(short = 'n', long)]
        last: Option<usize>,
    },
    /// Print the effective configuration as JSON
    Config,
}

#[derive(Args, Debug)]
struct GenerateArgs {
    #[arg(short = 'L', long)]
    length: Option<usize>,

    #[arg(long, overrides_with = "no_uppercase")]
    uppercase: bool,
    #[arg(long, overrides_with = "uppercase")]
    no_uppercase: bool,

    #[arg(long, overrides_with = "no_numbers")]
    numbers: bool,
    #[arg(long, overrides_with = "numbers")]
    no_numbers: bool,

    #[arg(long, overrides_with = "no_symbols")]
    symbols: bool,
    #[arg(long, overrides_with = "symbols")]
    no_symbols: bool,

    /// Characters that must never appear, e.g. O0l1
    #[arg(short = 'x', long)]
    exclude: Option<String>,

    #[arg(short = 'c', long, default_value_t = 1, value_parser = clap::value_parser!(u32).range(1..))]
    count: u32,

    /// Seed for reproducible output
    #[arg(long)]
    seed: Option<u64>,

    /// Copy the (last) password to the clipboard
    #[arg(long)]
    copy: bool,

    /// Do not append to the history file
    #[arg(long)]
    no_history: bool,

    /// Print `*` instead of the password
    #[arg(long)]
    hide: bool,
}

fn main() {
    env_logger::Builder::from_env(env_logger::Env::new().filter_or("PASSFORGE_LOG", "warn")).init();

    let cli = Cli::parse();

    if let Err(e) = run(cli) {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

fn run(cli: Cli) -> Result<(), AppError> {
    let config = Config::load(cli.config.as_deref())?;

    match cli.command {
        Command::Generate(args) => generate(&args, &config),
        Command::Strength { password } => rate(password),
        Command::History { last } => show_history(&config, last),
        Command::Config => {
            println!("{}", config.to_json()?);
            Ok(())
        }
    }
}

fn flag(on: bool, off: bool, default: bool) -> bool {
    if off {
        false
    } else if on {
        true
    } else {
        default
    }
}

/// Config defaults overridden by whatever was given on the command line.
fn resolve_options(args: &GenerateArgs, config: &Config) -> GenerationOptions {
    let mut options = config.generation_options();

    if let Some(length) = args.length {
        options.length = length;
    }

    options.include_uppercase = flag(args.uppercase, args.no_uppercase, options.include_uppercase);
    options.include_numbers = flag(args.numbers, args.no_numbers, options.include_numbers);
    options.include_symbols = flag(args.symbols, args.no_symbols, options.include_symbols);

    if let Some(exclude) = &args.exclude {
        options.excluded = exclude.chars().collect();
    }

    options
}

fn generate(args: &GenerateArgs, config: &Config) -> Result<(), AppError> {
    let options = resolve_options(args, config);
    let mut seeded = args.seed.map(StdRng::seed_from_u64);

    let mut passwords = Vec::with_capacity(args.count as usize);
    for _ in 0..args.count {
        let password = match seeded.as_mut() {
            Some(rng) => synthesize_with(&options, rng)?,
            None => synthesize(&options)?,
        };
        passwords.push(password);
    }

    let hide = args.hide || config.mask;
    for password in &passwords {
        let result = strength::score(password);
        let shown = if hide { "*".repeat(password.chars().count()) } else { password.clone() };

        println!("{}", shown);
        println!("Strength: {} {}", result.styled_label(), result.bar(BAR_WIDTH));
    }

    if config.save_history && !args.no_history {
        let history = History::new(config.history_path().ok_or(HistoryError::NoDataDir)?);
        for password in &passwords {
            history.append(password)?;
        }
    }

    if args.copy || config.copy_to_clipboard {
        if let Some(last) = passwords.last() {
            match clipboard::copy(last) {
                Ok(()) => eprintln!("Password copied to clipboard."),
                Err(e) => warn!("{}", e),
            }
        }
    }

    Ok(())
}

fn rate(password: Option<String>) -> Result<(), AppError> {
    let password = match password {
        Some(p) => p,
        None => rpassword::prompt_password("Password: ")?,
    };

    let result = strength::score(&password);
    println!("Strength: {} {}", result.styled_label(), result.bar(BAR_WIDTH));

    Ok(())
}

fn show_history(config: &Config, last: Option<usize>) -> Result<(), AppError> {
    let history = History::new(config.history_path().ok_or(HistoryError::NoDataDir)?);
    let entries = history.entries()?;

    if entries.is_empty() {
        eprintln!("No passwords recorded in {}", history.path().display());
        return Ok(());
    }

    let skip = last.map_or(0, |n| entries.len().saturating_sub(n));
    for (i, entry) in entries.iter().enumerate().skip(skip) {
        println!("{:>4}  {}", i + 1, entry);
    }

    Ok(())
}
