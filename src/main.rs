//! Terminal host for the diary.
//!
//! Reads one line at a time. A line ending in `?` asks for suggestions and
//! completion of the text before it; any other line is entered as a command.

use std::io::{self, BufRead, Write};
use std::path::PathBuf;
use std::process::ExitCode;

use clap::Parser;
use tracing_subscriber::EnvFilter;

use diary_shell::config::host::{HostConfig, QUIT_COMMAND, SUGGEST_MARKER};
use diary_shell::core::session::{load_snapshot, save_snapshot};
use diary_shell::utils::plain::to_plain_text;
use diary_shell::{reduce, Event, SessionState};

#[derive(Debug, Parser)]
#[command(name = "diary-shell", version, about = "Play the diary from a terminal")]
struct Args {
    /// Resume from a saved session instead of the first page
    #[arg(long, value_name = "FILE")]
    load: Option<PathBuf>,

    /// Save the session here on exit
    #[arg(long, value_name = "FILE")]
    save: Option<PathBuf>,

    /// Print sanitized HTML instead of plain text
    #[arg(long)]
    raw: bool,

    /// TOML file overriding the prompt, output mode, and log filter
    #[arg(long, value_name = "FILE")]
    config: Option<PathBuf>,

    /// More log output (-v debug, -vv trace)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

fn main() -> ExitCode {
    let args = Args::parse();

    match run(args) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("error: {e}");
            ExitCode::FAILURE
        }
    }
}

fn run(args: Args) -> Result<(), Box<dyn std::error::Error>> {
    let config = match &args.config {
        Some(path) => HostConfig::load(path)?,
        None => HostConfig::default(),
    };
    init_logging(&config, args.verbose);

    let raw = args.raw || config.raw;
    let mut state = match &args.load {
        Some(path) => reduce(SessionState::default(), Event::Load(load_snapshot(path)?)),
        None => reduce(SessionState::default(), Event::Init),
    };
    print_output(&state.output, raw);

    let stdin = io::stdin();
    let mut stdout = io::stdout();
    let mut lines = stdin.lock().lines();
    loop {
        write!(stdout, "{}{}", config.prompt, state.input)?;
        stdout.flush()?;

        let Some(line) = lines.next().transpose()? else {
            break;
        };
        if line.trim() == QUIT_COMMAND {
            break;
        }

        // A pending completion is part of what the player sees at the prompt.
        let typed = format!("{}{}", state.input, line);
        state = match typed.strip_suffix(SUGGEST_MARKER) {
            Some(partial) => {
                let state = reduce(state, Event::Change(partial.to_string()));
                reduce(state, Event::Suggest)
            }
            None => {
                let state = reduce(state, Event::Change(typed));
                reduce(state, Event::Enter)
            }
        };
        print_output(&state.output, raw);
    }

    if let Some(path) = &args.save {
        save_snapshot(&state, path)?;
        tracing::info!(path = %path.display(), "session saved");
    }
    Ok(())
}

fn init_logging(config: &HostConfig, verbose: u8) {
    let filter = match verbose {
        0 => EnvFilter::try_from_default_env()
            .unwrap_or_else(|_| EnvFilter::new(&config.log_filter)),
        1 => EnvFilter::new("debug"),
        _ => EnvFilter::new("trace"),
    };
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .init();
}

fn print_output(output: &str, raw: bool) {
    if output.is_empty() {
        return;
    }
    if raw {
        println!("{}", ammonia::clean(output));
    } else {
        println!("{}\n", to_plain_text(output));
    }
}
