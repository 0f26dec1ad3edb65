use std::{
    fs::File,
    io::{self, Write},
    path::PathBuf,
    process::ExitCode,
};

use anyhow::{Context, Result};
use clap::{Parser, ValueHint};
use env_logger::{Env, Target};
use log::{warn, LevelFilter};

use filepick::{
    config::DEFAULT_INITIAL_DIRECTORY,
    picker::{OutcomeRecord, EXIT_FAILURE},
    ui, PickerConfig, PickerOutcome,
};

#[derive(Parser, Debug)]
#[command(name = "filepick", version, about = "Pick a file, or name a new one, from the terminal")]
struct Args {
    /// Directory to start browsing in
    #[arg(default_value = DEFAULT_INITIAL_DIRECTORY, value_hint = ValueHint::DirPath)]
    path: PathBuf,

    /// Type a new file name instead of picking an existing file
    #[arg(short, long)]
    save: bool,

    /// Show entries whose names start with a dot
    #[arg(short = 'a', long)]
    show_hidden: bool,

    /// Accepted file name suffixes, e.g. `-e .txt -e .md` or `-e .txt,.md`
    #[arg(short = 'e', long = "ext", value_delimiter = ',', action = clap::ArgAction::Append)]
    extensions: Vec<String>,

    /// Print the result as JSON
    #[arg(long)]
    json: bool,

    /// Write logs to this file instead of stderr
    #[arg(long, value_hint = ValueHint::FilePath)]
    log_file: Option<PathBuf>,

    /// Increase log verbosity (-v info, -vv debug, -vvv trace)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

impl Args {
    fn to_config(&self) -> PickerConfig {
        PickerConfig::new(self.path.clone())
            .with_save_mode(self.save)
            .with_show_hidden(self.show_hidden)
            .with_accepted_extensions(self.extensions.iter().cloned())
    }
}

fn init_logging(args: &Args) -> Result<()> {
    let log_level = match args.verbose {
        0 => LevelFilter::Warn,
        1 => LevelFilter::Info,
        2 => LevelFilter::Debug,
        _ => LevelFilter::Trace,
    };
    let mut builder = env_logger::Builder::from_env(
        Env::default().default_filter_or(log_level.to_string()),
    );
    if let Some(path) = &args.log_file {
        let file = File::create(path)
            .with_context(|| format!("cannot create log file {}", path.display()))?;
        builder.target(Target::Pipe(Box::new(file)));
    }
    builder.init();
    Ok(())
}

/// Write the session result. This is the only output that goes to stdout.
fn write_outcome(out: &mut impl Write, outcome: &PickerOutcome, json: bool) -> Result<()> {
    if json {
        writeln!(out, "{}", serde_json::to_string(&outcome.to_record())?)?;
    } else if let Some(path) = outcome.path() {
        writeln!(out, "{}", path.display())?;
    }
    out.flush()?;
    Ok(())
}

fn write_failure(out: &mut impl Write, err: &anyhow::Error, json: bool) -> Result<()> {
    if json {
        let record = OutcomeRecord::failure(format!("{:#}", err));
        writeln!(out, "{}", serde_json::to_string(&record)?)?;
        out.flush()?;
    }
    Ok(())
}

fn run(args: &Args) -> Result<PickerOutcome> {
    init_logging(args)?;

    if !args.path.is_dir() {
        warn!("{} is not a readable directory", args.path.display());
    }

    let outcome = ui::run(&args.to_config())?;
    write_outcome(&mut io::stdout(), &outcome, args.json)?;
    Ok(outcome)
}

fn main() -> ExitCode {
    let args = Args::parse();

    match run(&args) {
        Ok(outcome) => ExitCode::from(outcome.exit_code()),
        Err(err) => {
            eprintln!("Error: {:#}", err);
            let _ = write_failure(&mut io::stdout(), &err, args.json);
            ExitCode::from(EXIT_FAILURE)
        }
    }
}
