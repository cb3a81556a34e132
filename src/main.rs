use std::path::{Path, PathBuf};
use std::process;

use bon::constants::{LOG_ENV, TOOL_TAG};
use bon::options::{parse_editor, parse_language};
use bon::{
    find_skill_source, load_config, resolve_locale, scaffold, BonError, Editor, Environment,
    Language, OptionOverrides, Options, ScaffoldReport, WindowsHostLocaleReader, WriteOutcome,
};
use clap::error::ErrorKind;
use clap::Parser;
use tracing_subscriber::EnvFilter;

#[derive(Parser, Debug)]
#[command(name = "bon")]
#[command(about = "Create an AI agent instructions file and a docs/ skeleton")]
struct Cli {
    /// Target directory (default: current directory)
    #[arg(short = 'd', long, value_name = "PATH")]
    dir: Option<PathBuf>,

    /// Overwrite an existing instructions file and skill files
    #[arg(short = 'f', long)]
    force: bool,

    /// Programming language: python|js|ts|rust (default: python)
    #[arg(long, value_name = "LANG", value_parser = parse_language)]
    lang: Option<Language>,

    /// Target AI editor: codex|cursor|claudecode|copilot (default: codex)
    #[arg(long, value_name = "EDITOR", value_parser = parse_editor)]
    editor: Option<Editor>,

    /// Show version
    #[arg(short = 'v', long)]
    version: bool,
}

impl Cli {
    fn overrides(&self) -> OptionOverrides {
        OptionOverrides {
            dir: self.dir.clone(),
            force: self.force,
            language: self.lang,
            editor: self.editor,
        }
    }
}

fn main() {
    init_tracing();

    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(e) => match e.kind() {
            ErrorKind::DisplayHelp | ErrorKind::DisplayVersion => e.exit(),
            _ => fail(&BonError::InvalidArgument(argument_error_message(&e))),
        },
    };

    if cli.version {
        println!("bon v{}", env!("CARGO_PKG_VERSION"));
        return;
    }

    if let Err(e) = run(&cli) {
        fail(&e);
    }
}

fn run(cli: &Cli) -> bon::Result<()> {
    let env = Environment::capture()
        .map_err(|e| BonError::io("Could not determine current directory", e))?;
    let config = load_config(&env)?;
    let options = Options::resolve(cli.overrides(), &config, &env)?;
    let locale = resolve_locale(&config, &env, &WindowsHostLocaleReader::default())?;
    let skill_source = find_skill_source(&env, config.skills_dir.as_deref());

    let report = scaffold(&options, locale, skill_source.as_deref())?;
    print_report(&report, &options.target_dir);
    Ok(())
}

fn print_report(report: &ScaffoldReport, target_dir: &Path) {
    let file_name = report
        .instructions_path
        .file_name()
        .map(|name| name.to_string_lossy().into_owned())
        .unwrap_or_default();
    let verb = match report.instructions_outcome {
        WriteOutcome::Created => "created",
        WriteOutcome::Overwritten => "overwritten",
    };
    println!(
        "{} {} {} at {}",
        TOOL_TAG,
        file_name,
        verb,
        report.instructions_path.display()
    );

    for doc in &report.docs_created {
        let shown = doc.strip_prefix(target_dir).unwrap_or(doc);
        println!("{} {} created", TOOL_TAG, shown.display());
    }

    if let Some(skills) = &report.skills {
        println!(
            "{} skills: {} copied, {} skipped -> {}",
            TOOL_TAG,
            skills.stats.copied,
            skills.stats.skipped,
            skills.destination.display()
        );
    }
}

/// Reduces a clap error to a single diagnostic line
fn argument_error_message(err: &clap::Error) -> String {
    let rendered = err.to_string();
    let first = rendered.lines().next().unwrap_or_default();
    let message = first.strip_prefix("error: ").unwrap_or(first).trim();
    format!("{} (use --help to see available options)", message)
}

fn fail(err: &BonError) -> ! {
    eprintln!("{} {}: {}", TOOL_TAG, err.code(), err);
    process::exit(err.exit_code());
}

fn init_tracing() {
    let filter = EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .without_time()
        .init();
}
