//! CLI entry point for ptree

use std::io::{self, IsTerminal};
use std::path::{Path, PathBuf};
use std::process;

use clap::{Arg, ArgAction, CommandFactory, FromArgMatches, Parser, ValueEnum};
use ptree::output::OutputConfig;
use ptree::tree::{DEFAULT_MAX_DEPTH, validate_depth, validate_root};
use ptree::{
    Cancellation, ConfirmOnInterrupt, InterruptFlag, Language, PtreeError, Settings, SettingsStore,
    StreamingFormatter, TraversalOptions, TreeWalker, WalkOutcome, install_handler,
};

/// On/off switch for the persisted colour setting
#[derive(Debug, Clone, Copy, ValueEnum)]
enum Toggle {
    On,
    Off,
}

#[derive(Parser, Debug)]
#[command(name = "ptree")]
#[command(version, disable_version_flag = true)]
struct Args {
    /// Starting directory path
    path: Option<PathBuf>,

    /// Maximum traversal depth
    #[arg(short, long, default_value_t = DEFAULT_MAX_DEPTH as i64, allow_negative_numbers = true)]
    depth: i64,

    /// Folder or file names to exclude
    #[arg(short, long, num_args = 0..)]
    exclude: Vec<String>,

    /// File types to display, without the dot
    #[arg(short, long, num_args = 0..)]
    types: Vec<String>,

    /// Disable colour and use text indicators
    #[arg(short, long)]
    no_color: bool,

    /// Set default colour mode and exit
    #[arg(short = 'c', long, value_enum)]
    set_color: Option<Toggle>,

    /// Set default language and exit
    #[arg(short = 'l', long, value_enum)]
    set_lang: Option<Language>,
}

/// Build the command with help text in the configured language.
fn localized_command(language: Language) -> clap::Command {
    let messages = language.messages();
    Args::command()
        .about(messages.description)
        .mut_arg("path", |a| a.help(messages.path_help))
        .mut_arg("depth", |a| a.help(messages.depth_help))
        .mut_arg("exclude", |a| a.help(messages.exclude_help))
        .mut_arg("types", |a| a.help(messages.types_help))
        .mut_arg("no_color", |a| a.help(messages.no_color_help))
        .mut_arg("set_color", |a| a.help(messages.set_color_help))
        .mut_arg("set_lang", |a| a.help(messages.set_lang_help))
        .arg(
            Arg::new("version")
                .short('v')
                .long("version")
                .action(ArgAction::Version)
                .help(messages.version_help),
        )
}

/// Whether the terminal can show colour. Resolved once at startup.
fn color_supported() -> bool {
    // Respect NO_COLOR environment variable (https://no-color.org/)
    if std::env::var_os("NO_COLOR").is_some() {
        return false;
    }
    if std::env::var_os("FORCE_COLOR").is_some() {
        return true;
    }
    if std::env::var("TERM").map(|t| t == "dumb").unwrap_or(false) {
        return false;
    }
    std::io::stdout().is_terminal()
}

/// The root to draw. Defaults to the current directory, shown in full.
fn resolve_root(path: Option<&Path>) -> PathBuf {
    match path {
        Some(path) => path.to_path_buf(),
        None => std::env::current_dir().unwrap_or_else(|e| {
            log::warn!("cannot read current directory: {}", e);
            PathBuf::from(".")
        }),
    }
}

/// Apply `--set-color` / `--set-lang`, save, and report.
fn update_settings(store: Option<&SettingsStore>, mut settings: Settings, args: &Args) -> i32 {
    if let Some(toggle) = args.set_color {
        settings.use_color = matches!(toggle, Toggle::On);
    }
    if let Some(language) = args.set_lang {
        settings.language = language;
    }
    let messages = settings.language.messages();

    let saved = match store {
        Some(store) => store.save(&settings),
        None => Err(PtreeError::NoHomeDir),
    };
    if let Err(e) = saved {
        eprintln!("{}", messages.fatal(&e));
        return 1;
    }

    if args.set_color.is_some() {
        println!("{}", messages.color_updated(settings.use_color));
    }
    if let Some(language) = args.set_lang {
        println!("{}", messages.language_updated(language));
    }
    0
}

/// Print the header and stream the tree to stdout.
fn print_tree<C: Cancellation>(
    options: TraversalOptions,
    args: &Args,
    cancel: &mut C,
) -> io::Result<WalkOutcome> {
    let mut formatter = StreamingFormatter::new(OutputConfig::from(&options));
    formatter.write_header(&options.root_path.display().to_string(), &args.types)?;

    let outcome = TreeWalker::new(options).walk(&mut formatter, cancel)?;
    formatter.flush()?;
    Ok(outcome)
}

fn main() {
    // Logs go to stderr; the tree owns stdout. Use RUST_LOG=debug for detail.
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn"))
        .try_init()
        .ok();

    let store = SettingsStore::default_location();
    let settings = store.as_ref().map(SettingsStore::load).unwrap_or_default();

    let matches = localized_command(settings.language).get_matches();
    let args = Args::from_arg_matches(&matches).unwrap_or_else(|e| e.exit());

    if args.set_color.is_some() || args.set_lang.is_some() {
        process::exit(update_settings(store.as_ref(), settings, &args));
    }

    let language = settings.language;
    let messages = language.messages();

    let use_color = if args.no_color || !settings.use_color {
        false
    } else if color_supported() {
        true
    } else {
        log::info!("terminal does not support colour, using text indicators");
        false
    };

    let root = resolve_root(args.path.as_deref());
    let max_depth = match validate_root(&root).and_then(|_| validate_depth(args.depth)) {
        Ok(depth) => depth,
        Err(e) => {
            eprintln!("{}", messages.fatal(&e));
            process::exit(1);
        }
    };

    let options = TraversalOptions::new(root)
        .with_max_depth(Some(max_depth))
        .with_excluded(args.exclude.iter().cloned())
        .with_extensions(args.types.iter().cloned())
        .with_color(use_color)
        .with_language(language);
    log::debug!("resolved options: {:?}", options);

    let flag = InterruptFlag::new();
    if let Err(e) = install_handler(flag.clone()) {
        log::warn!("Ctrl-C confirmation unavailable: {}", e);
    }
    let mut cancel = ConfirmOnInterrupt::stdio(flag, language);

    match print_tree(options, &args, &mut cancel) {
        Ok(WalkOutcome::Completed(_)) => {}
        Ok(WalkOutcome::Interrupted) => process::exit(1),
        Err(e) => {
            eprintln!("ptree: error writing output: {}", e);
            process::exit(1);
        }
    }
}
