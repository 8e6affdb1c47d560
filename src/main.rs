//! hilite - print a source or Markdown file with syntax highlighting

use std::env;
use std::fs;
use std::io;
use std::path::PathBuf;
use std::process;

use tracing::{debug, Level};
use tracing_subscriber::EnvFilter;

use hilite::config::clamp_font_size;
use hilite::display::{write_annotated, write_header, write_plain};
use hilite::{detect_file_kind, Config, FileKind, HighlightError, Result, SyntaxManager, ThemeMode};

/// Parsed command line
struct Args {
    path: PathBuf,
    mode: Option<ThemeMode>,
    font_size: Option<f32>,
    language: Option<String>,
}

fn main() {
    tracing_subscriber::fmt()
        .with_writer(io::stderr)
        .with_env_filter(
            EnvFilter::from_default_env().add_directive(Level::WARN.into()),
        )
        .init();

    if let Err(e) = run() {
        eprintln!("Error: {}", e);
        process::exit(1);
    }
}

fn run() -> Result<()> {
    let raw: Vec<String> = env::args().skip(1).collect();

    if let Some(first) = raw.first() {
        match first.as_str() {
            "--help" | "-h" => {
                print_usage();
                return Ok(());
            }
            "--version" | "-V" => {
                println!("hilite {}", env!("CARGO_PKG_VERSION"));
                return Ok(());
            }
            _ => {}
        }
    }

    let args = parse_args(&raw)?;
    let config = Config::load()?;
    let mode = args.mode.unwrap_or(config.theme);
    let font_size = clamp_font_size(args.font_size.unwrap_or(config.font_size));

    let text = fs::read_to_string(&args.path)?;
    let kind = match args.language {
        Some(lang) => FileKind::Code(lang),
        None => detect_file_kind(&args.path),
    };
    debug!(?kind, %mode, font_size, "highlighting file");

    let title = args
        .path
        .file_name()
        .map(|name| name.to_string_lossy().into_owned())
        .unwrap_or_else(|| args.path.display().to_string());

    let mut stdout = io::stdout().lock();
    write_header(&mut stdout, &title, kind.language())?;

    match kind.language() {
        Some(language) => {
            let manager = SyntaxManager::new(&config)?;
            let annotated = manager.get_or_compute(language, &text, font_size, mode)?;
            write_annotated(&mut stdout, &annotated)?;
        }
        None => write_plain(&mut stdout, &text)?,
    }
    Ok(())
}

fn parse_args(raw: &[String]) -> Result<Args> {
    let mut path = None;
    let mut mode = None;
    let mut font_size = None;
    let mut language = None;

    let mut iter = raw.iter();
    while let Some(arg) = iter.next() {
        match arg.as_str() {
            "--light" => mode = Some(ThemeMode::Light),
            "--dark" => mode = Some(ThemeMode::Dark),
            "--theme" => {
                let value = iter.next().ok_or_else(|| usage_error("--theme needs a value"))?;
                mode = Some(value.parse::<ThemeMode>()?);
            }
            "--font-size" => {
                let value = iter.next().ok_or_else(|| usage_error("--font-size needs a value"))?;
                let size = value
                    .parse::<f32>()
                    .map_err(|_| usage_error(&format!("invalid font size: {}", value)))?;
                font_size = Some(size);
            }
            "--lang" => {
                let value = iter.next().ok_or_else(|| usage_error("--lang needs a value"))?;
                language = Some(value.to_lowercase());
            }
            other if other.starts_with('-') => {
                return Err(usage_error(&format!("unknown option: {}", other)));
            }
            other => path = Some(PathBuf::from(other)),
        }
    }

    Ok(Args {
        path: path.ok_or_else(|| usage_error("no file given"))?,
        mode,
        font_size,
        language,
    })
}

fn usage_error(msg: &str) -> HighlightError {
    HighlightError::Message(format!("{} (see --help)", msg))
}

fn print_usage() {
    println!("hilite {} - syntax highlighting file viewer", env!("CARGO_PKG_VERSION"));
    println!();
    println!("Usage: hilite [OPTIONS] FILE");
    println!();
    println!("Options:");
    println!("  --light            Use the light palette");
    println!("  --dark             Use the dark palette");
    println!("  --theme NAME       Use a palette by name (light, dark)");
    println!("  --font-size N      Base font size (10-40)");
    println!("  --lang TAG         Override the detected language tag");
    println!("  -h, --help         Show this help message");
    println!("  -V, --version      Show version information");
    println!();
    println!("Config is read from $HILITE_CONFIG or ~/.hilite.toml");
}
