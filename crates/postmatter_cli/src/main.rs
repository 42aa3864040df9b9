//! Command-line front end over `postmatter_core`.
//!
//! # Responsibility
//! - Inspect, convert and scaffold front matter from the shell.
//! - Keep output deterministic so it can be diffed and scripted.
//!
//! # Global flags
//! - `--log-dir <abs path>`: enable rolling file logs in that directory.
//! - `--debug`: log at debug level (requires `--log-dir` or `POSTMATTER_LOG_DIR`).

use anyhow::{bail, Context, Result};
use clap::{Parser, Subcommand};
use log::info;
use postmatter_core::{
    default_log_level, init_logging, list_themes, parse_document, parse_document_with_theme,
    registry, serialize_document, serialize_document_with_theme, starter_post, Dialect,
    FieldValue, LoggingConfig, LoggingError, ParsedDocument, SiteEngine,
};
use std::fs;
use std::path::{Path, PathBuf};

/// Inspect and rewrite Markdown front matter (`---` YAML / `+++` TOML)
#[derive(Parser, Debug)]
#[command(name = "postmatter")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Absolute directory for rolling log files
    #[arg(long, global = true)]
    log_dir: Option<PathBuf>,

    /// Enable debug logging
    #[arg(long, global = true)]
    debug: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Print the decoded front matter of a document
    Parse {
        /// Markdown file to read
        file: PathBuf,
        /// Type fields and fill defaults using this theme's schema
        #[arg(long)]
        theme: Option<String>,
        /// Print JSON instead of key=value lines
        #[arg(long)]
        json: bool,
    },
    /// Re-encode a document's front matter in another dialect
    Convert {
        /// Markdown file to read
        file: PathBuf,
        /// Target dialect: yaml | toml
        #[arg(long)]
        to: String,
        /// Emit only this theme's fields, in schema order
        #[arg(long)]
        theme: Option<String>,
        /// Overwrite the input file instead of printing
        #[arg(long)]
        write: bool,
    },
    /// Create a starter post
    New {
        /// Post title
        title: String,
        /// Site engine: hugo | zola
        #[arg(long, default_value = "hugo")]
        engine: String,
        /// Project root to write into; prints the document when omitted
        #[arg(long)]
        project: Option<PathBuf>,
    },
    /// List built-in themes, or one theme's fields
    Themes {
        /// Show the field schema of this theme
        #[arg(long)]
        theme: Option<String>,
        /// Print JSON
        #[arg(long)]
        json: bool,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    setup_logging(cli.log_dir.as_deref(), cli.debug)?;

    match cli.command {
        Command::Parse { file, theme, json } => run_parse(&file, theme.as_deref(), json),
        Command::Convert {
            file,
            to,
            theme,
            write,
        } => run_convert(&file, &to, theme.as_deref(), write),
        Command::New {
            title,
            engine,
            project,
        } => run_new(&title, &engine, project.as_deref()),
        Command::Themes { theme, json } => run_themes(theme.as_deref(), json),
    }
}

fn setup_logging(log_dir: Option<&Path>, debug: bool) -> Result<()> {
    let config = match log_dir {
        Some(dir) => {
            let level = if debug { "debug" } else { default_log_level() };
            LoggingConfig::new(level, &dir.to_string_lossy())?
        }
        None => match LoggingConfig::from_env() {
            Ok(mut config) => {
                if debug {
                    config.level = "debug";
                }
                config
            }
            Err(LoggingError::MissingLogDir) => return Ok(()),
            Err(err) => return Err(err.into()),
        },
    };
    init_logging(&config).context("failed to initialize logging")
}

fn read_document(file: &Path, theme: Option<&str>) -> Result<ParsedDocument> {
    let raw = fs::read_to_string(file)
        .with_context(|| format!("failed to read {}", file.display()))?;
    Ok(match theme {
        Some(theme) => parse_document_with_theme(&raw, theme),
        None => parse_document(&raw),
    })
}

fn run_parse(file: &Path, theme: Option<&str>, json: bool) -> Result<()> {
    let parsed = read_document(file, theme)?;
    if json {
        let value = serde_json::json!({
            "format": parsed.dialect,
            "has_front_matter": parsed.has_front_matter,
            "ignored_lines": parsed.diagnostics.len(),
            "front_matter": parsed.record,
            "body": parsed.body,
        });
        println!("{}", serde_json::to_string_pretty(&value)?);
        return Ok(());
    }

    println!("format={}", parsed.dialect);
    println!("has_front_matter={}", parsed.has_front_matter);
    for key in ["title", "date", "draft", "tags", "categories", "description"] {
        if let Some(value) = parsed.record.value_of(key) {
            println!("{key}={}", display_value(&value));
        }
    }
    for (key, value) in parsed.record.extra.iter() {
        println!("{key}={}", display_value(value));
    }
    for diagnostic in &parsed.diagnostics {
        eprintln!(
            "warning: ignored block line {} ({:?})",
            diagnostic.line_number, diagnostic.reason
        );
    }
    Ok(())
}

fn run_convert(file: &Path, to: &str, theme: Option<&str>, write: bool) -> Result<()> {
    let Some(dialect) = Dialect::parse(to) else {
        bail!("unsupported target dialect `{to}`; expected yaml|toml");
    };
    let parsed = read_document(file, theme)?;
    let document = match theme {
        Some(theme) => serialize_document_with_theme(&parsed.record, &parsed.body, dialect, theme),
        None => serialize_document(&parsed.record, &parsed.body, dialect),
    };

    if write {
        fs::write(file, &document)
            .with_context(|| format!("failed to write {}", file.display()))?;
        info!(
            "event=cli_convert module=cli status=ok from={} to={}",
            parsed.dialect, dialect
        );
    } else {
        print!("{document}");
    }
    Ok(())
}

fn run_new(title: &str, engine: &str, project: Option<&Path>) -> Result<()> {
    let engine: SiteEngine = engine.parse()?;
    let post = starter_post(title, engine, chrono::Utc::now())?;

    let Some(project) = project else {
        print!("{}", post.document);
        return Ok(());
    };

    let path = project.join(&post.relative_path);
    if path.exists() {
        bail!("file already exists: {}", path.display());
    }
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)
            .with_context(|| format!("failed to create {}", parent.display()))?;
    }
    fs::write(&path, &post.document)
        .with_context(|| format!("failed to write {}", path.display()))?;
    info!("event=cli_new module=cli status=ok engine={engine}");
    println!("{}", path.display());
    Ok(())
}

fn run_themes(theme: Option<&str>, json: bool) -> Result<()> {
    match theme {
        Some(theme_id) => {
            let Some(theme) = registry().lookup(theme_id) else {
                bail!("unknown theme `{theme_id}`");
            };
            if json {
                println!("{}", serde_json::to_string_pretty(theme)?);
                return Ok(());
            }
            for field in theme.fields {
                let default = field
                    .default
                    .map(|value| display_value(&value.to_field_value()))
                    .unwrap_or_default();
                println!(
                    "{}\t{}\t{}\t{}",
                    field.key,
                    field.field_type.as_str(),
                    if field.required { "required" } else { "optional" },
                    default
                );
            }
        }
        None => {
            let themes = list_themes();
            if json {
                println!("{}", serde_json::to_string_pretty(&themes)?);
                return Ok(());
            }
            for theme in themes {
                println!("{}\t{}\t{}", theme.id, theme.name, theme.description);
            }
        }
    }
    Ok(())
}

fn display_value(value: &FieldValue) -> String {
    match value {
        FieldValue::StringArray(items) => format!("[{}]", items.join(", ")),
        other => other.literal().unwrap_or_default(),
    }
}
