use std::io::Write;
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::error::ErrorKind;
use clap::{CommandFactory, Parser, Subcommand};
use helloao_acquire::client::DEFAULT_BASE_URL;
use helloao_acquire::lookup::{self, write_error};
use helloao_acquire::verse::{self, VerseRequest};
use helloao_acquire::{identify, ApiClient, Source};

/// With no subcommand, searches the helloao translation catalog for the
/// Modern Spelling Bible (MSB) and any "Modern ..." translation.
#[derive(Parser)]
#[command(name = "msb-lookup")]
#[command(about = "Look up the Modern Spelling Bible in the helloao Bible API catalog")]
#[command(version = concat!(env!("CARGO_PKG_VERSION"), " (", env!("BUILD_HASH"), ")"))]
struct Cli {
    /// Log level: error, warn, info, debug, trace
    #[arg(long, global = true, default_value = "warn", value_enum)]
    log_level: LogLevel,

    /// Use UTC timestamps instead of local time
    #[arg(long, global = true)]
    utc: bool,

    /// Root of the Bible API
    #[arg(long, global = true, default_value = DEFAULT_BASE_URL)]
    endpoint: String,

    /// Read the catalog from a local JSON file instead of the network
    #[arg(long)]
    catalog_file: Option<PathBuf>,

    #[command(subcommand)]
    command: Option<Commands>,
}

impl Cli {
    /// The top-level `--catalog-file` only feeds the default lookup.
    fn check_catalog_file(&self) -> Result<(), clap::Error> {
        if self.catalog_file.is_some() && self.command.is_some() {
            return Err(Cli::command().error(
                ErrorKind::ArgumentConflict,
                "--catalog-file only applies when no subcommand is given",
            ));
        }
        Ok(())
    }
}

#[derive(Clone, clap::ValueEnum)]
enum LogLevel {
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

#[derive(Subcommand)]
enum Commands {
    /// Print the full catalog entry of the Majority Standard Bible as JSON
    Identify {
        /// Read the catalog from a local JSON file (e.g., translations.json)
        #[arg(long)]
        catalog_file: Option<PathBuf>,
    },

    /// Fetch one chapter and print a single verse
    Verse {
        /// Translation id as used in API paths
        #[arg(short, long, default_value = "eng_msb")]
        translation: String,

        /// Book name or id (e.g., "Exodus", "EXO")
        #[arg(short, long, default_value = "Exodus")]
        book: String,

        #[arg(short, long, default_value_t = 2)]
        chapter: u32,

        #[arg(short, long, default_value_t = 14)]
        verse: u32,

        /// Print the verse block as JSON instead of text
        #[arg(long)]
        json: bool,

        /// Read the chapter from a local JSON file instead of the network
        #[arg(long)]
        chapter_file: Option<PathBuf>,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();
    if let Err(err) = cli.check_catalog_file() {
        err.exit();
    }

    let level = filter_directive(&cli.log_level);
    let env_filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(level));

    // Timestamp format: 2026-02-14 19:44:09.123 -08:00
    let time_format = "%Y-%m-%d %H:%M:%S%.3f %:z";

    // Logs go to stderr; stdout carries only the report
    if cli.utc {
        tracing_subscriber::fmt()
            .with_env_filter(env_filter)
            .with_writer(std::io::stderr)
            .with_timer(tracing_subscriber::fmt::time::ChronoUtc::new(time_format.to_string()))
            .init();
    } else {
        tracing_subscriber::fmt()
            .with_env_filter(env_filter)
            .with_writer(std::io::stderr)
            .with_timer(tracing_subscriber::fmt::time::ChronoLocal::new(time_format.to_string()))
            .init();
    }

    let stdout = std::io::stdout();
    let mut out = stdout.lock();

    match cli.command {
        None => {
            tracing::info!("Searching translation catalog");
            if let Some(source) = pick_source(cli.catalog_file, &cli.endpoint, &mut out)? {
                lookup::run(&source, &mut out).await?;
            }
        }
        Some(Commands::Identify { catalog_file }) => {
            tracing::info!("Identifying MSB catalog entry");
            if let Some(source) = pick_source(catalog_file, &cli.endpoint, &mut out)? {
                identify::run(&source, &mut out).await?;
            }
        }
        Some(Commands::Verse {
            translation,
            book,
            chapter,
            verse: verse_number,
            json,
            chapter_file,
        }) => {
            let request = VerseRequest {
                translation,
                book,
                chapter,
                verse: verse_number,
            };
            tracing::info!(path = %request.chapter_path(), verse = request.verse, "Fetching verse");
            if let Some(source) = pick_source(chapter_file, &cli.endpoint, &mut out)? {
                verse::run(&source, &request, json, &mut out).await?;
            }
        }
    }

    out.flush().context("Failed to write to stdout")?;
    Ok(())
}

/// Map log level, keeping HTTP transport crates quiet at debug/trace
fn filter_directive(level: &LogLevel) -> &'static str {
    match level {
        LogLevel::Error => "error",
        LogLevel::Warn  => "warn",
        LogLevel::Info  => "info",
        LogLevel::Debug => "debug,hyper_util=warn,rustls=warn",
        LogLevel::Trace => "trace,hyper_util=warn,rustls=warn",
    }
}

/// Pick the local file if given, else the API. The HTTP client is only built
/// for the API; if that fails the error is reported like any lookup failure
/// and `None` is returned.
fn pick_source(file: Option<PathBuf>, endpoint: &str, out: &mut impl Write) -> Result<Option<Source>> {
    if let Some(path) = file {
        return Ok(Some(Source::File(path)));
    }
    match ApiClient::new(endpoint) {
        Ok(client) => {
            tracing::debug!(endpoint = %client.base_url(), "Using remote API");
            Ok(Some(Source::Remote(client)))
        }
        Err(err) => {
            write_error(&err, out)?;
            Ok(None)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_verbose_levels_quiet_transport_crates() {
        for level in [LogLevel::Debug, LogLevel::Trace] {
            let directive = filter_directive(&level);
            assert!(directive.contains("hyper_util=warn"));
            assert!(directive.contains("rustls=warn"));
        }
        assert_eq!(filter_directive(&LogLevel::Warn), "warn");
    }

    #[test]
    fn test_local_file_source_skips_client() {
        let mut out = Vec::new();
        let source = pick_source(Some(PathBuf::from("translations.json")), "not a url", &mut out)
            .unwrap()
            .unwrap();
        assert!(matches!(source, Source::File(p) if p == PathBuf::from("translations.json")));
        assert!(out.is_empty());
    }

    #[test]
    fn test_catalog_file_conflicts_with_subcommand() {
        let parse = |args: &[&str]| Cli::try_parse_from(args).unwrap();

        let err = parse(&["msb-lookup", "--catalog-file", "t.json", "verse"])
            .check_catalog_file()
            .unwrap_err();
        assert_eq!(err.kind(), ErrorKind::ArgumentConflict);

        assert!(parse(&["msb-lookup", "--catalog-file", "t.json"]).check_catalog_file().is_ok());
        assert!(parse(&["msb-lookup", "--log-level", "debug", "verse", "--chapter-file", "msb_curl.json"])
            .check_catalog_file()
            .is_ok());
        assert!(parse(&["msb-lookup", "identify", "--catalog-file", "translations.json"])
            .check_catalog_file()
            .is_ok());
    }
}
