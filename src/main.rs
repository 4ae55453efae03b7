//! TextForm CLI
//!
//! Launches the terminal UI by default; the desktop GUI and the one-shot
//! `filter` / `highlight` commands share the same form and search engine.

use clap::{Parser, Subcommand};
use console::style;
use log::LevelFilter;
use std::io::BufRead;
use std::path::PathBuf;
use std::time::{Duration, Instant};
use textform::{logging, AppConfig, Segment, TextForm, NO_RESULTS, VERSION};

/// TextForm - text entry form with incremental search
///
/// Add entries, then type in the search box to filter and highlight them.
#[derive(Parser)]
#[command(name = "textform")]
#[command(author = "TextForm Contributors")]
#[command(version)]
#[command(about = "Text entry form with incremental, highlighting search", long_about = None)]
struct Cli {
    /// JSON config file
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// Search debounce delay in milliseconds (0 = search on every keystroke)
    #[arg(long, global = true)]
    debounce_ms: Option<u64>,

    /// Log file path (default: textform.log next to the executable)
    #[arg(long, global = true)]
    log_file: Option<PathBuf>,

    /// Minimum log level (off, error, warn, info, debug, trace)
    #[arg(long, global = true)]
    log_level: Option<String>,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Interactive terminal UI (default)
    Tui,

    /// Desktop window
    Gui,

    /// Filter entries by a query and print the highlighted matches
    Filter {
        /// Search query; every whitespace-separated term must match
        #[arg(allow_hyphen_values = true)]
        query: String,

        /// Entries to search (reads lines from stdin when omitted)
        entries: Vec<String>,

        /// Print <mark> markup instead of terminal styling
        #[arg(long, conflicts_with = "json")]
        markup: bool,

        /// Print matches as a JSON array
        #[arg(long)]
        json: bool,
    },

    /// Print TEXT with the QUERY terms wrapped in <mark> tags
    Highlight {
        /// Search query
        #[arg(allow_hyphen_values = true)]
        query: String,

        /// Text to highlight
        #[arg(allow_hyphen_values = true)]
        text: String,
    },
}

fn main() {
    let cli = Cli::parse();

    if let Err(e) = run(cli) {
        eprintln!("{} {}", style("Error:").red().bold(), e);
        std::process::exit(1);
    }
}

fn run(cli: Cli) -> textform::Result<()> {
    let config = match resolve_config(&cli) {
        Ok(config) => config,
        Err(e) => {
            // No config to take log settings from; the flags still apply
            let level = cli
                .log_level
                .as_deref()
                .and_then(|name| logging::parse_level(name).ok())
                .unwrap_or(LevelFilter::Warn);
            if logging::init(cli.log_file.as_deref(), level).is_ok() {
                log::error!(target: "main", "{}", e);
                logging::flush();
            }
            return Err(e);
        }
    };

    let level = logging::parse_level(&config.log_level)?;
    if let Err(e) = logging::init(config.log_file.as_deref(), level) {
        if !e.is_recoverable() {
            return Err(e);
        }
    }
    logging::separator(&format!("TextForm {} starting up", VERSION));

    let result = match cli.command {
        None | Some(Commands::Tui) => textform::tui::run(&config),

        Some(Commands::Gui) => textform::gui::run(&config),

        Some(Commands::Filter {
            query,
            entries,
            markup,
            json,
        }) => {
            let format = if json {
                Format::Json
            } else if markup {
                Format::Markup
            } else {
                Format::Styled
            };
            cmd_filter(&query, entries, format)
        }

        Some(Commands::Highlight { query, text }) => cmd_highlight(&query, &text),
    };

    if let Err(ref e) = result {
        log::error!(target: "main", "{}", e);
    }
    logging::flush();
    result
}

/// Config file first, then command-line overrides
fn resolve_config(cli: &Cli) -> textform::Result<AppConfig> {
    let mut config = match &cli.config {
        Some(path) => AppConfig::load(path)?,
        None => AppConfig::default(),
    };

    if let Some(ms) = cli.debounce_ms {
        config.debounce_ms = ms;
    }
    if let Some(path) = &cli.log_file {
        config.log_file = Some(path.clone());
    }
    if let Some(level) = &cli.log_level {
        config.log_level = level.clone();
    }

    Ok(config)
}

/// Output of the `filter` command
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Format {
    Styled,
    Markup,
    Json,
}

/// Filter command implementation
fn cmd_filter(query: &str, entries: Vec<String>, format: Format) -> textform::Result<()> {
    let entries = if entries.is_empty() {
        read_entries(std::io::stdin().lock())?
    } else {
        entries
    };

    for line in render_filter(query, entries, format)? {
        println!("{}", line);
    }
    Ok(())
}

fn read_entries(reader: impl BufRead) -> textform::Result<Vec<String>> {
    Ok(reader.lines().collect::<std::io::Result<Vec<_>>>()?)
}

/// Submit every entry through the form, so blank ones are skipped
fn build_form(entries: Vec<String>) -> TextForm {
    // One-shot: no keystrokes to coalesce
    let mut form = TextForm::new(Duration::ZERO);
    for entry in entries {
        form.update_draft(entry);
        form.submit();
    }
    form
}

fn render_filter(
    query: &str,
    entries: Vec<String>,
    format: Format,
) -> textform::Result<Vec<String>> {
    let mut form = build_form(entries);
    form.update_query(query, Instant::now());
    log::info!(
        target: "main",
        "filter: {} of {} entries match '{}'",
        form.results().len(),
        form.items().len(),
        query
    );

    if format == Format::Json {
        return Ok(vec![serde_json::to_string_pretty(form.results())?]);
    }

    if form.results().is_empty() {
        if query.trim().is_empty() {
            return Ok(Vec::new());
        }
        return Ok(vec![style(NO_RESULTS).dim().to_string()]);
    }

    let highlighter = form.highlighter();
    let lines = form
        .results()
        .iter()
        .enumerate()
        .map(|(i, entry)| match (format, highlighter) {
            (Format::Markup, Some(h)) => h.markup(entry),
            (Format::Markup, None) => entry.clone(),
            _ => {
                let segments = highlighter
                    .map_or_else(|| vec![Segment::Plain(entry.as_str())], |h| h.segments(entry));
                format!(
                    "  {} {}",
                    style(format!("{:3}.", i + 1)).dim(),
                    styled(&segments)
                )
            }
        })
        .collect();

    Ok(lines)
}

/// Highlight command implementation
fn cmd_highlight(query: &str, text: &str) -> textform::Result<()> {
    println!("{}", textform::highlight(text, query));
    Ok(())
}

fn styled(segments: &[Segment<'_>]) -> String {
    segments
        .iter()
        .map(|segment| match segment {
            Segment::Plain(s) => s.to_string(),
            Segment::Highlight(s) => style(s).black().on_yellow().bold().to_string(),
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::ffi::OsString;
    use std::io::Cursor;

    fn entries(items: &[&str]) -> Vec<String> {
        items.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn stdin_lines_become_entries_and_blanks_are_skipped() {
        let lines = read_entries(Cursor::new("alpha\n\nbeta\n   \ngamma")).unwrap();
        assert_eq!(lines.len(), 5);

        let form = build_form(lines);
        assert_eq!(form.items(), &entries(&["alpha", "beta", "gamma"])[..]);
    }

    #[test]
    fn markup_wraps_matches() {
        let items = entries(&["alpha", "beta", "Phone"]);
        let lines = render_filter("ph", items, Format::Markup).unwrap();
        assert_eq!(lines, vec!["al<mark>ph</mark>a", "<mark>Ph</mark>one"]);
    }

    #[test]
    fn json_prints_the_matching_entries() {
        let lines = render_filter("a", entries(&["alpha", "beta", "xyz"]), Format::Json).unwrap();
        assert_eq!(lines.len(), 1);
        let parsed: Vec<String> = serde_json::from_str(&lines[0]).unwrap();
        assert_eq!(parsed, entries(&["alpha", "beta"]));
    }

    #[test]
    fn json_with_no_matches_is_an_empty_array() {
        let lines = render_filter("zzz", entries(&["alpha"]), Format::Json).unwrap();
        let parsed: Vec<String> = serde_json::from_str(&lines[0]).unwrap();
        assert!(parsed.is_empty());
    }

    #[test]
    fn styled_lines_are_numbered() {
        let lines = render_filter("be", entries(&["alpha", "beta"]), Format::Styled).unwrap();
        assert_eq!(lines.len(), 1);
        assert!(lines[0].contains("1."));
        assert!(lines[0].contains("ta"));
    }

    #[test]
    fn no_match_prints_placeholder() {
        for format in [Format::Styled, Format::Markup] {
            let lines = render_filter("zzz", entries(&["alpha"]), format).unwrap();
            assert_eq!(lines.len(), 1);
            assert!(lines[0].contains(NO_RESULTS));
        }
    }

    #[test]
    fn blank_query_prints_nothing() {
        for query in ["", "   "] {
            for format in [Format::Styled, Format::Markup] {
                assert!(render_filter(query, entries(&["alpha"]), format)
                    .unwrap()
                    .is_empty());
            }
        }
    }

    #[test]
    fn markup_and_json_conflict() {
        let parsed = Cli::try_parse_from(["textform", "filter", "a", "--markup", "--json"]);
        assert!(parsed.is_err());
    }

    #[test]
    fn highlight_accepts_hyphenated_arguments() {
        let cli = Cli::try_parse_from(["textform", "highlight", "-x", "a-x b"]).unwrap();
        match cli.command {
            Some(Commands::Highlight { query, text }) => {
                assert_eq!(textform::highlight(&text, &query), "a<mark>-x</mark> b");
            }
            _ => panic!("expected the highlight command"),
        }
    }

    #[test]
    fn config_errors_are_logged() {
        let dir = std::env::temp_dir().join(format!("textform-cli-{}", std::process::id()));
        std::fs::create_dir_all(&dir).unwrap();
        let config = dir.join("broken.json");
        let log = dir.join("textform.log");
        std::fs::write(&config, "{ not json").unwrap();

        let args: Vec<OsString> = vec![
            "textform".into(),
            "--config".into(),
            config.clone().into_os_string(),
            "--log-file".into(),
            log.clone().into_os_string(),
            "highlight".into(),
            "a".into(),
            "b".into(),
        ];
        let cli = Cli::try_parse_from(args).unwrap();

        assert!(matches!(
            run(cli),
            Err(textform::TextFormError::ConfigParseError(..))
        ));
        let logged = std::fs::read_to_string(&log).unwrap();
        assert!(logged.contains("[ERROR]"));
        assert!(logged.contains("broken.json"));

        let _ = std::fs::remove_dir_all(&dir);
    }
}
