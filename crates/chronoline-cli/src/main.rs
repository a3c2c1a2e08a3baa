//! chronoline CLI: Terminal timeline widget and headless inspection commands

use chrono::NaiveDate;
use chronoline_engine::{
    sample_events, Config, Marker, Timeline, ZoomLevel, ZoomTier, CONFIG_FILE_NAME,
};
use clap::{Parser, Subcommand};
use serde::Serialize;
use std::path::{Path, PathBuf};
use tracing_subscriber::EnvFilter;

/// Interactive project timeline in the terminal
#[derive(Parser)]
#[command(name = "chronoline")]
#[command(author, version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// JSON config file (default: ./chronoline.json if present)
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// Write logs to this file (the TUI otherwise discards them)
    #[arg(long, global = true)]
    log_file: Option<PathBuf>,
}

#[derive(Subcommand)]
enum Commands {
    /// Open the timeline (default when no command specified)
    Tui,

    /// Print the padded date range
    Range {
        /// Output as JSON
        #[arg(long)]
        json: bool,
    },

    /// Print axis markers for a zoom level
    Markers {
        /// Zoom level (0.5 to 2.0 in steps of 0.5; defaults to the configured initial zoom)
        #[arg(long, value_parser = parse_zoom)]
        zoom: Option<ZoomLevel>,

        /// Output as JSON
        #[arg(long)]
        json: bool,
    },

    /// Print events with their dates and axis positions
    Events {
        /// Output as JSON
        #[arg(long)]
        json: bool,
    },
}

fn main() {
    let cli = Cli::parse();

    if let Err(e) = run(cli) {
        eprintln!("Error: {e}");
        std::process::exit(1);
    }
}

fn run(cli: Cli) -> Result<(), Box<dyn std::error::Error>> {
    let interactive = matches!(cli.command, None | Some(Commands::Tui));
    init_logging(interactive, cli.log_file.as_deref())?;

    // Nothing shows TUI-mode warnings unless they go to a log file
    let notify = interactive && cli.log_file.is_none();
    let config = match &cli.config {
        Some(path) => Config::load(path)?,
        None => discover_config(&std::env::current_dir()?, notify),
    };
    tracing::debug!(
        theme = ?config.theme,
        zoom = config.initial_zoom,
        padding_months = config.padding_months,
        "Config resolved"
    );

    match cli.command {
        None | Some(Commands::Tui) => chronoline_tui::run_tui(&config)?,
        Some(Commands::Range { json }) => {
            let timeline = load_timeline(&config)?;
            println!("{}", format_range(&timeline, json)?);
        }
        Some(Commands::Markers { zoom, json }) => {
            let timeline = load_timeline(&config)?;
            let zoom = zoom.unwrap_or_else(|| ZoomLevel::new(config.initial_zoom));
            println!("{}", format_markers(&timeline, zoom, json)?);
        }
        Some(Commands::Events { json }) => {
            let timeline = load_timeline(&config)?;
            println!("{}", format_events(&timeline, &config.date_format, json)?);
        }
    }

    Ok(())
}

/// Install the tracing subscriber.
///
/// Headless commands log to stderr. The TUI owns the terminal, so it only
/// logs when a file is given.
fn init_logging(interactive: bool, log_file: Option<&Path>) -> std::io::Result<()> {
    let filter = || EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    match log_file {
        Some(path) => {
            let file = std::fs::OpenOptions::new()
                .create(true)
                .append(true)
                .open(path)?;
            tracing_subscriber::fmt()
                .with_env_filter(filter())
                .with_writer(std::sync::Mutex::new(file))
                .with_ansi(false)
                .init();
        }
        None if interactive => {}
        None => {
            tracing_subscriber::fmt()
                .with_env_filter(filter())
                .with_writer(std::io::stderr)
                .with_target(false)
                .init();
        }
    }
    Ok(())
}

/// Parse `--zoom`, rejecting values the zoom controls could never reach.
fn parse_zoom(value: &str) -> Result<ZoomLevel, String> {
    let number: f64 = value
        .parse()
        .map_err(|_| format!("{value:?} is not a number"))?;
    ZoomLevel::try_new(number).map_err(|e| e.to_string())
}

/// Load `./chronoline.json`, falling back to defaults if it is invalid.
///
/// With `notify` set the fallback is also printed to stderr, for the TUI
/// case where no subscriber would show the warning.
fn discover_config(dir: &Path, notify: bool) -> Config {
    Config::discover(dir).unwrap_or_else(|e| {
        tracing::warn!(error = %e, "Ignoring invalid {CONFIG_FILE_NAME}");
        if notify {
            eprintln!("Warning: ignoring invalid {CONFIG_FILE_NAME}: {e}");
        }
        Config::default()
    })
}

fn load_timeline(config: &Config) -> Result<Timeline, chronoline_engine::TimelineError> {
    Timeline::new(sample_events(), config.padding_months)
}

#[derive(Serialize)]
struct RangeReport {
    min: NaiveDate,
    max: NaiveDate,
    span_days: i64,
}

#[derive(Serialize)]
struct MarkerReport<'a> {
    zoom: f64,
    tier: ZoomTier,
    markers: &'a [Marker],
}

#[derive(Serialize)]
struct EventReport<'a> {
    date: NaiveDate,
    formatted_date: String,
    name: &'a str,
    details: &'a str,
    position: f64,
}

fn format_range(timeline: &Timeline, json: bool) -> serde_json::Result<String> {
    let range = timeline.range();
    if json {
        return serde_json::to_string_pretty(&RangeReport {
            min: range.min(),
            max: range.max(),
            span_days: range.span_days(),
        });
    }
    Ok(format!(
        "{} to {} ({} days)",
        range.min(),
        range.max(),
        range.span_days()
    ))
}

fn format_markers(timeline: &Timeline, zoom: ZoomLevel, json: bool) -> serde_json::Result<String> {
    let markers: Vec<Marker> = timeline.markers(zoom.tier()).iter().collect();
    if json {
        return serde_json::to_string_pretty(&MarkerReport {
            zoom: zoom.value(),
            tier: zoom.tier(),
            markers: &markers,
        });
    }

    let header = format!("{} markers at zoom {:.1}x", zoom.tier(), zoom.value());
    let lines = markers
        .iter()
        .map(|marker| format!("  {}  {}", marker.date, marker.label));
    Ok(std::iter::once(header)
        .chain(lines)
        .collect::<Vec<_>>()
        .join("\n"))
}

fn format_events(timeline: &Timeline, date_format: &str, json: bool) -> serde_json::Result<String> {
    if json {
        let reports: Vec<EventReport<'_>> = timeline
            .event_positions()
            .map(|(_, event, position)| EventReport {
                date: event.date,
                formatted_date: event.formatted_date(date_format),
                name: &event.name,
                details: &event.details,
                position,
            })
            .collect();
        return serde_json::to_string_pretty(&reports);
    }

    let lines: Vec<String> = timeline
        .event_positions()
        .map(|(_, event, position)| {
            format!(
                "{:<12}  {:>5.1}%  {} - {}",
                event.formatted_date(date_format),
                position,
                event.name,
                event.details
            )
        })
        .collect();
    Ok(lines.join("\n"))
}

#[cfg(test)]
mod tests {
    use super::*;
    use chronoline_engine::DEFAULT_PADDING_MONTHS;

    fn sample_timeline() -> Timeline {
        Timeline::new(sample_events(), DEFAULT_PADDING_MONTHS).unwrap()
    }

    #[test]
    fn test_cli_parses_default_to_tui() {
        let cli = Cli::try_parse_from(["chronoline"]).unwrap();
        assert!(cli.command.is_none());
        assert!(cli.config.is_none());
    }

    #[test]
    fn test_cli_parses_markers_with_global_flags() {
        let cli = Cli::try_parse_from([
            "chronoline",
            "markers",
            "--zoom",
            "2",
            "--json",
            "--config",
            "timeline.json",
        ])
        .unwrap();
        assert!(matches!(
            cli.command,
            Some(Commands::Markers { zoom: Some(z), json: true }) if z == ZoomLevel::new(2.0)
        ));
        assert_eq!(cli.config, Some(PathBuf::from("timeline.json")));
    }

    #[test]
    fn test_cli_rejects_bad_zoom() {
        for value in ["0.75", "9", "nan", "wide"] {
            let result = Cli::try_parse_from(["chronoline", "markers", "--zoom", value]);
            assert!(result.is_err(), "--zoom {value} was accepted");
        }
    }

    #[test]
    fn test_parse_zoom_messages() {
        assert_eq!(
            parse_zoom("0.75").unwrap_err(),
            "zoom must be a multiple of 0.5, got 0.75"
        );
        assert_eq!(
            parse_zoom("9").unwrap_err(),
            "zoom must be between 0.5 and 2, got 9"
        );
        assert!(parse_zoom("NaN").is_err());
        assert_eq!(parse_zoom("1.5").unwrap(), ZoomLevel::new(1.5));
    }

    #[test]
    fn test_discover_config_falls_back_on_invalid_file() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(dir.path().join(CONFIG_FILE_NAME), "not json").unwrap();
        assert_eq!(discover_config(dir.path(), false), Config::default());

        std::fs::write(dir.path().join(CONFIG_FILE_NAME), r#"{"padding_months":4}"#).unwrap();
        assert_eq!(discover_config(dir.path(), false).padding_months, 4);
    }

    #[test]
    fn test_cli_rejects_unknown_command() {
        assert!(Cli::try_parse_from(["chronoline", "export"]).is_err());
    }

    #[test]
    fn test_format_range_text() {
        let out = format_range(&sample_timeline(), false).unwrap();
        insta::assert_snapshot!(out, @"2023-11-15 to 2024-07-15 (243 days)");
    }

    #[test]
    fn test_format_range_json() {
        let out = format_range(&sample_timeline(), true).unwrap();
        let value: serde_json::Value = serde_json::from_str(&out).unwrap();
        assert_eq!(value["min"], "2023-11-15");
        assert_eq!(value["max"], "2024-07-15");
        assert_eq!(value["span_days"], 243);
    }

    #[test]
    fn test_format_markers_text() {
        let out = format_markers(&sample_timeline(), ZoomLevel::new(0.5), false).unwrap();
        insta::assert_snapshot!(out, @r"
        Year markers at zoom 0.5x
          2023-11-15  2023
        ");
    }

    #[test]
    fn test_format_markers_json() {
        let out = format_markers(&sample_timeline(), ZoomLevel::default(), true).unwrap();
        let value: serde_json::Value = serde_json::from_str(&out).unwrap();
        assert_eq!(value["tier"], "month");
        assert_eq!(value["markers"].as_array().unwrap().len(), 9);
        assert_eq!(value["markers"][0]["label"], "Nov");
        assert_eq!(value["markers"][8]["date"], "2024-07-15");
    }

    #[test]
    fn test_format_events_text() {
        let out = format_events(&sample_timeline(), chronoline_engine::DEFAULT_DATE_FORMAT, false)
            .unwrap();
        insta::assert_snapshot!(out, @r"
        Jan 15, 2024   25.1%  Project Start - Kickoff meeting
        Feb 1, 2024    32.1%  Phase 1 - Requirements gathering
        Mar 15, 2024   49.8%  Milestone - Design approval
        Apr 1, 2024    56.8%  Phase 2 - Development begins
        May 15, 2024   74.9%  Review - Client presentation
        ");
    }

    #[test]
    fn test_format_events_json() {
        let out = format_events(&sample_timeline(), "%Y/%m/%d", true).unwrap();
        let value: serde_json::Value = serde_json::from_str(&out).unwrap();
        let events = value.as_array().unwrap();
        assert_eq!(events.len(), 5);
        assert_eq!(events[2]["name"], "Milestone");
        assert_eq!(events[2]["formatted_date"], "2024/03/15");
        let position = events[0]["position"].as_f64().unwrap();
        assert!((position - 25.102_880_658_436_217).abs() < 1e-9);
    }
}
