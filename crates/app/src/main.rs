mod config;
mod notifier;

use anyhow::Result;
use clap::Parser;
use notifier::ConsoleNotifier;
use services::{Inspector, Surfaces};
use shared::settings::Settings;
use std::path::PathBuf;
use std::process::ExitCode;
use viewers::{open_in_browser, HtmlReport};

#[derive(Parser, Debug)]
#[command(name = "csvscope")]
#[command(about = "Inspect CSV files: column types, charts and a data table as an HTML report", long_about = None)]
struct Cli {
    /// CSV files to inspect, in order
    files: Vec<PathBuf>,

    /// Directory for the generated reports
    #[arg(short, long)]
    out_dir: Option<PathBuf>,

    /// Field delimiter (guessed when omitted)
    #[arg(short, long)]
    delimiter: Option<char>,

    /// Trim whitespace around fields
    #[arg(long)]
    trim: bool,

    /// chrono format for chart date labels
    #[arg(long)]
    date_format: Option<String>,

    /// Open each report in the default browser
    #[arg(long)]
    open: bool,

    /// Settings file to use instead of the default one
    #[arg(long)]
    config: Option<PathBuf>,

    /// Debug logging
    #[arg(short, long)]
    verbose: bool,
}

impl Cli {
    /// Flags win over the settings file; unset flags leave it alone.
    fn apply(&self, settings: &mut Settings) {
        if let Some(dir) = &self.out_dir {
            settings.output_dir = Some(dir.clone());
        }
        if let Some(d) = self.delimiter {
            settings.delimiter = Some(d);
        }
        if self.trim {
            settings.trim = true;
        }
        if let Some(fmt) = &self.date_format {
            settings.date_label_format = fmt.clone();
        }
        if self.open {
            settings.open_in_browser = true;
        }
    }
}

fn init_tracing(verbose: bool) {
    let default = if verbose { "debug" } else { "info" };
    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(default));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn run(cli: Cli) -> Result<ExitCode> {
    let mut settings = config::load_settings(cli.config.as_deref())?;
    cli.apply(&mut settings);

    let mut inspector = Inspector::from_settings(&settings);
    // One report page for the whole session, like a single browser tab.
    let mut report = HtmlReport::new(settings.chartjs_src.clone());
    let mut notifier = ConsoleNotifier::default();

    let selections: Vec<Option<PathBuf>> = if cli.files.is_empty() {
        vec![None]
    } else {
        cli.files.into_iter().map(Some).collect()
    };

    for selection in &selections {
        let outcome = {
            let mut surfaces = Surfaces {
                charts: &mut report.charts,
                table: &mut report.table,
                notifier: &mut notifier,
            };
            inspector.select_file(selection.as_deref(), &mut surfaces)
        };

        let (Some(path), Ok(analysis)) = (selection, outcome) else {
            continue;
        };

        let target = config::report_path(path, settings.output_dir.as_deref());
        report.write_to(&target, &analysis.source)?;

        println!(
            "{}: {} rows, {} time / {} numeric / {} boolean / {} categorical columns, {} charts -> {}",
            analysis.source,
            analysis.row_count,
            analysis.classification.time_columns.len(),
            analysis.classification.numeric_columns.len(),
            analysis.classification.boolean_columns.len(),
            analysis.classification.categorical_columns.len(),
            analysis.charts.len(),
            target.display()
        );

        if settings.open_in_browser {
            if let Err(e) = open_in_browser(&target) {
                tracing::warn!("{:#}", e);
            }
        }
    }

    tracing::debug!(
        created = report.charts.created_count(),
        destroyed = report.charts.destroyed_count(),
        "session finished"
    );

    Ok(if notifier.alert_count() > 0 {
        ExitCode::FAILURE
    } else {
        ExitCode::SUCCESS
    })
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    match run(cli) {
        Ok(code) => code,
        Err(e) => {
            eprintln!("csvscope: {:#}", e);
            ExitCode::FAILURE
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn flags_override_settings() {
        let cli = Cli::parse_from([
            "csvscope",
            "-d",
            ";",
            "--trim",
            "--date-format",
            "%Y-%m-%d",
            "--open",
            "-o",
            "reports",
            "data.csv",
        ]);
        let mut settings = Settings::default();
        cli.apply(&mut settings);

        assert_eq!(settings.delimiter, Some(';'));
        assert!(settings.trim);
        assert_eq!(settings.date_label_format, "%Y-%m-%d");
        assert!(settings.open_in_browser);
        assert_eq!(settings.output_dir, Some(PathBuf::from("reports")));
        assert_eq!(cli.files, vec![PathBuf::from("data.csv")]);
    }

    #[test]
    fn unset_flags_keep_file_settings() {
        let cli = Cli::parse_from(["csvscope", "data.csv"]);
        let mut settings = Settings {
            delimiter: Some('|'),
            trim: true,
            open_in_browser: true,
            ..Settings::default()
        };
        let before = settings.clone();
        cli.apply(&mut settings);
        assert_eq!(settings, before);
    }
}
