mod run;

use chrono::Utc;
use clap::{Parser, Subcommand, ValueEnum};
use mangatrend_anilist::CatalogQuery;
use mangatrend_trends::TrendsOutcome;
use tracing_subscriber::EnvFilter;

use crate::run::{connect_sheets, run_report, RunOptions, RunSummary};

#[derive(Debug, Parser)]
#[command(name = "mangatrend")]
#[command(about = "Collect manga trend signals into a Google Sheet")]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Debug, Subcommand)]
enum Commands {
    /// Fetch, rank, and append today's rows (the default command)
    Run {
        /// Which catalog ranking to collect
        #[arg(long, value_enum, default_value_t = Variant::Trending)]
        variant: Variant,

        /// Skip Google Trends and collect catalog data only
        #[arg(long)]
        no_trends: bool,

        /// Do not top up a filtered catalog from the popularity ranking
        #[arg(long)]
        no_fallback: bool,

        /// Print the rows instead of appending them to the sheet
        #[arg(long)]
        dry_run: bool,
    },
    /// Show the run configuration read from the config worksheet
    Config,
}

/// Catalog query presets.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum Variant {
    /// Trending manga of any status
    Trending,
    /// Trending manga filtered to finished ones locally, with fallback
    CompletedLocal,
    /// Most popular finished manga, filtered by AniList
    CompletedSource,
}

impl Variant {
    fn query(self) -> CatalogQuery {
        match self {
            Variant::Trending => CatalogQuery::trending(),
            Variant::CompletedLocal => CatalogQuery::completed_local(),
            Variant::CompletedSource => CatalogQuery::completed_source(),
        }
    }
}

impl Commands {
    fn default_run() -> Self {
        Commands::Run {
            variant: Variant::Trending,
            no_trends: false,
            no_fallback: false,
            dry_run: false,
        }
    }
}

fn run_options(variant: Variant, no_trends: bool, no_fallback: bool, dry_run: bool) -> RunOptions {
    let mut query = variant.query();
    if no_fallback {
        query = query.with_fallback(false);
    }
    RunOptions {
        query,
        include_trends: !no_trends,
        dry_run,
    }
}

fn print_summary(summary: &RunSummary, dry_run: bool) {
    let date = summary.date.format("%Y-%m-%d");
    if let TrendsOutcome::Skipped { reason } = &summary.trends {
        eprintln!("trends skipped: {reason}");
    }
    if dry_run {
        for row in &summary.rows {
            println!(
                "{}\t{}\t{}\t{:.2}\t{}\t{}",
                row.date_string(),
                row.title,
                row.source,
                row.score,
                row.details,
                row.status
            );
        }
        println!(
            "dry-run: would write {} rows for {date}",
            summary.rows.len()
        );
    } else {
        println!("Wrote {} rows for {date}", summary.written);
    }
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let config = mangatrend_core::load_app_config()?;
    let env_filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(config.log_level.clone()))?;
    tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_writer(std::io::stderr)
        .init();

    match cli.command.unwrap_or_else(Commands::default_run) {
        Commands::Run {
            variant,
            no_trends,
            no_fallback,
            dry_run,
        } => {
            let options = run_options(variant, no_trends, no_fallback, dry_run);
            let today = Utc::now().date_naive();
            let summary = run_report(&config, &options, today).await?;
            tracing::info!(
                catalog = summary.catalog_count,
                rows = summary.rows.len(),
                written = summary.written,
                limit = summary.run_config.limit,
                country = %summary.run_config.country,
                "run complete"
            );
            print_summary(&summary, options.dry_run);
        }
        Commands::Config => {
            let sheets = connect_sheets(&config).await?;
            let run_config = sheets.read_run_config(&config.config_sheet).await;
            println!("limit={}", run_config.limit);
            println!("country={}", run_config.country);
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests;
