//! The daily report run: read config, fetch catalog and trends, rank, append.
//!
//! Catalog and sink failures abort the run. Trends failures and an
//! unreadable config worksheet are logged and the run carries on.

use anyhow::Context;
use chrono::NaiveDate;
use mangatrend_anilist::{AnilistClient, CatalogQuery};
use mangatrend_core::{rank_entries, AppConfig, RunConfig, ScoredEntry};
use mangatrend_sheets::SheetsClient;
use mangatrend_trends::{collect_trends, TrendsClient, TrendsOutcome};

/// Trends never contribute more than this many entries.
pub(crate) const TRENDS_LIMIT_CAP: usize = 20;

#[derive(Debug, Clone)]
pub(crate) struct RunOptions {
    pub query: CatalogQuery,
    pub include_trends: bool,
    pub dry_run: bool,
}

#[derive(Debug)]
pub(crate) struct RunSummary {
    pub date: NaiveDate,
    pub run_config: RunConfig,
    pub rows: Vec<ScoredEntry>,
    pub catalog_count: usize,
    pub trends: TrendsOutcome,
    /// Rows appended to the sheet; zero on a dry run.
    pub written: usize,
}

/// Connects to the spreadsheet named by `config`.
///
/// # Errors
///
/// Returns an error if the credentials are invalid or the token exchange fails.
pub(crate) async fn connect_sheets(config: &AppConfig) -> anyhow::Result<SheetsClient> {
    SheetsClient::connect_with_base_url(
        &config.sheets_credentials,
        &config.sheet_id,
        config.request_timeout_secs,
        &config.user_agent,
        &config.sheets_url,
    )
    .await
    .context("failed to authenticate with Google Sheets")
}

/// Executes one report run dated `date`.
///
/// # Errors
///
/// Returns an error if Sheets authentication fails, the catalog fetch fails,
/// or (outside a dry run) the append to the output worksheet fails.
pub(crate) async fn run_report(
    config: &AppConfig,
    options: &RunOptions,
    date: NaiveDate,
) -> anyhow::Result<RunSummary> {
    let sheets = connect_sheets(config).await?;
    let run_config = sheets.read_run_config(&config.config_sheet).await;

    let anilist = AnilistClient::with_endpoint(
        config.request_timeout_secs,
        &config.user_agent,
        &config.anilist_url,
    )
    .context("failed to build AniList client")?;
    let catalog = anilist
        .fetch_catalog(&options.query, run_config.limit)
        .await
        .context("AniList catalog fetch failed")?;
    let catalog_count = catalog.len();
    tracing::info!(
        count = catalog_count,
        limit = run_config.limit,
        "collected catalog entries"
    );

    let trends = if options.include_trends {
        fetch_trends(config, &run_config).await
    } else {
        TrendsOutcome::Disabled
    };

    let mut entries = catalog;
    entries.extend(trends.clone().into_entries());
    let rows = rank_entries(entries, date);

    let written = if options.dry_run {
        0
    } else {
        sheets
            .append_entries(&config.output_sheet, &rows)
            .await
            .with_context(|| format!("failed to append rows to {}", config.output_sheet))?
    };

    Ok(RunSummary {
        date,
        run_config,
        rows,
        catalog_count,
        trends,
        written,
    })
}

async fn fetch_trends(config: &AppConfig, run_config: &RunConfig) -> TrendsOutcome {
    let client = match TrendsClient::with_base_url(
        config.request_timeout_secs,
        &config.user_agent,
        config.trends_delay_ms,
        &config.trends_url,
    ) {
        Ok(client) => client,
        Err(e) => {
            tracing::warn!(error = %e, "failed to build trends client; skipping trends");
            return TrendsOutcome::Skipped {
                reason: e.to_string(),
            };
        }
    };
    collect_trends(
        &client,
        &run_config.country,
        run_config.limit.min(TRENDS_LIMIT_CAP),
    )
    .await
}

#[cfg(test)]
#[path = "run_test.rs"]
mod tests;
