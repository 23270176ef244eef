use super::*;

#[test]
fn no_command_is_none() {
    let cli = Cli::try_parse_from(["mangatrend"]).expect("expected valid cli args");
    assert!(cli.command.is_none());
}

#[test]
fn no_command_defaults_to_trending_run() {
    let cli = Cli::try_parse_from(["mangatrend"]).unwrap();
    assert!(matches!(
        cli.command.unwrap_or_else(Commands::default_run),
        Commands::Run {
            variant: Variant::Trending,
            no_trends: false,
            no_fallback: false,
            dry_run: false
        }
    ));
}

#[test]
fn parses_run_with_defaults() {
    let cli = Cli::try_parse_from(["mangatrend", "run"]).expect("expected valid cli args");
    assert!(matches!(
        cli.command,
        Some(Commands::Run {
            variant: Variant::Trending,
            no_trends: false,
            no_fallback: false,
            dry_run: false
        })
    ));
}

#[test]
fn parses_run_variant_and_flags() {
    let cli = Cli::try_parse_from([
        "mangatrend",
        "run",
        "--variant",
        "completed-local",
        "--no-trends",
        "--no-fallback",
        "--dry-run",
    ])
    .unwrap();
    assert!(matches!(
        cli.command,
        Some(Commands::Run {
            variant: Variant::CompletedLocal,
            no_trends: true,
            no_fallback: true,
            dry_run: true
        })
    ));
}

#[test]
fn parses_completed_source_variant() {
    let cli =
        Cli::try_parse_from(["mangatrend", "run", "--variant", "completed-source"]).unwrap();
    assert!(matches!(
        cli.command,
        Some(Commands::Run {
            variant: Variant::CompletedSource,
            ..
        })
    ));
}

#[test]
fn rejects_unknown_variant() {
    let result = Cli::try_parse_from(["mangatrend", "run", "--variant", "popular"]);
    assert!(result.is_err());
}

#[test]
fn parses_config_command() {
    let cli = Cli::try_parse_from(["mangatrend", "config"]).unwrap();
    assert!(matches!(cli.command, Some(Commands::Config)));
}

#[test]
fn variants_map_to_catalog_presets() {
    assert_eq!(Variant::Trending.query(), CatalogQuery::trending());
    assert_eq!(
        Variant::CompletedLocal.query(),
        CatalogQuery::completed_local()
    );
    assert_eq!(
        Variant::CompletedSource.query(),
        CatalogQuery::completed_source()
    );
}

#[test]
fn no_fallback_disables_fallback_on_the_query() {
    let options = run_options(Variant::CompletedLocal, false, true, false);
    assert_eq!(
        options.query,
        CatalogQuery::completed_local().with_fallback(false)
    );
    assert!(options.include_trends);
    assert!(!options.dry_run);
}

#[test]
fn no_trends_and_dry_run_flow_into_options() {
    let options = run_options(Variant::Trending, true, false, true);
    assert_eq!(options.query, CatalogQuery::trending());
    assert!(!options.include_trends);
    assert!(options.dry_run);
}
