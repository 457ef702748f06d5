//! Category Grid - Entry Point

use catgrid::model::AppError;
use catgrid::presentation::{ClockTimestampFormatter, ItemPresenter, OriginLinkBuilder};
use catgrid::report::PlanReport;
use catgrid::state::GridDisplay;
use catgrid::view::ColorConfig;
use clap::Parser;
use std::path::PathBuf;
use tracing::{info, warn};

/// Category Grid - paginated layout planner for content feeds
#[derive(Parser, Debug)]
#[command(name = "catgrid")]
#[command(version)]
#[command(about = "Plan and preview paginated category grids of content feeds")]
pub struct Args {
    /// Path to JSON feed file (reads from stdin if not provided)
    pub file: Option<PathBuf>,

    /// Layout variant (grid, hero, griffin)
    #[arg(long)]
    pub layout: Option<String>,

    /// Show pagination controls
    #[arg(long)]
    pub pagination: bool,

    /// Start at specific page number (must be positive)
    #[arg(long, default_value = "1", value_parser = clap::value_parser!(u32).range(1..))]
    pub page: u32,

    /// Print the layout plan of the page as JSON instead of starting the preview
    #[arg(long)]
    pub plan: bool,

    /// Origin that item links are rooted at
    #[arg(long)]
    pub origin: Option<String>,

    /// Disable colors
    #[arg(long)]
    pub no_color: bool,

    /// Path to configuration file
    #[arg(long)]
    pub config: Option<PathBuf>,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args = Args::parse();

    if args.no_color {
        std::env::set_var("NO_COLOR", "1");
    }

    run(args)?;
    Ok(())
}

fn run(args: Args) -> Result<(), AppError> {
    // Defaults → Config File → Env Vars → CLI Args
    let config = {
        let config_file = catgrid::config::load_config_with_precedence(args.config.clone())?;
        let merged = catgrid::config::merge_config(config_file);
        let with_env = catgrid::config::apply_env_overrides(merged);

        let pagination_override = args.pagination.then_some(true);
        catgrid::config::apply_cli_overrides(
            with_env,
            args.layout.clone(),
            pagination_override,
            args.origin.clone(),
        )
    };

    catgrid::logging::init(&config.log_file_path)?;

    info!(
        config = ?config,
        "Configuration loaded and resolved"
    );

    let feed = catgrid::source::detect_input_source(args.file.clone())?.load_feed()?;

    let mut grid = GridDisplay::new(feed.items, config.display)?;
    go_to_page(&mut grid, args.page);

    let links = match config.origin.as_deref() {
        Some(origin) => OriginLinkBuilder::parse(origin)?,
        None => OriginLinkBuilder::without_origin(),
    };
    let presenter = ItemPresenter::new(
        links,
        ClockTimestampFormatter::system(),
        &grid.config().layout.item_display,
    );

    if args.plan {
        let plan = grid.plan();
        let report = PlanReport::new(&grid, &plan, &presenter);
        println!("{}", serde_json::to_string_pretty(&report)?);
        return Ok(());
    }

    catgrid::view::run_preview(
        grid,
        presenter,
        feed.headline,
        ColorConfig::from_env_and_args(args.no_color),
    )?;

    Ok(())
}

/// Advance to the 1-based `page`. Displays without pagination controls stay
/// on the first page.
fn go_to_page(grid: &mut GridDisplay, page: u32) {
    if page <= 1 {
        return;
    }
    if !grid.config().show_pagination {
        warn!(
            requested = page,
            "Pagination is disabled, staying on the first page"
        );
        return;
    }
    for _ in 1..page {
        if !grid.advance() {
            warn!(
                requested = page,
                total_pages = grid.total_pages(),
                "Requested page is past the last page"
            );
            break;
        }
    }
}
