//! Command-line interface
//!
//! Loads a table's rows from a JSON export or the API, applies a view and
//! prints the page.

use std::path::PathBuf;

use anyhow::{Result, bail};
use clap::{Args, Parser, Subcommand};

use crate::data_table::data_provider::{HttpRowSource, JsonFileSource, RowSource};
use crate::data_table::render::DataTable;
use crate::data_table::sort::{SortConfig, SortDirection};
use crate::domain::config::AppConfig;
use crate::domain::record::Row;
use crate::domain::tables::TableKind;
use crate::state::saved_views::SavedViews;
use crate::state::table_state::{TableLoadState, TableScreen, TableViewState};
use crate::utils::config_store::load_app_config;
use crate::utils::format::format_datetime;

/// lotto-admin - Lottery back-office tables
#[derive(Parser)]
#[command(name = "lotto-admin")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Config file (defaults to the platform config directory)
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    /// Increase log verbosity (-v info, -vv debug, -vvv trace)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// List the available tables with their columns and search fields
    Tables,
    /// Show one page of a table
    View(ViewArgs),
    /// List saved table views
    Views {
        /// Delete every saved view
        #[arg(long)]
        clear: bool,
    },
}

#[derive(Args)]
pub struct ViewArgs {
    /// Table to show (managers, executives, operators, activity-logs,
    /// betting-summary, winning-summary)
    pub table: TableKind,

    /// Read rows from a JSON export instead of the API
    #[arg(long)]
    pub file: Option<PathBuf>,

    /// Column to sort by
    #[arg(long)]
    pub sort: Option<String>,

    /// Sort descending
    #[arg(long)]
    pub desc: bool,

    /// Column filter as KEY=VALUE (repeatable)
    #[arg(long = "filter", value_parser = parse_filter)]
    pub filters: Vec<(String, String)>,

    /// Free-text search across the table's search fields
    #[arg(long)]
    pub search: Option<String>,

    /// Page number, starting at 1
    #[arg(long, value_parser = clap::value_parser!(u64).range(1..))]
    pub page: Option<u64>,

    /// Rows per page
    #[arg(long, value_parser = clap::value_parser!(u64).range(1..))]
    pub rows_per_page: Option<u64>,

    /// Ignore the saved view for this table
    #[arg(long)]
    pub fresh: bool,

    /// Save the resulting view for next time
    #[arg(long)]
    pub save: bool,
}

fn parse_filter(raw: &str) -> Result<(String, String), String> {
    match raw.split_once('=') {
        Some((key, value)) if !key.trim().is_empty() => {
            Ok((key.trim().to_string(), value.to_string()))
        }
        _ => Err(format!("expected KEY=VALUE, got '{raw}'")),
    }
}

/// Execute a parsed command line
pub fn run(cli: Cli) -> Result<()> {
    let config = load_app_config(cli.config.as_deref())?;

    match cli.command {
        Commands::Tables => {
            print!("{}", describe_tables());
            Ok(())
        }
        Commands::View(args) => view_table(&config, args),
        Commands::Views { clear } => list_views(clear),
    }
}

fn describe_tables() -> String {
    let mut out = String::new();
    for kind in TableKind::ALL {
        let columns: Vec<&str> = kind.column_specs().iter().map(|spec| spec.id).collect();
        out.push_str(&format!(
            "{:<16} /{:<16} sort: {} {}\n  columns: {}\n  search:  {}\n",
            kind.name(),
            kind.endpoint(),
            kind.default_sort().key,
            kind.default_sort().direction,
            columns.join(", "),
            kind.search_keys().join(", "),
        ));
    }
    out
}

/// Start from the saved view (unless `fresh`), then apply the command-line overrides
fn resolve_view_state(
    kind: TableKind,
    config: &AppConfig,
    saved: &SavedViews,
    args: &ViewArgs,
) -> TableViewState {
    let mut state = match saved.get(kind) {
        Some(view) if !args.fresh => view.state.clone(),
        _ => TableViewState::for_table(kind, &config.table),
    };

    let direction = if args.desc {
        SortDirection::Desc
    } else {
        SortDirection::Asc
    };
    match &args.sort {
        Some(key) => {
            if !kind.has_column(key) {
                tracing::warn!(table = %kind, key = %key, "Sorting by a column the table does not show");
            }
            state.sort = SortConfig::new(key.clone(), direction);
        }
        None if args.desc => state.sort.direction = SortDirection::Desc,
        None => {}
    }

    for (key, value) in &args.filters {
        if !kind.has_column(key) {
            tracing::warn!(table = %kind, key = %key, "Filtering on a column the table does not show");
        }
        state.set_filter(key, value);
    }
    if let Some(query) = &args.search {
        state.set_search(query);
    }

    if let Some(size) = args.rows_per_page {
        let size = usize::try_from(size).unwrap_or(usize::MAX);
        if !config.table.rows_per_page_options.contains(&size) {
            tracing::warn!(size, "Page size is not one of the configured options");
        }
        state.on_change_rows_per_page(size);
    }
    if let Some(page) = args.page {
        let page = usize::try_from(page).unwrap_or(usize::MAX);
        state.on_change_page(page.saturating_sub(1));
    }

    state
}

/// Saved views needed by a `view` run. `--fresh` alone never reads them, and an
/// unreadable file is treated as empty.
fn saved_views_for(args: &ViewArgs, load: impl FnOnce() -> Result<SavedViews>) -> SavedViews {
    if args.fresh && !args.save {
        return SavedViews::default();
    }
    load().unwrap_or_else(|err| {
        tracing::warn!(error = %err, "Ignoring unreadable saved views");
        SavedViews::default()
    })
}

fn view_table(config: &AppConfig, args: ViewArgs) -> Result<()> {
    let kind = args.table;
    let mut saved = saved_views_for(&args, SavedViews::load);
    let state = resolve_view_state(kind, config, &saved, &args);

    let source: Box<dyn RowSource> = match &args.file {
        Some(path) => Box::new(JsonFileSource::new(path)),
        None => Box::new(HttpRowSource::new(&config.api, kind.endpoint())?),
    };

    let mut screen = TableScreen::new(kind, state);
    screen.load(source.as_ref());
    if let TableLoadState::Error(message) = screen.load_state() {
        bail!("could not load {kind} from {}: {message}", source.describe());
    }

    let view = screen.view();
    let table = DataTable::<Row>::new(kind.columns())
        .items_label(kind.items_label())
        .max_cell_width(config.table.max_cell_width);
    print!("{}", table.render(&view, screen.state().page, &screen.state().sort));

    if args.save {
        saved.insert(kind, screen.state().clone());
        saved.save()?;
        tracing::info!(table = %kind, "Saved table view");
    }
    Ok(())
}

fn list_views(clear: bool) -> Result<()> {
    if clear {
        SavedViews::clear_all()?;
        println!("Cleared saved views");
        return Ok(());
    }

    let saved = SavedViews::load()?;
    if saved.is_empty() {
        println!("No saved views");
        return Ok(());
    }
    for (kind, view) in saved.iter() {
        let state = &view.state;
        let filters = state.filters.columns().count();
        println!(
            "{:<16} sort {} {}, page {} x {}, {} filter(s){}, saved {}",
            kind.name(),
            state.sort.key,
            state.sort.direction,
            state.page.page.saturating_add(1),
            state.page.rows_per_page,
            filters,
            if state.filters.search_query.is_empty() {
                String::new()
            } else {
                format!(", search \"{}\"", state.filters.search_query)
            },
            format_datetime(&view.saved_at),
        );
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn args(table: TableKind) -> ViewArgs {
        ViewArgs {
            table,
            file: None,
            sort: None,
            desc: false,
            filters: Vec::new(),
            search: None,
            page: None,
            rows_per_page: None,
            fresh: false,
            save: false,
        }
    }

    #[test]
    fn filter_argument_parsing() {
        assert_eq!(
            parse_filter("Region=North").ok(),
            Some(("Region".to_string(), "North".to_string()))
        );
        assert_eq!(
            parse_filter("note=a=b").ok(),
            Some(("note".to_string(), "a=b".to_string()))
        );
        assert_eq!(parse_filter("Status=").ok(), Some(("Status".to_string(), String::new())));
        assert!(parse_filter("=x").is_err());
        assert!(parse_filter("Region").is_err());
    }

    #[test]
    fn command_line_parses() {
        let cli = Cli::try_parse_from([
            "lotto-admin",
            "view",
            "operators",
            "--file",
            "ops.json",
            "--sort",
            "createdAt",
            "--desc",
            "--filter",
            "Region=North",
            "--filter",
            "Status=Active",
            "--page",
            "2",
            "-vv",
        ])
        .expect("parse");

        assert_eq!(cli.verbose, 2);
        let Commands::View(view) = cli.command else {
            panic!("expected view command");
        };
        assert_eq!(view.table, TableKind::Operators);
        assert_eq!(view.filters.len(), 2);
        assert_eq!(view.page, Some(2));
    }

    #[test]
    fn zero_page_is_rejected() {
        assert!(Cli::try_parse_from(["lotto-admin", "view", "managers", "--page", "0"]).is_err());
        assert!(Cli::try_parse_from(["lotto-admin", "view", "players"]).is_err());
    }

    #[test]
    fn overrides_apply_on_top_of_defaults() {
        let config = AppConfig::default();
        let mut view = args(TableKind::Managers);
        view.sort = Some("fullName".into());
        view.desc = true;
        view.filters = vec![("Region".into(), "North".into())];
        view.search = Some("ama".into());
        view.page = Some(3);
        view.rows_per_page = Some(25);

        let state = resolve_view_state(TableKind::Managers, &config, &SavedViews::default(), &view);
        assert_eq!(state.sort, SortConfig::desc("fullName"));
        assert_eq!(state.filters.column("Region"), "North");
        assert_eq!(state.filters.search_query, "ama");
        assert_eq!(state.page.page, 2);
        assert_eq!(state.page.rows_per_page, 25);
    }

    #[test]
    fn saved_view_is_the_starting_point() {
        let config = AppConfig::default();
        let mut saved_state = TableViewState::for_table(TableKind::Operators, &config.table);
        saved_state.set_search("kumasi");
        let mut saved = SavedViews::default();
        saved.insert(TableKind::Operators, saved_state.clone());

        let state = resolve_view_state(TableKind::Operators, &config, &saved, &args(TableKind::Operators));
        assert_eq!(state, saved_state);

        let mut fresh = args(TableKind::Operators);
        fresh.fresh = true;
        let state = resolve_view_state(TableKind::Operators, &config, &saved, &fresh);
        assert_eq!(state.filters.search_query, "");
    }

    #[test]
    fn fresh_view_skips_saved_views() {
        let mut fresh = args(TableKind::Managers);
        fresh.fresh = true;
        let saved = saved_views_for(&fresh, || panic!("saved views must not be read"));
        assert!(saved.is_empty());

        let state = resolve_view_state(TableKind::Managers, &AppConfig::default(), &saved, &fresh);
        assert_eq!(
            state,
            TableViewState::for_table(TableKind::Managers, &AppConfig::default().table)
        );
    }

    #[test]
    fn unreadable_saved_views_fall_back_to_empty() {
        let view = args(TableKind::Managers);
        let saved = saved_views_for(&view, || Err(anyhow::anyhow!("key must be a string")));
        assert!(saved.is_empty());

        let mut fresh_and_save = args(TableKind::Managers);
        fresh_and_save.fresh = true;
        fresh_and_save.save = true;
        let mut stored = SavedViews::default();
        stored.insert(TableKind::Operators, TableViewState::default());
        let saved = saved_views_for(&fresh_and_save, || Ok(stored.clone()));
        assert!(saved.get(TableKind::Operators).is_some());
    }

    #[test]
    fn desc_alone_flips_the_default_sort() {
        let mut view = args(TableKind::Managers);
        view.desc = true;
        let state =
            resolve_view_state(TableKind::Managers, &AppConfig::default(), &SavedViews::default(), &view);
        assert_eq!(state.sort, SortConfig::desc("id"));
    }

    #[test]
    fn table_listing_mentions_every_table() {
        let text = describe_tables();
        for kind in TableKind::ALL {
            assert!(text.contains(kind.name()));
        }
    }
}
