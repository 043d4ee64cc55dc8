//! Dashboard core CLI
//!
//! Runs the data-shaping functions against command-line input and JSON files,
//! for checking legacy data and reproducing what the dashboard renders.

use std::fs;
use std::path::{Path, PathBuf};

use clap::{Parser, Subcommand};
use dashboard_core::{
    error::{AppError, Result},
    models::{Config, Course, FilterState, ImportSummary, Institution},
    services::{self, CourseFormatter, Pager, countries, course_parser, import, territory, validation},
};
use serde::Serialize;
use serde::de::DeserializeOwned;

/// Dashboard data tools
#[derive(Parser, Debug)]
#[command(name = "dashboard", version, about = "Study-abroad dashboard data tools")]
struct Cli {
    /// Path to configuration file
    #[arg(short, long, default_value = "dashboard.toml")]
    config: PathBuf,

    /// Enable verbose logging
    #[arg(short, long)]
    verbose: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Look up a country by code or name
    Country { value: String },

    /// Resolve territory tokens into badges
    Territory {
        #[arg(required = true)]
        tokens: Vec<String>,
    },

    /// Split one course line into course name and commission
    Course { text: String },

    /// Expand a JSON array of course records into display rows
    Courses { file: PathBuf },

    /// Build list query parameters from filter values
    Query {
        #[arg(long)]
        search: Option<String>,
        #[arg(long)]
        country: Option<String>,
        #[arg(long)]
        state: Option<String>,
        #[arg(long)]
        territory: Option<String>,
        #[arg(long)]
        sector: Option<String>,
        #[arg(long)]
        group: Option<String>,
        #[arg(long)]
        promoted: Option<bool>,
        #[arg(long)]
        featured: Option<bool>,
        #[arg(long)]
        scholarship: Option<bool>,
        #[arg(long)]
        page: Option<u32>,
        #[arg(long)]
        limit: Option<u32>,
        /// Build the export variant (no paging)
        #[arg(long)]
        export: bool,
        /// Print JSON instead of a query string
        #[arg(long)]
        json: bool,
    },

    /// Show the pagination window for a page
    Pages {
        current: u32,
        total: u32,
        #[arg(long)]
        delta: Option<u32>,
    },

    /// Summarize an import result JSON file
    ImportSummary { file: PathBuf },

    /// Check an import file name and size
    CheckFile { name: String, size: u64 },

    /// Print the import template rows
    Template,

    /// Flatten an institutions JSON file into export rows
    Export { file: PathBuf },

    /// Validate the configuration file
    Validate,
}

/// Initialize logging based on verbosity flag.
fn init_logging(verbose: bool) {
    let level = if verbose { "debug" } else { "info" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(level))
        .format_timestamp_secs()
        .init();
}

fn read_json<T: DeserializeOwned>(path: &Path) -> Result<T> {
    let content = fs::read_to_string(path)?;
    Ok(serde_json::from_str(&content)?)
}

fn print_json<T: Serialize>(value: &T) -> Result<()> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let config = Config::load_or_default(&cli.config);
    log::debug!("Using configuration from {}", cli.config.display());

    match cli.command {
        Command::Country { value } => {
            let value = value.trim();
            let code = if value.chars().count() > 2 {
                countries::code_of(value)
            } else {
                value.to_ascii_uppercase()
            };
            print_json(&serde_json::json!({
                "code": code,
                "name": countries::name_of(&code),
                "flag": countries::flag_of(&code),
                "known": countries::is_known_code(&code),
            }))?;
        }

        Command::Territory { tokens } => {
            print_json(&territory::resolve_all(&tokens))?;
        }

        Command::Course { text } => {
            print_json(&course_parser::parse(&text))?;
        }

        Command::Courses { file } => {
            let courses: Vec<Course> = read_json(&file)?;
            let formatter =
                CourseFormatter::with_placeholder(config.display.commission_placeholder.clone());
            let rows = formatter.format(&courses);
            log::info!("{} record(s) expanded to {} row(s)", courses.len(), rows.len());
            print_json(&rows)?;
        }

        Command::Query {
            search,
            country,
            state,
            territory: territory_token,
            sector,
            group,
            promoted,
            featured,
            scholarship,
            page,
            limit,
            export,
            json,
        } => {
            let filters = FilterState {
                search,
                country,
                state,
                territory: territory_token,
                sector,
                group,
                is_promoted: promoted,
                is_featured: featured,
                scholarship,
                page,
                limit: limit.or(Some(config.pagination.default_page_size)),
            };
            let params = if export {
                services::build_export_query(&filters)
            } else {
                services::build_query(&filters)
            };
            if json {
                print_json(&params)?;
            } else {
                println!("{}", params.to_query_string());
            }
        }

        Command::Pages {
            current,
            total,
            delta,
        } => {
            let delta = delta.unwrap_or(config.pagination.delta);
            print_json(&Pager::new(current, total, delta))?;
        }

        Command::ImportSummary { file } => {
            let summary: ImportSummary = read_json(&file)?;
            log::info!("{}", import::headline(&summary));
            for (label, value) in import::summary_items(&summary) {
                log::info!("    {}: {}", label, value);
            }
            for line in import::error_lines(&summary) {
                log::warn!("    {}", line);
            }
            if !summary.is_consistent() {
                return Err(AppError::validation(format!(
                    "{} rows accounted for but only {} in file",
                    summary.processed(),
                    summary.total_rows
                )));
            }
        }

        Command::CheckFile { name, size } => {
            let result = validation::validate_import_file(&name, size, &config.import);
            print_json(&result)?;
            if let Some(error) = result.error {
                return Err(AppError::input("file", error));
            }
        }

        Command::Template => {
            print_json(&import::institution_template())?;
        }

        Command::Export { file } => {
            let institutions: Vec<Institution> = read_json(&file)?;
            let rows = import::export_rows(&institutions);
            let file_name = import::export_file_name(
                &config.import.export_prefix,
                "institutions",
                chrono::Local::now().date_naive(),
            );
            log::info!("{} row(s) ready for {}", rows.len(), file_name);
            print_json(&rows)?;
        }

        Command::Validate => {
            log::info!("Validating configuration...");

            if let Err(e) = config.validate() {
                log::error!("Config validation failed: {}", e);
                return Err(e);
            }
            log::info!("✓ Config OK");
            log::info!("    pagination.delta: {}", config.pagination.delta);
            log::info!(
                "    import.max_file_size_bytes: {}",
                config.import.max_file_size_bytes
            );
        }
    }

    Ok(())
}
