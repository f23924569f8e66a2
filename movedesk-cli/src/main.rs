mod data;
mod print;
mod settings;

use std::fs::File;
use std::io;
use std::io::Write;
use std::path::PathBuf;

use anyhow::Context;
use anyhow::Result;
use clap::Parser;
use clap::Subcommand;
use clap::ValueEnum;
use movedesk_lib::export;
use movedesk_lib::export::ExportTable;
use movedesk_lib::model::types::Status;
use movedesk_lib::presets;
use movedesk_lib::presets::TableKind;
use movedesk_lib::table::Direction;
use movedesk_lib::table::SortState;
use movedesk_lib::table::TableView;
use movedesk_lib::Record;
use simplelog::ColorChoice;
use simplelog::Config;
use simplelog::LevelFilter;
use simplelog::TermLogger;
use simplelog::TerminalMode;
use simplelog::WriteLogger;

use crate::data::Dataset;
use crate::settings::Settings;

#[derive(Parser)]
#[command(name = "movedesk", about = "Moving company dashboard tables")]
struct Cli {
    /// TOML settings file with [table] and [cache] sections
    #[arg(long, global = true)]
    config: Option<PathBuf>,
    #[arg(long, global = true, value_enum, default_value = "warn")]
    log_level: LogLevel,
    /// Write logs to this file instead of stderr
    #[arg(long, global = true)]
    log_file: Option<PathBuf>,
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Print one page of a table
    View {
        #[command(flatten)]
        table: TableArgs,
        /// Zero-based page index, clamped to the last page
        #[arg(long, default_value_t = 0)]
        page: usize,
        /// Rows per page: 5, 10, 20, 30, 40 or 50
        #[arg(long)]
        page_size: Option<usize>,
        /// Render the loading state instead of the data
        #[arg(long)]
        loading: bool,
    },
    /// Write the filtered and sorted table as CSV
    Export {
        #[command(flatten)]
        table: TableArgs,
        /// Output file or directory, stdout when omitted
        #[arg(long)]
        out: Option<PathBuf>,
        /// Export raw record fields instead of the table columns
        #[arg(long)]
        raw: bool,
    },
    /// Apply an admin edit to one record and rewrite the data file
    Update {
        #[arg(long, value_enum)]
        kind: KindArg,
        /// JSON file with the records, rewritten in place
        #[arg(long)]
        data: PathBuf,
        /// Id of the record to edit
        #[arg(long)]
        id: String,
        #[arg(long, value_enum)]
        status: Option<StatusArg>,
        /// Admin notes for quotes and requests, notes for customers
        #[arg(long)]
        notes: Option<String>,
        /// New quote price; unreadable or zero input keeps the old one
        #[arg(long)]
        price: Option<String>,
    },
    /// Print status tallies and page statistics
    Stats {
        #[arg(long, value_enum)]
        kind: KindArg,
        /// JSON file with the records
        #[arg(long)]
        data: PathBuf,
        /// Customers JSON used to resolve quote customers given by id
        #[arg(long)]
        customers: Option<PathBuf>,
    },
}

#[derive(clap::Args)]
struct TableArgs {
    #[arg(long, value_enum)]
    kind: KindArg,
    /// JSON file with the records
    #[arg(long)]
    data: PathBuf,
    /// Customers JSON used to resolve quote customers given by id
    #[arg(long)]
    customers: Option<PathBuf>,
    #[arg(long, default_value = "")]
    query: String,
    /// Column key to sort by
    #[arg(long)]
    sort: Option<String>,
    #[arg(long, requires = "sort")]
    desc: bool,
    /// Only rows with this status
    #[arg(long, value_enum)]
    status: Option<StatusArg>,
    /// Only rows with this service type
    #[arg(long)]
    service_type: Option<String>,
}

#[derive(Clone, Copy, ValueEnum)]
enum KindArg {
    Customers,
    Quotes,
    Requests,
}

impl From<KindArg> for TableKind {
    fn from(kind: KindArg) -> Self {
        match kind {
            KindArg::Customers => TableKind::Customers,
            KindArg::Quotes => TableKind::Quotes,
            KindArg::Requests => TableKind::Requests,
        }
    }
}

#[derive(Clone, Copy, ValueEnum)]
enum StatusArg {
    Pending,
    InProgress,
    Completed,
    Cancelled,
}

impl From<StatusArg> for Status {
    fn from(status: StatusArg) -> Self {
        match status {
            StatusArg::Pending => Status::Pending,
            StatusArg::InProgress => Status::InProgress,
            StatusArg::Completed => Status::Completed,
            StatusArg::Cancelled => Status::Cancelled,
        }
    }
}

#[derive(Clone, Copy, ValueEnum)]
enum LogLevel {
    Off,
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

impl From<LogLevel> for LevelFilter {
    fn from(level: LogLevel) -> Self {
        match level {
            LogLevel::Off => LevelFilter::Off,
            LogLevel::Error => LevelFilter::Error,
            LogLevel::Warn => LevelFilter::Warn,
            LogLevel::Info => LevelFilter::Info,
            LogLevel::Debug => LevelFilter::Debug,
            LogLevel::Trace => LevelFilter::Trace,
        }
    }
}

fn init_logging(level: LogLevel, file: Option<&PathBuf>) -> Result<()> {
    let level = LevelFilter::from(level);
    match file {
        Some(path) => {
            let log_file = File::create(path)
                .with_context(|| format!("Failed to create log file {}", path.display()))?;
            WriteLogger::init(level, Config::default(), log_file)?;
        }
        None => {
            TermLogger::init(
                level,
                Config::default(),
                TerminalMode::Stderr,
                ColorChoice::Auto,
            )?;
        }
    }
    Ok(())
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.log_level, cli.log_file.as_ref())?;
    let settings = Settings::load(cli.config.as_deref())?;

    match cli.command {
        Command::View {
            table,
            page,
            page_size,
            loading,
        } => {
            let kind = TableKind::from(table.kind);
            let (mut view, _) = build_view(&table, &settings)?;
            if let Some(size) = page_size {
                view.set_page_size(size)?;
            }
            view.set_page(page);
            view.set_loading(loading);
            print!("{}", print::format_table(kind.title(), &view.render()));
        }
        Command::Export { table, out, raw } => {
            let kind = TableKind::from(table.kind);
            let (view, dataset) = build_view(&table, &settings)?;
            let rows = view.sorted_rows();
            let export = if raw {
                ExportTable::from_records(&rows.into_iter().cloned().collect::<Vec<_>>())?
            } else if let Dataset::Quotes(quotes) = &dataset {
                presets::quote_export(&data::quotes_in_order(quotes, &rows))
            } else {
                ExportTable::from_columns(view.columns(), rows)
            };
            match out {
                Some(path) => {
                    let path = if path.is_dir() {
                        path.join(export::file_name(kind.as_str()))
                    } else {
                        path
                    };
                    let file = File::create(&path)
                        .with_context(|| format!("Failed to create {}", path.display()))?;
                    export.write_csv(file)?;
                    log::info!("Exported {} rows to {}", export.rows.len(), path.display());
                }
                None => {
                    let stdout = io::stdout();
                    let mut lock = stdout.lock();
                    export.write_csv(&mut lock)?;
                    lock.flush()?;
                }
            }
        }
        Command::Update {
            kind,
            data,
            id,
            status,
            notes,
            price,
        } => {
            let edit = data::Edit {
                status: status.map(Status::from),
                notes,
                price,
            };
            data::apply_edit(TableKind::from(kind), &data, &id, edit)?;
            println!("Updated {}", id);
        }
        Command::Stats {
            kind,
            data,
            customers,
        } => {
            let kind = TableKind::from(kind);
            let dataset = data::load(kind, &data, customers.as_deref(), &settings.cache)?;
            let records = dataset.records()?;
            println!("{}: {} records", kind.title(), records.len());
            match kind {
                TableKind::Customers => {
                    let stats = presets::customer_stats(&records);
                    println!("New customers: {}", stats.new);
                    println!("Returning customers: {}", stats.returning);
                    println!("Avg. requests per customer: {:.1}", stats.average_requests);
                }
                TableKind::Quotes | TableKind::Requests => {
                    for (status, count) in presets::status_counts(&records).iter() {
                        println!("{}: {}", status.label(), count);
                    }
                    if kind == TableKind::Requests {
                        println!("Recent requests:");
                        for request in presets::recent_requests(&records, presets::RECENT_REQUESTS) {
                            let name = request.get_string("customerName").ok().flatten();
                            println!("  {}", name.unwrap_or("-"));
                        }
                    }
                }
            }
        }
    }
    Ok(())
}

/// Loads the data file and applies the table arguments to a fresh view.
fn build_view(args: &TableArgs, settings: &Settings) -> Result<(TableView<Record>, Dataset)> {
    let kind = TableKind::from(args.kind);
    let dataset = data::load(kind, &args.data, args.customers.as_deref(), &settings.cache)?;
    let records = presets::retain_selected(
        dataset.records()?,
        args.status.map(Status::from),
        args.service_type.as_deref(),
    );

    let mut view = kind.view(settings.table.clone())?;
    view.set_records(records);
    view.set_query(args.query.as_str());
    if let Some(column) = &args.sort {
        let direction = if args.desc {
            Direction::Desc
        } else {
            Direction::Asc
        };
        view.set_sort(Some(SortState {
            column: column.clone(),
            direction,
        }))?;
    }
    Ok((view, dataset))
}
