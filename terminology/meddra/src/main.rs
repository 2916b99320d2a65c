use std::fmt::Write as _;
use std::io::{self, Write};
use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};
use log::LevelFilter;
use meddra::{MeddraService, NumericFieldPolicy, ServiceError, TermLevel};
use meddra_index::IndexStats;
use meddra_loader::LoaderConfig;
use meddra_query::QueryError;
use meddra_records::HierarchyResult;

#[derive(Debug, Parser)]
#[command(
    name = "meddra",
    version,
    about = "Look up terms in the MedDRA medical terminology hierarchy",
    long_about = "meddra loads a MedDRA ASCII distribution (mdhier.asc and llt.asc) and\n\
        answers hierarchy and prefix queries against it.\n\n\
        EXAMPLES:\n\
        \n  meddra --hierarchy mdhier.asc --llt llt.asc hierarchy PT \"Anaemia folate deficiency\"\
        \n  meddra --hierarchy mdhier.asc --llt llt.asc search LLT heart\
        \n  meddra --json hierarchy LLT \"Heart attack\"    (paths taken from the environment)"
)]
struct Cli {
    /// Increase verbosity level (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    /// Hierarchy table (mdhier.asc)
    #[arg(long, value_name = "FILE", env = "MEDDRA_HIERARCHY_FILE", global = true)]
    hierarchy: Option<PathBuf>,

    /// Low-level term table (llt.asc)
    #[arg(long, value_name = "FILE", env = "MEDDRA_LLT_FILE", global = true)]
    llt: Option<PathBuf>,

    /// Skip rows with malformed codes instead of failing the load
    #[arg(long, global = true)]
    skip_bad_rows: bool,

    /// Print results as JSON
    #[arg(long, global = true)]
    json: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Resolve every hierarchy path a term belongs to
    Hierarchy(HierarchyArgs),

    /// List terms at a level whose name starts with a prefix
    Search(SearchArgs),

    /// Print counts for the loaded snapshot
    Stats,
}

#[derive(Debug, Args, Clone)]
struct HierarchyArgs {
    /// Level of the term: SOC, HLGT, HLT, PT or LLT
    #[arg(value_name = "LEVEL")]
    level: String,

    /// Exact term name (case-insensitive)
    #[arg(value_name = "TERM")]
    term: String,
}

#[derive(Debug, Args, Clone)]
struct SearchArgs {
    /// Level to search: SOC, HLGT, HLT, PT or LLT
    #[arg(value_name = "LEVEL")]
    level: String,

    /// Name prefix (case-insensitive)
    #[arg(value_name = "PREFIX")]
    prefix: String,
}

fn init_logging(verbose: u8) {
    let level = match verbose {
        0 => LevelFilter::Warn,
        1 => LevelFilter::Info,
        2 => LevelFilter::Debug,
        _ => LevelFilter::Trace,
    };
    // RUST_LOG, when set, takes precedence over -v.
    let _ = env_logger::Builder::new()
        .filter_level(level)
        .parse_default_env()
        .try_init();
}

fn loader_config(cli: &Cli) -> LoaderConfig {
    LoaderConfig {
        numeric_policy: if cli.skip_bad_rows {
            NumericFieldPolicy::SkipRow
        } else {
            NumericFieldPolicy::Reject
        },
        ..LoaderConfig::default()
    }
}

fn render_text(result: &HierarchyResult) -> String {
    if result.is_empty() {
        return "no matching terms\n".to_string();
    }
    let mut out = String::new();
    for level in TermLevel::ALL {
        let values = result.values(level);
        if values.is_empty() {
            continue;
        }
        let _ = writeln!(out, "{level}:");
        for node in values {
            let marker = if node.is_primary_path { " *" } else { "" };
            let _ = writeln!(
                out,
                "  [{}] {} {}{marker}",
                node.path_id, node.code, node.name
            );
        }
    }
    out
}

#[derive(Debug, thiserror::Error)]
enum CliError {
    #[error("{0} <FILE> is required (or set {1})")]
    MissingTable(&'static str, &'static str),
    #[error(transparent)]
    Load(#[from] ServiceError),
    #[error(transparent)]
    Query(#[from] QueryError),
    #[error("failed to render output: {0}")]
    Render(#[from] serde_json::Error),
    #[error("failed to write output: {0}")]
    Write(#[from] io::Error),
}

impl CliError {
    fn exit_code(&self) -> i32 {
        match self {
            CliError::Query(_) => 1,
            CliError::MissingTable(..)
            | CliError::Load(_)
            | CliError::Render(_)
            | CliError::Write(_) => 2,
        }
    }
}

fn render_result(result: &HierarchyResult, json: bool) -> Result<String, CliError> {
    if json {
        Ok(format!("{}\n", serde_json::to_string_pretty(result)?))
    } else {
        Ok(render_text(result))
    }
}

fn render_stats(stats: &IndexStats, json: bool) -> Result<String, CliError> {
    if json {
        return Ok(format!("{}\n", serde_json::to_string_pretty(stats)?));
    }
    Ok(format!(
        "hierarchy rows:          {}\n\
         low-level terms:         {}\n\
         current low-level terms: {}\n\
         distinct PTs:            {}\n\
         distinct SOCs:           {}\n",
        stats.hierarchy_records,
        stats.low_level_terms,
        stats.current_low_level_terms,
        stats.distinct_pts,
        stats.distinct_socs
    ))
}

fn execute(service: &MeddraService, cli: &Cli, out: &mut dyn Write) -> Result<(), CliError> {
    let text = match &cli.command {
        Command::Hierarchy(args) => {
            let result = service.get_hierarchy_by_term(&args.term, &args.level)?;
            render_result(&result, cli.json)?
        }
        Command::Search(args) => {
            let result = service.search_term(&args.prefix, &args.level)?;
            render_result(&result, cli.json)?
        }
        Command::Stats => render_stats(&service.stats(), cli.json)?,
    };
    out.write_all(text.as_bytes())?;
    Ok(())
}

fn load_service(cli: &Cli) -> Result<MeddraService, CliError> {
    let hierarchy = cli
        .hierarchy
        .as_deref()
        .ok_or(CliError::MissingTable("--hierarchy", "MEDDRA_HIERARCHY_FILE"))?;
    let llt = cli
        .llt
        .as_deref()
        .ok_or(CliError::MissingTable("--llt", "MEDDRA_LLT_FILE"))?;
    Ok(MeddraService::load_with_config(
        hierarchy,
        llt,
        &loader_config(cli),
    )?)
}

fn run(cli: &Cli, out: &mut dyn Write) -> i32 {
    match load_service(cli).and_then(|service| execute(&service, cli, out)) {
        Ok(()) => 0,
        Err(e) => {
            eprintln!("error: {e}");
            e.exit_code()
        }
    }
}

fn run_cli() -> i32 {
    let cli = Cli::parse();
    init_logging(cli.verbose);
    let stdout = io::stdout();
    let mut lock = stdout.lock();
    run(&cli, &mut lock)
}

fn main() {
    std::process::exit(run_cli());
}
