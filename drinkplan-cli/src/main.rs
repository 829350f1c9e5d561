mod report;

use anyhow::{Context, Result};
use clap::{Parser, ValueEnum};
use std::fs::{self, File};
use std::io::{self, BufWriter, Read, Write, stdout};
use std::path::PathBuf;

use drinkplan_engine::{
    BundledCatalog, CatalogLoader, DrinkPlanner, PricingCatalog, RawPlanInput, ResultSet,
};

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum ReportFormat {
    /// Colored summary for a terminal
    Console,
    /// The full result record as pretty JSON
    Json,
}

#[derive(Debug, Parser)]
#[command(name = "drinkplan", version)]
#[command(about = "Compare cruise beverage packages against paying per drink")]
struct Args {
    /// Raw plan input as JSON (reads stdin when omitted)
    #[arg(long)]
    input: Option<PathBuf>,

    /// Pricing document to use instead of the bundled prices
    #[arg(long)]
    catalog: Option<PathBuf>,

    /// Output report format
    #[arg(long, value_enum, default_value_t = ReportFormat::Console)]
    report: ReportFormat,

    /// Optional path to write the report output instead of stdout
    #[arg(long)]
    output: Option<PathBuf>,

    /// Verbose output: detailed breakdowns and engine debug logging
    #[arg(short, long)]
    verbose: bool,
}

/// Pricing document on disk.
struct CatalogFile(PathBuf);

impl CatalogLoader for CatalogFile {
    type Error = io::Error;

    fn load_catalog(&self) -> Result<PricingCatalog, Self::Error> {
        let json = fs::read_to_string(&self.0)?;
        PricingCatalog::from_json(&json)
            .map_err(|err| io::Error::new(io::ErrorKind::InvalidData, err))
    }
}

fn main() -> Result<()> {
    let args = Args::parse();
    init_logging(args.verbose);

    let raw = read_input(args.input.as_ref())?;
    let result = match &args.catalog {
        Some(path) => DrinkPlanner::new(CatalogFile(path.clone())).plan(&raw),
        None => DrinkPlanner::new(BundledCatalog).plan(&raw),
    };
    log::debug!(
        "{} wins by {:.2} over {}",
        result.winner,
        result.savings,
        result.compared_to
    );

    write_report(&args, &result)
}

fn init_logging(verbose: bool) {
    let default_filter = if verbose { "debug" } else { "warn" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(default_filter))
        .init();
}

fn read_input(path: Option<&PathBuf>) -> Result<RawPlanInput> {
    let json = if let Some(path) = path {
        log::debug!("reading plan input from {}", path.display());
        fs::read_to_string(path).with_context(|| format!("failed to read {}", path.display()))?
    } else {
        log::debug!("reading plan input from stdin");
        let mut buf = String::new();
        io::stdin()
            .read_to_string(&mut buf)
            .context("failed to read plan input from stdin")?;
        buf
    };
    RawPlanInput::from_json(&json).context("plan input is not valid JSON")
}

fn write_report(args: &Args, result: &ResultSet) -> Result<()> {
    if args.output.is_some() {
        colored::control::set_override(false);
    }
    let mut output_target = OutputTarget::new(args.output.clone())?;
    let written = match args.report {
        ReportFormat::Console => {
            report::write_console_report(output_target.writer(), result, args.verbose)
        }
        ReportFormat::Json => report::write_json_report(output_target.writer(), result),
    };
    written.context("failed to write report")?;
    output_target
        .flush_inner()
        .context("failed to flush report")
}

enum OutputTarget {
    Stdout(BufWriter<io::Stdout>),
    File(BufWriter<File>),
}

impl OutputTarget {
    fn new(path: Option<PathBuf>) -> Result<Self> {
        if let Some(path) = path {
            let file = File::create(&path)
                .with_context(|| format!("failed to create {}", path.display()))?;
            Ok(Self::File(BufWriter::new(file)))
        } else {
            Ok(Self::Stdout(BufWriter::new(stdout())))
        }
    }

    fn writer(&mut self) -> &mut dyn Write {
        match self {
            Self::Stdout(w) => w,
            Self::File(w) => w,
        }
    }

    fn flush_inner(&mut self) -> io::Result<()> {
        match self {
            Self::Stdout(w) => w.flush(),
            Self::File(w) => w.flush(),
        }
    }
}
