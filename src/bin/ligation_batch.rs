use clap::Parser;
use ligation_calc::config::load_protocol;
use ligation_calc::config::sample_sheet::{read_sample_sheet, to_requests};
use ligation_calc::core::report::ReportFormat;
use ligation_calc::utils::error::CalcError;
use ligation_calc::utils::logger;
use ligation_calc::utils::validation::validate_path;
use ligation_calc::{OutputSink, ProtocolEngine};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "ligation-batch")]
#[command(about = "Adapter dilution and ligation protocols for every sample in a CSV sheet")]
struct Args {
    /// CSV sample sheet with a header row
    #[arg(short, long)]
    sheet: PathBuf,

    /// Protocol configuration (TOML) with defaults and pipetting limits
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Output file. Default, standard output
    #[arg(short, long)]
    outfile: Option<PathBuf>,

    /// Report format
    #[arg(long, value_enum, default_value_t = ReportFormat::Text)]
    format: ReportFormat,

    /// Enable verbose output
    #[arg(short, long)]
    verbose: bool,

    /// Emit logs as JSON lines
    #[arg(long)]
    log_json: bool,

    /// Validate the sheet and print the sample count without writing protocols
    #[arg(long)]
    dry_run: bool,
}

fn main() {
    let args = Args::parse();

    if args.log_json {
        logger::init_json_logger();
    } else {
        logger::init_cli_logger(args.verbose);
    }

    tracing::info!("Loading sample sheet from: {}", args.sheet.display());

    if let Err(e) = run(&args) {
        tracing::error!(
            "Batch failed: {} (Category: {:?}, Severity: {:?})",
            e,
            e.category(),
            e.severity()
        );
        eprintln!("{}", e.user_friendly_message());
        eprintln!("Suggestion: {}", e.recovery_suggestion());
        std::process::exit(e.exit_code());
    }
}

fn run(args: &Args) -> Result<(), CalcError> {
    validate_path("sheet", &args.sheet.to_string_lossy())?;
    let protocol = load_protocol(args.config.as_deref())?;
    let rows = read_sample_sheet(&args.sheet)?;
    let requests = to_requests(&rows, &protocol)?;

    if args.dry_run {
        // Computes every recipe without touching the output.
        for (index, request) in requests.iter().enumerate() {
            ligation_calc::plan_ligation(request, &protocol).map_err(|e| {
                CalcError::SampleSheetError {
                    row: index + 1,
                    source: Box::new(e),
                }
            })?;
        }
        println!("{} samples OK", requests.len());
        return Ok(());
    }

    let sink = OutputSink::from_option(args.outfile.as_deref());
    let engine = ProtocolEngine::new(sink, protocol).with_format(args.format);
    engine.run_batch(&requests)?;
    Ok(())
}
