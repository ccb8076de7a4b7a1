use clap::Parser;
use ligation_calc::config::load_protocol;
use ligation_calc::utils::{error::CalcError, logger, validation::Validate};
use ligation_calc::{CalcArgs, OutputSink, ProtocolEngine};

fn main() {
    let args = CalcArgs::parse();

    logger::init_cli_logger(args.verbose);
    tracing::debug!("CLI args: {:?}", args);

    if let Err(e) = run(&args) {
        tracing::error!(
            "Calculation failed: {} (Category: {:?}, Severity: {:?})",
            e,
            e.category(),
            e.severity()
        );
        tracing::debug!("Recovery suggestion: {}", e.recovery_suggestion());

        eprintln!("{}", e.user_friendly_message());
        std::process::exit(e.exit_code());
    }
}

fn run(args: &CalcArgs) -> Result<(), CalcError> {
    args.validate()?;
    let protocol = load_protocol(args.config.as_deref())?;
    let request = args.to_request(&protocol)?;

    let sink = OutputSink::from_option(args.outfile.as_deref());
    let engine = ProtocolEngine::new(sink, protocol).with_format(args.format);
    engine.run(&request)?;
    Ok(())
}
