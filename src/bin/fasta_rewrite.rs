use clap::Parser;
use ligation_calc::core::fasta::{parse_fasta, write_fasta, DEFAULT_LINE_WIDTH};
use ligation_calc::utils::error::CalcError;
use ligation_calc::utils::logger;
use std::fs::File;
use std::io::{BufReader, BufWriter, Write};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "fasta-rewrite")]
#[command(about = "Read a FASTA file and write it back in normalised form")]
struct Args {
    /// Input FASTA file
    input: PathBuf,

    /// Sequence line width; 0 writes each sequence on a single line
    #[arg(short, long, default_value_t = DEFAULT_LINE_WIDTH)]
    width: usize,

    /// Output file. Default, standard output
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Enable verbose output
    #[arg(short, long)]
    verbose: bool,
}

fn main() {
    let args = Args::parse();
    logger::init_cli_logger(args.verbose);

    if let Err(e) = run(&args) {
        tracing::error!("FASTA rewrite failed: {}", e);
        eprintln!("{}", e.user_friendly_message());
        std::process::exit(e.exit_code());
    }
}

fn run(args: &Args) -> Result<(), CalcError> {
    let reader = BufReader::new(File::open(&args.input)?);
    let records = parse_fasta(reader)?;
    tracing::info!(
        "Read {} records from {}",
        records.len(),
        args.input.display()
    );

    match &args.output {
        Some(path) => {
            let mut writer = BufWriter::new(File::create(path)?);
            write_fasta(&mut writer, &records, args.width)?;
            writer.flush()?;
        }
        None => {
            let stdout = std::io::stdout();
            let mut writer = BufWriter::new(stdout.lock());
            write_fasta(&mut writer, &records, args.width)?;
            writer.flush()?;
        }
    }
    Ok(())
}
