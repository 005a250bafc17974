use clap::Parser;
use log::{info, LevelFilter};
use simple_logger::SimpleLogger;
use gramschmidt::codec::{self, Format};
use gramschmidt::error::Result;
use gramschmidt::input;
use gramschmidt::report::Report;
use gramschmidt::session::Session;
use gramschmidt::step::{Dimension, StepState};




#[derive(Debug, Parser)]
#[clap(version = "1.0")]
#[clap(about = "Orthogonalize 2 or 3 vectors and print the revealed steps")]
struct Opts {
    /// Input vectors, e.g. -v 3,1 -v 2,4. Defaults to the scenario for the
    /// dimension.
    #[clap(short = 'v', long = "vector")]
    vectors: Vec<String>,

    /// 2 or 3. Must match the number of vectors when both are given.
    #[clap(short = 'd', long)]
    dimension: Option<u8>,

    /// Step to render. Defaults to the final step.
    #[clap(short = 's', long)]
    step: Option<u8>,

    #[clap(short = 'p', long, default_value = "4")]
    precision: usize,

    /// Write a snapshot of the calculation to this file.
    #[clap(short = 'o', long)]
    output: Option<String>,

    #[clap(short = 'f', long, default_value = "cbor")]
    format: Format,

    #[clap(short = 'l', long, default_value = "warn")]
    log_level: LevelFilter,
}




// ============================================================================
fn run(opts: &Opts) -> Result<()> {
    let vectors = opts
        .vectors
        .iter()
        .map(|text| input::parse_vector(text))
        .collect::<Result<Vec<_>>>()?;

    let dimension = Dimension::resolve(opts.dimension, vectors.len())?;

    let mut session = Session::new(dimension);

    if !vectors.is_empty() {
        session.set_vectors(vectors)?;
    }

    let target = StepState::at(dimension, opts.step.unwrap_or(u8::MAX));
    while session.steps().step() < target.step() {
        session.next();
    }

    println!("{:.*}", opts.precision, Report::of(&session));

    if let Some(path) = &opts.output {
        let file = std::fs::File::create(path)?;
        codec::encode(&session.snapshot(), opts.format, std::io::BufWriter::new(file))?;
        info!("wrote {} snapshot to {}", opts.format, path);
    }
    Ok(())
}




// ============================================================================
fn main() {
    let opts = Opts::parse();

    if let Err(e) = SimpleLogger::new().with_level(opts.log_level).init() {
        eprintln!("logger: {}", e);
    }

    if let Err(e) = run(&opts) {
        eprintln!("error: {}", e);
        std::process::exit(1);
    }
}
