use std::convert::TryFrom;
use std::io::{self, BufRead, Write};
use clap::Parser;
use log::{error, LevelFilter};
use simple_logger::SimpleLogger;
use gramschmidt::report::Report;
use gramschmidt::session::Session;
use gramschmidt::step::Dimension;

const HELP: &str = "\
commands:
  n                       next step
  p                       previous step
  r                       back to step 0, keep vectors
  R                       reload default vectors, back to step 0
  2 | 3                   switch dimension
  set <i> <axis> <text>   edit coordinate (i = 1..3, axis = x|y|z)
  h                       this help
  q                       quit";




#[derive(Debug, Parser)]
#[clap(version = "1.0")]
#[clap(about = "Step through the Gram-Schmidt process interactively")]
struct Opts {
    #[clap(short = 'd', long, default_value = "2")]
    dimension: u8,

    #[clap(short = 'p', long, default_value = "2")]
    precision: usize,

    #[clap(short = 'l', long, default_value = "warn")]
    log_level: LevelFilter,
}




// ============================================================================
fn apply(session: &mut Session, line: &str) -> Result<bool, gramschmidt::error::Error> {
    let words: Vec<_> = line.split_whitespace().collect();

    match words[..] {
        ["n"] => { session.next(); }
        ["p"] => { session.prev(); }
        ["r"] => { session.reset(); }
        ["R"] => { session.restore_defaults(); }
        ["2"] => { session.set_dimension(Dimension::Two); }
        ["3"] => { session.set_dimension(Dimension::Three); }
        ["set", index, axis, text] => {
            let index = index.parse::<usize>().ok().filter(|&i| i >= 1).map(|i| i - 1);
            let axis = match axis {
                "x" | "0" => Some(0),
                "y" | "1" => Some(1),
                "z" | "2" => Some(2),
                _ => None,
            };
            match (index, axis) {
                (Some(index), Some(axis)) => {
                    if !session.edit(index, axis, text)? {
                        println!("could not parse {:?}; keeping the previous value", text);
                    }
                }
                _ => println!("usage: set <i> <axis> <text>"),
            }
        }
        ["q"] => return Ok(false),
        _ => println!("{}", HELP),
    }
    Ok(true)
}




// ============================================================================
fn main() {
    let opts = Opts::parse();

    if let Err(e) = SimpleLogger::new().with_level(opts.log_level).init() {
        eprintln!("logger: {}", e);
    }

    let dimension = match Dimension::try_from(opts.dimension) {
        Ok(d) => d,
        Err(e) => {
            error!("{}", e);
            std::process::exit(1);
        }
    };

    let mut session = Session::new(dimension);
    let stdin = io::stdin();

    println!("{}", HELP);
    println!();
    println!("{:.*}", opts.precision, Report::of(&session));

    loop {
        print!("> ");
        io::stdout().flush().ok();

        let mut line = String::new();
        match stdin.lock().read_line(&mut line) {
            Ok(0) => break,
            Ok(_) => (),
            Err(e) => {
                error!("{}", e);
                break;
            }
        }

        match apply(&mut session, line.trim()) {
            Ok(true) => println!("{:.*}", opts.precision, Report::of(&session)),
            Ok(false) => break,
            Err(e) => println!("{}", e),
        }
    }
}
