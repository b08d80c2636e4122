use std::{io::BufReader, path::PathBuf};

use clap::Parser;

use minnow_sat::{
    config::{Config, Switches},
    context::Context,
    reports::Report,
    trace::Trace,
};

/// Determines whether a formula is satisfiable or unsatisfiable
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// The CNF file to parse, with a clause to a line (standard input, if no file is given)
    file: Option<PathBuf>,

    /// Skip unit clause propagation
    #[arg(long = "no-unit", default_value_t = false)]
    no_unit: bool,

    /// Skip pure literal elimination
    #[arg(long = "no-pure", default_value_t = false)]
    no_pure: bool,

    /// Display each step of the procedure as it is taken
    #[arg(short, long, default_value_t = false)]
    debug: bool,

    /// Display stats on completion
    #[arg(short, long, default_value_t = false)]
    stats: bool,
}

fn config_from_args(args: &Args) -> Config {
    Config {
        switches: Switches {
            unit_propagation: !args.no_unit,
            pure_literals: !args.no_pure,
        },
    }
}

fn main() {
    env_logger::init();

    let args = Args::parse();

    let mut the_context = Context::from_config(config_from_args(&args));

    if args.debug {
        the_context.set_callback_trace(Box::new(|trace: Trace| println!("c {trace}")));
    }

    let parse_result = match &args.file {
        Some(path) => {
            let file = match std::fs::File::open(path) {
                Ok(file) => file,

                Err(_) => {
                    println!("c Failed to open CNF file {path:?}");
                    std::process::exit(1);
                }
            };

            println!("c Reading CNF file from {path:?}");
            the_context.read_cnf(BufReader::new(file))
        }

        None => the_context.read_cnf(std::io::stdin().lock()),
    };

    if let Err(e) = parse_result {
        println!("c Error reading formula: {e:?}");
        std::process::exit(1);
    }

    let report = match the_context.solve() {
        Ok(report) => report,

        Err(e) => {
            println!("c Solve error: {e:?}");
            std::process::exit(2);
        }
    };

    match report {
        Report::Satisfiable => {
            let valuation = the_context.atom_db.valuation_string();
            match valuation.is_empty() {
                true => println!("{report}"),
                false => println!("{report} {valuation}"),
            }
        }

        _ => println!("{report}"),
    }

    if args.stats {
        println!("c Decisions:    {}", the_context.counters.total_decisions);
        println!("c Propagations: {}", the_context.counters.total_propagations);
        println!("c Eliminations: {}", the_context.counters.total_eliminations);
        println!("c Conflicts:    {}", the_context.counters.total_conflicts);
        println!("c Time:         {:?}", the_context.counters.time);
    }
}
