use anyhow::Result;
use clap::{Arg, ArgAction, ArgMatches, Command};
use log::LevelFilter;
use std::io::{self, Write};
use std::path::PathBuf;

use stp_algebra::config::DemoConfig;
use stp_algebra::math::Array2;
use stp_algebra::operands::ValueRange;
use stp_cli::config::{resolve_config, rng_from_config};
use stp_cli::operands::{bounded_column, bounded_matrix};
use stp_cli::parse::{parse_matrix, parse_vector};
use stp_cli::report::Report;
use stp_cli::session::Session;

fn dim_arg(id: &'static str, short: char, help: &'static str, default: &'static str) -> Arg {
    Arg::new(id)
        .short(short)
        .help(help)
        .value_parser(clap::value_parser!(usize))
        .default_value(default)
}

fn literal_arg(id: &'static str, help: &'static str) -> Arg {
    Arg::new(id)
        .long(id)
        .help(help)
        .allow_hyphen_values(true)
        .value_parser(clap::builder::NonEmptyStringValueParser::new())
}

fn matrix_command(name: &'static str, about: &'static str) -> Command {
    Command::new(name)
        .about(about)
        .arg(dim_arg("m", 'm', "Rows of A", "2"))
        .arg(dim_arg("n", 'n', "Columns of A", "2"))
        .arg(dim_arg("p", 'p', "Rows of B", "3"))
        .arg(dim_arg("q", 'q', "Columns of B", "2"))
        .arg(literal_arg(
            "a",
            "Matrix A as a literal, rows separated by ';' (e.g. \"1,2;3,4\"). Overrides -m/-n.",
        ))
        .arg(literal_arg("b", "Matrix B as a literal. Overrides -p/-q."))
}

fn cli() -> Command {
    Command::new("stp")
        .version(clap::crate_version!())
        .about("Semi-tensor product demos: multiply and add matrices of mismatched dimensions")
        .subcommand_required(true)
        .arg_required_else_help(true)
        .arg(
            Arg::new("config")
                .long("config")
                .global(true)
                .help("Path to a JSON demo configuration file")
                .value_parser(clap::value_parser!(PathBuf)),
        )
        .arg(
            Arg::new("seed")
                .long("seed")
                .global(true)
                .help("Seed for random operands. Overrides the configuration file.")
                .value_parser(clap::value_parser!(u64)),
        )
        .arg(
            Arg::new("json")
                .long("json")
                .global(true)
                .help("Emit results as JSON")
                .action(ArgAction::SetTrue),
        )
        .subcommand(
            Command::new("reconcile")
                .about("Compute the common dimension and expansion factors for two sizes")
                .arg(
                    Arg::new("d1")
                        .required(true)
                        .value_parser(clap::value_parser!(usize)),
                )
                .arg(
                    Arg::new("d2")
                        .required(true)
                        .value_parser(clap::value_parser!(usize)),
                ),
        )
        .subcommand(matrix_command("product", "STP product of an m x n and a p x q matrix"))
        .subcommand(matrix_command("add-matrices", "STP addition of an m x n and a p x q matrix"))
        .subcommand(
            Command::new("add-vectors")
                .about("STP addition (feature fusion) of two column vectors")
                .arg(
                    Arg::new("dim1")
                        .long("dim1")
                        .help("Length of the first vector")
                        .value_parser(clap::value_parser!(usize))
                        .default_value("4"),
                )
                .arg(
                    Arg::new("dim2")
                        .long("dim2")
                        .help("Length of the second vector")
                        .value_parser(clap::value_parser!(usize))
                        .default_value("3"),
                )
                .arg(literal_arg("v1", "First vector as a literal (e.g. \"10,20\")"))
                .arg(literal_arg("v2", "Second vector as a literal")),
        )
        .subcommand(
            Command::new("session")
                .about("Read commands from stdin, reusing operands while dimensions are unchanged"),
        )
        .subcommand(Command::new("config").about("Print the effective demo configuration as JSON"))
}

fn main() -> Result<()> {
    env_logger::Builder::default()
        .filter_level(LevelFilter::Error)
        .parse_env(env_logger::Env::default().filter_or("STP_LOG", "error,stp=info"))
        .init();

    let matches = cli().get_matches();
    let config = resolve_config(
        matches.get_one::<PathBuf>("config"),
        matches.get_one::<u64>("seed").copied(),
    )?;
    let json = matches.get_flag("json");

    let report = match matches.subcommand() {
        Some(("reconcile", sub_m)) => {
            let d1 = *sub_m.get_one::<usize>("d1").unwrap();
            let d2 = *sub_m.get_one::<usize>("d2").unwrap();
            Report::reconcile(d1, d2)?
        }
        Some(("product", sub_m)) => {
            let (a, b) = matrix_operands(sub_m, &config, &config.product_values)?;
            log::info!("[STP] product {:?} x {:?}", a.shape(), b.shape());
            Report::product(a, b)?
        }
        Some(("add-matrices", sub_m)) => {
            let (a, b) = matrix_operands(sub_m, &config, &config.matrix_addition_values)?;
            log::info!("[STP] matrix addition {:?} + {:?}", a.shape(), b.shape());
            Report::matrix_addition(a, b)?
        }
        Some(("add-vectors", sub_m)) => {
            let (v1, v2) = vector_inputs(sub_m, &config)?;
            log::info!("[STP] vector fusion {} + {}", v1.nrows(), v2.nrows());
            Report::vector_addition(v1, v2)?
        }
        Some(("session", _)) => {
            log::info!("[STP] session started (seed: {:?})", config.seed);
            let rng = rng_from_config(&config);
            let mut session = Session::new(config, rng);
            let stdin = io::stdin();
            let mut stdout = io::stdout().lock();
            return session.run(stdin.lock(), &mut stdout, json);
        }
        Some(("config", _)) => {
            println!("{}", serde_json::to_string_pretty(&config)?);
            return Ok(());
        }
        _ => unreachable!("Subcommand is required by CLI configuration"),
    };

    let mut stdout = io::stdout().lock();
    if json {
        report.write_json(&mut stdout)?;
    } else {
        report.write_text(&mut stdout)?;
    }
    stdout.flush()?;
    Ok(())
}

/// Operands from literals where given, otherwise drawn at the requested dimensions.
fn matrix_operands(
    matches: &ArgMatches,
    config: &DemoConfig,
    range: &ValueRange,
) -> Result<(Array2<i64>, Array2<i64>)> {
    let dim = |id: &str| *matches.get_one::<usize>(id).unwrap();
    let mut rng = rng_from_config(config);

    let a = match matches.get_one::<String>("a") {
        Some(literal) => parse_matrix(literal)?,
        None => bounded_matrix(&mut rng, config, range, ("m", dim("m")), ("n", dim("n")))?,
    };
    let b = match matches.get_one::<String>("b") {
        Some(literal) => parse_matrix(literal)?,
        None => bounded_matrix(&mut rng, config, range, ("p", dim("p")), ("q", dim("q")))?,
    };
    Ok((a, b))
}

fn vector_inputs(matches: &ArgMatches, config: &DemoConfig) -> Result<(Array2<i64>, Array2<i64>)> {
    let dim = |id: &str| *matches.get_one::<usize>(id).unwrap();
    let mut rng = rng_from_config(config);

    let v1 = match matches.get_one::<String>("v1") {
        Some(literal) => parse_vector(literal)?,
        None => bounded_column(
            &mut rng,
            config,
            &config.primary_vector_values,
            ("dim1", dim("dim1")),
        )?,
    };
    let v2 = match matches.get_one::<String>("v2") {
        Some(literal) => parse_vector(literal)?,
        None => bounded_column(
            &mut rng,
            config,
            &config.secondary_vector_values,
            ("dim2", dim("dim2")),
        )?,
    };
    Ok((v1, v2))
}
