use std::env;
use std::fs;
use std::io::{self, Read, Write};

use anyhow::Error;
use clap::{values_t, App, AppSettings, Arg, ArgMatches};
use env_logger::{fmt, Builder, Target};
use log::{error, info};
use log::{Level, LevelFilter, Record};

use varisat::config::{SolverConfig, SolverConfigUpdate};
use varisat_bits::Context;

mod puzzles;

fn main() {
    let exit_code = match main_with_err() {
        Err(err) => {
            error!("{}", err);
            1
        }
        Ok(exit_code) => exit_code,
    };
    std::process::exit(exit_code);
}

fn init_logging() {
    let format = |buf: &mut fmt::Formatter, record: &Record| {
        if record.level() == Level::Info {
            writeln!(buf, "c {}", record.args())
        } else {
            writeln!(buf, "c {}: {}", record.level(), record.args())
        }
    };

    let mut builder = Builder::new();
    builder
        .target(Target::Stdout)
        .format(format)
        .filter(None, LevelFilter::Info);

    if let Ok(ref env_var) = env::var("VARISAT_BITS_LOG") {
        builder.parse_filters(env_var);
    }

    builder.init();
}

fn main_with_err() -> Result<i32, Error> {
    let matches = App::new("varisat-bits")
        .version(env!("CARGO_PKG_VERSION"))
        .about("Solves puzzles by compiling them to CNF")
        .setting(AppSettings::VersionlessSubcommands)
        .arg_from_usage("[config-file] --config=[FILE] 'Read parameters from configuration file'")
        .arg(
            Arg::from_usage("[config-option] -C --config-option")
                .value_name("OPTION>=<VALUE")
                .help(
                    "Specify a single config option, see 'varisat-bits -C help' for a list of \
                     options.",
                )
                .multiple(true)
                .number_of_values(1),
        )
        .arg_from_usage(
            "[dimacs-file] --dimacs=[FILE] 'Write the compiled formula to the specified file'",
        )
        .subcommands(puzzles::puzzle_args())
        .get_matches();

    if values_t!(matches, "config-option", String)
        .unwrap_or_default()
        .iter()
        .any(|option| option == "help")
    {
        print!("{}", SolverConfig::help());
        return Ok(0);
    }

    init_logging();
    info!("This is varisat-bits {}", env!("CARGO_PKG_VERSION"));

    let mut ctx = Context::new();
    ctx.configure(&solver_config(&matches)?)?;

    let dimacs_path = matches.value_of("dimacs-file");
    if dimacs_path.is_some() {
        ctx.record_formula(true);
    }

    let (name, puzzle_matches) = match matches.subcommand() {
        (name, Some(puzzle_matches)) => (name, puzzle_matches),
        (_, None) => {
            println!("{}", matches.usage());
            return Ok(1);
        }
    };

    let puzzle = puzzles::build(&mut ctx, name, puzzle_matches)?;

    info!("Compiled {}", ctx.stats());

    if let Some(path) = dimacs_path {
        info!("Writing formula to file '{}'", path);
        let mut file = io::BufWriter::new(fs::File::create(path)?);
        ctx.write_dimacs(&mut file)?;
        file.flush()?;
    }

    if ctx.solve()? {
        puzzle.print(&ctx);
        Ok(10)
    } else {
        println!("unsatisfiable");
        Ok(20)
    }
}

/// Merge the config file and all config options, in that order.
fn solver_config(matches: &ArgMatches) -> Result<SolverConfigUpdate, Error> {
    let mut config_update = SolverConfigUpdate::new();

    if let Some(config_path) = matches.value_of("config-file") {
        let mut config_contents = String::new();
        fs::File::open(config_path)?.read_to_string(&mut config_contents)?;

        config_update.merge(toml::from_str(&config_contents)?);
    }

    for config_option in values_t!(matches, "config-option", String).unwrap_or_default() {
        config_update.merge(toml::from_str(&config_option)?);
    }

    Ok(config_update)
}
