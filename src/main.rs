use clap::{error::ErrorKind, CommandFactory, Parser};
use std::{env, process};
use tracing_subscriber::EnvFilter;

use grabexif::{cli::Cli, config::RunConfig, extract::process_input};

fn init_tracing(config: &RunConfig) {
    let rust_log = env::var(EnvFilter::DEFAULT_ENV).ok();
    let filter = EnvFilter::new(config.log_filter(rust_log.as_deref()));
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stdout)
        .with_target(false)
        .try_init();
}

fn print_help(program_name: &str) {
    eprintln!("{} - {}", program_name, env!("CARGO_PKG_VERSION"));
    eprintln!("{}", Cli::command().bin_name(program_name).render_help());
}

fn main() {
    let argv0 = env::args().next();
    let args = match Cli::try_parse() {
        Ok(args) => args,
        Err(e) if e.kind() == ErrorKind::DisplayVersion => e.exit(),
        Err(e) => {
            eprint!("{}", e);
            process::exit(1);
        }
    };
    let config = RunConfig::from_cli(argv0, &args);

    if args.help {
        print_help(&config.program_name);
        process::exit(0);
    }

    init_tracing(&config);

    match process_input(&config) {
        Ok(_) => println!("{} - Success!", config.program_name),
        Err(e) => {
            println!("{} - {}", config.program_name, e);
            println!(
                "{} - Error, exiting. Run with '-h' switch for help",
                config.program_name
            );
            process::exit(1);
        }
    }
}
