use clap::Parser;
use log::LevelFilter;

use papertrail::cli::{Cli, Commands};
use papertrail::commands::{
    run_add, run_generate, run_init, run_list, run_remove, run_search, run_stats,
};

/// Map `-q`/`-v` to a log level. `RUST_LOG` still takes precedence.
const fn log_level(verbose: u8, quiet: bool) -> LevelFilter {
    if quiet {
        return LevelFilter::Error;
    }
    match verbose {
        0 => LevelFilter::Warn,
        1 => LevelFilter::Info,
        2 => LevelFilter::Debug,
        _ => LevelFilter::Trace,
    }
}

fn setup_logging(verbose: u8, quiet: bool) {
    env_logger::Builder::new()
        .filter_level(log_level(verbose, quiet))
        .parse_default_env()
        .format_timestamp_secs()
        .init();
}

fn main() {
    let cli = Cli::parse();
    setup_logging(cli.verbose, cli.quiet);

    let exit_code = match &cli.command {
        Commands::Init(args) => run_init(args, &cli),
        Commands::Add(args) => run_add(args, &cli),
        Commands::List(args) => run_list(args, &cli),
        Commands::Search(args) => run_search(args, &cli),
        Commands::Stats(args) => run_stats(args, &cli),
        Commands::Remove(args) => run_remove(args, &cli),
        Commands::Generate(args) => run_generate(args, &cli),
    };

    std::process::exit(exit_code);
}

#[cfg(test)]
#[path = "main_tests.rs"]
mod tests;
