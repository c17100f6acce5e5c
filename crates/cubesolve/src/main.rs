//! Command-line Rubik's Cube scrambler and layer-by-layer solver.

#[macro_use]
extern crate lazy_static;

mod cli;
mod driver;
mod prefs;

use clap::Parser;

fn main() -> eyre::Result<()> {
    let args = cli::Args::parse();

    color_eyre::install().expect("error initializing panic handler");

    let prefs = prefs::Preferences::load(args.prefs.as_deref());

    // Initialize logging.
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(&prefs.log_level))
        .init();

    cli::exec(args.subcommand, &prefs)
}
