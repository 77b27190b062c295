//! Command-line scrambler and solver for twisty puzzles.

mod cli;

fn main() -> eyre::Result<()> {
    use clap::Parser;

    let args = cli::Args::parse();

    // Initialize logging.
    env_logger::builder().init();

    cli::exec(args.subcommand)
}
