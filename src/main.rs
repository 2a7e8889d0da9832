mod cli;

use std::path::PathBuf;

use clap::{Parser, Subcommand};

use cli::check::CheckArgs;
use cli::fold::FoldArgs;
use cli::zero::ZeroArgs;

#[derive(Parser)]
#[command(
    name = "atomvm",
    version,
    about = "AtomVM: State256 virtual machine with path-addressed leaves"
)]
struct Cli {
    /// Config file (default: nearest atomvm.toml)
    #[arg(long, global = true, value_name = "PATH")]
    config: Option<PathBuf>,
    /// Log VM operations to stderr
    #[arg(short, long, global = true)]
    verbose: bool,
    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Subcommand)]
enum Command {
    /// Generate the zero State256 (every atom = Ø)
    Zero(ZeroArgs),
    /// Run the demonstration script
    Demo,
    /// Start the interactive REPL (default)
    Repl,
    /// Fold atoms into a nested relation tree
    Fold(FoldArgs),
    /// Parse and validate a canonical path
    Check(CheckArgs),
}

fn main() {
    let cli = Cli::parse();
    cli::init_tracing(cli.verbose);

    match cli.command.unwrap_or(Command::Repl) {
        Command::Zero(args) => cli::zero::cmd_zero(args, &cli::load_config(cli.config.as_deref())),
        Command::Demo => cli::demo::cmd_demo(cli::load_config(cli.config.as_deref())),
        Command::Repl => cli::repl::cmd_repl(cli::load_config(cli.config.as_deref())),
        Command::Fold(args) => cli::fold::cmd_fold(args),
        Command::Check(args) => cli::check::cmd_check(args),
    }
}
