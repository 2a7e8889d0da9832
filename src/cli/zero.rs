use clap::Args;

use atomvm::format::render_zero;
use atomvm::{AtomVm, Config};

#[derive(Args)]
pub struct ZeroArgs {
    /// List all 512 generated paths instead of the first few
    #[arg(long)]
    pub all: bool,
}

pub fn cmd_zero(args: ZeroArgs, config: &Config) {
    let mut vm = AtomVm::new();
    let paths = vm.initialize_zero();
    let preview = if args.all {
        paths.len()
    } else {
        config.zero_preview
    };
    print!("{}", render_zero(&paths, preview));
}
