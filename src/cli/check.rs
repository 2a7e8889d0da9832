use std::process;

use clap::Args;

use atomvm::path;

#[derive(Args)]
pub struct CheckArgs {
    /// Canonical path, e.g. State.FrameA.Local.Block1.Record1.Closure1.Logic1.Relation1.L
    pub path: String,
}

pub fn cmd_check(args: CheckArgs) {
    match path::CanonicalPath::parse(&args.path) {
        Ok(p) => {
            println!("{}", p);
            eprintln!("OK: leaf {} of {}", p.ordinal(), path::LEAF_COUNT);
        }
        Err(e) => {
            e.to_diagnostic().render("<path>", &args.path);
            process::exit(1);
        }
    }
}
