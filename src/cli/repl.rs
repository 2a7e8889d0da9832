use std::io;
use std::process;

use atomvm::shell::repl;
use atomvm::{Config, Shell};

pub fn cmd_repl(config: Config) {
    let mut shell = Shell::new(config);
    let stdin = io::stdin();
    if let Err(e) = repl::run(&mut shell, stdin.lock(), io::stdout(), io::stderr()) {
        eprintln!("error: {}", e);
        process::exit(1);
    }
}
