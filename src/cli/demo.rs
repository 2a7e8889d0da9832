use std::process;

use atomvm::{Config, Shell};

pub fn cmd_demo(config: Config) {
    let mut shell = Shell::new(config);
    let reply = shell.execute(atomvm::shell::Command::Demo);
    print!("{}", reply.stdout);
    eprint!("{}", reply.stderr);
    if reply.error.is_some() {
        process::exit(1);
    }
}
