//! Command shell: dispatches textual commands to an [`AtomVm`].
//!
//! The shell is string-in / string-out. Every command produces a
//! [`Reply`] carrying what belongs on stdout and on stderr; the REPL and
//! the CLI decide where to write it. Path failures never end the session.

mod command;
mod demo;
pub mod repl;

pub use command::{parse_line, Command, ShellError};

use std::fmt::Write;

use crate::config::Config;
use crate::format::{render_dump, render_list, snapshot_to_json};
use crate::path::PathError;
use crate::vm::AtomVm;

pub const HELP: &str = "\
Commands:
  zero - Initialize zero State256
  set <path> <value> - Set leaf value
  get <path> - Get leaf value
  dump [json] - Dump VM state
  demo - Run the demonstration script
  push <value> - Push a value onto the stack
  pop - Pop the top of the stack
  pair - Pop two values and pair them
  fold <value>... - Fold values into a relation tree
  load <bank> <value>... - Load a register bank from index 0
  batch <bank> <index> <value>... - Load 16 cells at index*16
  exit - Exit REPL";

/// Output of one command.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Reply {
    pub stdout: String,
    pub stderr: String,
    /// The path failure behind an `ERROR:` line, for diagnostic rendering.
    pub error: Option<PathError>,
    /// The session should end.
    pub exit: bool,
}

impl Reply {
    fn out(text: impl Into<String>) -> Self {
        Self {
            stdout: text.into(),
            ..Self::default()
        }
    }

    fn err(text: impl Into<String>) -> Self {
        Self {
            stderr: text.into(),
            ..Self::default()
        }
    }

    fn path_error(error: PathError) -> Self {
        Self {
            stderr: format!("ERROR: Invalid path: {}\n", error.path()),
            error: Some(error),
            ..Self::default()
        }
    }
}

/// A VM plus the settings used to render its output.
pub struct Shell {
    vm: AtomVm,
    config: Config,
}

impl Shell {
    pub fn new(config: Config) -> Self {
        Self {
            vm: AtomVm::new(),
            config,
        }
    }

    pub fn vm(&self) -> &AtomVm {
        &self.vm
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    /// Parse and run one line. Blank lines produce an empty reply.
    pub fn execute_line(&mut self, line: &str) -> Reply {
        match parse_line(line) {
            Ok(Some(command)) => self.execute(command),
            Ok(None) => Reply::default(),
            Err(e @ ShellError::UnknownCommand(_)) => Reply::out(format!("{}\n", e)),
            Err(e) => Reply::err(format!("error: {}\n", e)),
        }
    }

    pub fn execute(&mut self, command: Command) -> Reply {
        tracing::debug!(?command, "execute");
        match command {
            Command::Exit => Reply {
                exit: true,
                ..Reply::default()
            },
            Command::Help => Reply::out(format!("{}\n", HELP)),
            Command::Zero => {
                let paths = self.vm.initialize_zero();
                Reply::out(format!("Generated {} zero atoms\n", paths.len()))
            }
            Command::Set { path, value } => match self.vm.set(&path, value) {
                Ok(_) => Reply::out(format!("OK {}\n", path)),
                Err(e) => Reply::path_error(e),
            },
            Command::Get { path } => match self.vm.get(&path) {
                Ok(value) => Reply::out(format!("{} = {}\n", path, value)),
                Err(e) => Reply::path_error(e),
            },
            Command::Dump { json: false } => {
                Reply::out(render_dump(&self.vm.snapshot(), &self.config))
            }
            Command::Dump { json: true } => {
                Reply::out(format!("{}\n", snapshot_to_json(&self.vm.snapshot())))
            }
            Command::Demo => match demo::run(&mut self.vm, &self.config) {
                Ok(text) => Reply::out(text),
                Err(e) => Reply::path_error(e),
            },
            Command::Push { value } => {
                self.vm.push(value);
                Reply::out(format!("depth = {}\n", self.vm.state().stack.depth()))
            }
            Command::Pop => match self.vm.pop() {
                Some(value) => Reply::out(format!("{}\n", value)),
                None => Reply::err("stack empty\n"),
            },
            Command::Pair => Reply::out(format!("{}\n", self.vm.pair_from_stack())),
            Command::Fold { values } => Reply::out(format!("{}\n", self.vm.fold(&values))),
            Command::Load { bank, values } => {
                let written = self.vm.load(bank, &values);
                let mut out = String::new();
                let _ = writeln!(out, "Loaded {} values into {}", written, bank);
                if bank.size() <= 16 {
                    let _ = writeln!(out, "{}: {}", bank, render_list(self.vm.bank(bank).cells()));
                }
                Reply::out(out)
            }
            Command::LoadBatch {
                bank,
                batch,
                values,
            } => match self.vm.load_batch(bank, batch, &values) {
                Some(written) => Reply::out(format!(
                    "Loaded {} values into {} batch {}\n",
                    written, bank, batch
                )),
                None => Reply::err(format!(
                    "warning: batch {} out of range for {} ({} batches), ignored\n",
                    batch,
                    bank,
                    bank.batch_count()
                )),
            },
        }
    }
}

#[cfg(test)]
mod tests;
