//! Line tokenizer for the interactive shell.

use thiserror::Error;

use crate::register::BankId;
use crate::value::Value;

/// One parsed shell line.
#[derive(Clone, Debug, PartialEq)]
pub enum Command {
    /// Reset all 512 leaves to `Ø`.
    Zero,
    /// `set <path> <value...>`: the value is the rest of the line.
    Set { path: String, value: Value },
    /// `get <path>`
    Get { path: String },
    /// `dump [json]`
    Dump { json: bool },
    /// Run the demonstration script.
    Demo,
    /// `push <value...>`
    Push { value: Value },
    Pop,
    /// Pop two values and print their pair.
    Pair,
    /// `fold <value> <value> ...`
    Fold { values: Vec<Value> },
    /// `load <bank> <value> ...`
    Load { bank: BankId, values: Vec<Value> },
    /// `batch <bank> <index> <value> ...`
    LoadBatch {
        bank: BankId,
        batch: usize,
        values: Vec<Value>,
    },
    Help,
    Exit,
}

#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum ShellError {
    /// Unrecognized command, or a known one missing its arguments.
    #[error("Unknown command: {0}")]
    UnknownCommand(String),
    #[error("{command}: {message}")]
    BadArgument { command: String, message: String },
}

/// Split off the first whitespace-delimited token.
fn next_token(s: &str) -> Option<(&str, &str)> {
    let s = s.trim_start();
    if s.is_empty() {
        return None;
    }
    match s.find(char::is_whitespace) {
        Some(idx) => Some((&s[..idx], s[idx..].trim_start())),
        None => Some((s, "")),
    }
}

fn literals(s: &str) -> Vec<Value> {
    s.split_whitespace().map(Value::from_literal).collect()
}

/// Parse one input line. Blank lines yield `Ok(None)`.
///
/// Command names are case-insensitive. `set` and `push` take the rest of
/// the line as a single value, so it may contain spaces.
pub fn parse_line(line: &str) -> Result<Option<Command>, ShellError> {
    let Some((name, rest)) = next_token(line.trim()) else {
        return Ok(None);
    };
    let name = name.to_lowercase();
    let unknown = || ShellError::UnknownCommand(name.clone());
    let bad = |message: String| ShellError::BadArgument {
        command: name.clone(),
        message,
    };
    let bank = |token: &str| {
        BankId::from_name(token).ok_or_else(|| {
            bad(format!(
                "unknown bank '{}' (expected Logic4, Record16, Context64 or State256)",
                token
            ))
        })
    };

    let command = match name.as_str() {
        "exit" | "quit" => Command::Exit,
        "zero" => Command::Zero,
        "help" => Command::Help,
        "demo" => Command::Demo,
        "pop" => Command::Pop,
        "pair" => Command::Pair,
        "dump" => Command::Dump {
            json: rest.eq_ignore_ascii_case("json"),
        },
        "set" => {
            let (path, value) = next_token(rest).ok_or_else(unknown)?;
            if value.is_empty() {
                return Err(unknown());
            }
            Command::Set {
                path: path.to_string(),
                value: Value::from_literal(value),
            }
        }
        "get" => {
            let (path, _) = next_token(rest).ok_or_else(unknown)?;
            Command::Get {
                path: path.to_string(),
            }
        }
        "push" => {
            if rest.is_empty() {
                return Err(unknown());
            }
            Command::Push {
                value: Value::from_literal(rest),
            }
        }
        "fold" => Command::Fold {
            values: literals(rest),
        },
        "load" => {
            let (id, values) = next_token(rest).ok_or_else(unknown)?;
            Command::Load {
                bank: bank(id)?,
                values: literals(values),
            }
        }
        "batch" => {
            let (id, rest) = next_token(rest).ok_or_else(unknown)?;
            let (index, values) = next_token(rest).ok_or_else(unknown)?;
            let batch = index
                .parse::<usize>()
                .map_err(|_| bad(format!("invalid batch index '{}'", index)))?;
            Command::LoadBatch {
                bank: bank(id)?,
                batch,
                values: literals(values),
            }
        }
        _ => return Err(unknown()),
    };
    Ok(Some(command))
}
