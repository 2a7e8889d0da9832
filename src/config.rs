//! Shell configuration from `atomvm.toml`.
//!
//! ```toml
//! [repl]
//! prompt = "atomvm> "
//!
//! [dump]
//! bank_preview = 8
//! stack_preview = 5
//! zero_preview = 5
//! ```
//!
//! Every key is optional; defaults reproduce the reference output.

use std::path::{Path, PathBuf};

use crate::diagnostic::Diagnostic;
use crate::span::Span;

/// File name searched for by [`Config::find`].
pub const CONFIG_FILE: &str = "atomvm.toml";

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Config {
    /// REPL prompt, printed verbatim.
    pub prompt: String,
    /// Leading cells shown for Context64 and State256 in dumps.
    pub bank_preview: usize,
    /// Top-of-stack entries shown in dumps.
    pub stack_preview: usize,
    /// Paths listed after `zero`.
    pub zero_preview: usize,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            prompt: "atomvm> ".to_string(),
            bank_preview: 8,
            stack_preview: 5,
            zero_preview: 5,
        }
    }
}

impl Config {
    /// Load a configuration file.
    pub fn load(path: &Path) -> Result<Self, Diagnostic> {
        let content = std::fs::read_to_string(path).map_err(|e| {
            Diagnostic::error(
                format!("cannot read config '{}': {}", path.display(), e),
                Span::dummy(),
            )
        })?;
        Self::parse_toml(&content, path)
    }

    /// Try to find an `atomvm.toml` in the given directory or its ancestors.
    pub fn find(start_dir: &Path) -> Option<PathBuf> {
        let mut dir = start_dir.to_path_buf();
        loop {
            let candidate = dir.join(CONFIG_FILE);
            if candidate.exists() {
                return Some(candidate);
            }
            if !dir.pop() {
                return None;
            }
        }
    }

    /// Load the nearest `atomvm.toml`, or defaults when there is none.
    pub fn discover(start_dir: &Path) -> Result<Self, Diagnostic> {
        match Self::find(start_dir) {
            Some(path) => {
                tracing::debug!(path = %path.display(), "loading config");
                Self::load(&path)
            }
            None => Ok(Self::default()),
        }
    }

    fn parse_toml(content: &str, path: &Path) -> Result<Self, Diagnostic> {
        let err =
            |msg: String| Diagnostic::error(format!("{}: {}", path.display(), msg), Span::dummy());
        let parse_count = |key: &str, value: &str| -> Result<usize, Diagnostic> {
            match value.parse::<usize>() {
                Ok(n) if n > 0 => Ok(n),
                _ => Err(err(format!("invalid {}: {} (expected a positive integer)", key, value))),
            }
        };

        let mut config = Config::default();
        let mut section = String::new();

        for line in content.lines() {
            let trimmed = line.trim();
            if trimmed.is_empty() || trimmed.starts_with('#') {
                continue;
            }
            if trimmed.starts_with('[') && trimmed.ends_with(']') {
                section = trimmed[1..trimmed.len() - 1].trim().to_string();
                continue;
            }
            if let Some((key, value)) = trimmed.split_once('=') {
                let key = key.trim();
                let value = strip_comment(value.trim());

                match (section.as_str(), key) {
                    ("repl", "prompt") => config.prompt = value.trim_matches('"').to_string(),
                    ("dump", "bank_preview") => {
                        config.bank_preview = parse_count("dump.bank_preview", value)?;
                    }
                    ("dump", "stack_preview") => {
                        config.stack_preview = parse_count("dump.stack_preview", value)?;
                    }
                    ("dump", "zero_preview") => {
                        config.zero_preview = parse_count("dump.zero_preview", value)?;
                    }
                    _ => {
                        tracing::warn!(section = %section, key, "unknown config key ignored");
                    }
                }
            }
        }

        Ok(config)
    }
}

/// Drop a trailing `# comment`, keeping `#` inside a quoted string.
fn strip_comment(value: &str) -> &str {
    if let Some(rest) = value.strip_prefix('"') {
        return match rest.find('"') {
            Some(end) => &value[..end + 2],
            None => value,
        };
    }
    match value.find('#') {
        Some(idx) => value[..idx].trim_end(),
        None => value,
    }
}
