//! Text and JSON rendering of VM snapshots.
//!
//! Text dumps print register and stack contents as bracketed lists with
//! text quoted (`['Ø', 'x']`) and numbers bare (`[1, 2.5]`), so dumps
//! diff cleanly against those produced by existing tooling.

use std::fmt::Write;

use crate::config::Config;
use crate::path::CanonicalPath;
use crate::register::BankId;
use crate::value::{json_string, Value, EMPTY};
use crate::vm::Snapshot;

/// List-element form of a value: text quoted, numbers bare.
///
/// Text uses single quotes unless it contains `'` and no `"`. Backslashes,
/// the chosen quote and control characters are escaped.
pub fn repr(value: &Value) -> String {
    match value {
        Value::Empty => format!("'{}'", EMPTY),
        Value::Text(s) => quote(s),
        Value::Int(_) | Value::Real(_) => value.to_string(),
    }
}

fn quote(s: &str) -> String {
    let delim = if s.contains('\'') && !s.contains('"') {
        '"'
    } else {
        '\''
    };
    let mut out = String::with_capacity(s.len() + 2);
    out.push(delim);
    for c in s.chars() {
        match c {
            '\\' => out.push_str("\\\\"),
            '\n' => out.push_str("\\n"),
            '\r' => out.push_str("\\r"),
            '\t' => out.push_str("\\t"),
            c if c == delim => {
                out.push('\\');
                out.push(c);
            }
            c if c.is_control() => {
                let _ = write!(out, "\\x{:02x}", c as u32);
            }
            c => out.push(c),
        }
    }
    out.push(delim);
    out
}

pub fn render_list(values: &[Value]) -> String {
    let items: Vec<String> = values.iter().map(repr).collect();
    format!("[{}]", items.join(", "))
}

/// Multi-line state dump.
pub fn render_dump(snapshot: &Snapshot, config: &Config) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "=== VM State ===");
    let _ = writeln!(out);
    for id in [BankId::Logic4, BankId::Record16] {
        let _ = writeln!(
            out,
            "{} ({}): {}",
            id,
            id.sphere(),
            render_list(snapshot.bank(id))
        );
    }
    for id in [BankId::Context64, BankId::State256] {
        let cells = snapshot.bank(id);
        let shown = &cells[..config.bank_preview.min(cells.len())];
        let _ = writeln!(
            out,
            "{} ({}) [first {}]: {}...",
            id,
            id.sphere(),
            config.bank_preview,
            render_list(shown)
        );
    }
    let _ = writeln!(out);
    let depth = snapshot.stack.len();
    let top = &snapshot.stack[depth.saturating_sub(config.stack_preview)..];
    let _ = writeln!(out, "Stack (depth={}): {}", depth, render_list(top));
    let _ = writeln!(out, "Leaves stored: {}", snapshot.leaf_count);
    let _ = writeln!(out, "Digest: {}", snapshot.digest);
    out
}

/// Summary printed after a zero initialization.
pub fn render_zero(paths: &[CanonicalPath], preview: usize) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "Generated {} zero atoms", paths.len());
    for path in paths.iter().take(preview) {
        let _ = writeln!(out, "  {} = {}", path, EMPTY);
    }
    if paths.len() > preview {
        let _ = writeln!(out, "  ... and {} more", paths.len() - preview);
    }
    out
}

fn json_list(values: &[Value]) -> String {
    let items: Vec<String> = values.iter().map(Value::to_json_value).collect();
    format!("[{}]", items.join(", "))
}

/// Serialize a snapshot to a JSON object string.
pub fn snapshot_to_json(snapshot: &Snapshot) -> String {
    let mut out = String::from("{\n");
    for id in BankId::ALL {
        let _ = writeln!(
            out,
            "  {}: {},",
            json_string(&id.name().to_ascii_lowercase()),
            json_list(snapshot.bank(id))
        );
    }
    let _ = writeln!(out, "  \"stack\": {},", json_list(&snapshot.stack));
    let _ = writeln!(out, "  \"leaf_count\": {},", snapshot.leaf_count);
    let _ = writeln!(out, "  \"pc\": {},", snapshot.pc);
    let _ = writeln!(out, "  \"digest\": \"{}\"", snapshot.digest.to_hex());
    out.push('}');
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::vm::AtomVm;

    #[test]
    fn test_repr() {
        assert_eq!(repr(&Value::Empty), "'Ø'");
        assert_eq!(repr(&Value::text("A1")), "'A1'");
        assert_eq!(repr(&Value::text("it's")), "\"it's\"");
        assert_eq!(repr(&Value::text("it's \"x\"")), "'it\\'s \"x\"'");
        assert_eq!(repr(&Value::Int(3)), "3");
        assert_eq!(repr(&Value::Real(0.5)), "0.5");
    }

    #[test]
    fn test_repr_escapes() {
        assert_eq!(repr(&Value::text("a\\b")), "'a\\\\b'");
        assert_eq!(repr(&Value::text("x\ny\tz")), "'x\\ny\\tz'");
        assert_eq!(repr(&Value::text("\u{1}")), "'\\x01'");
        assert_eq!(repr(&Value::text("Ø·λ")), "'Ø·λ'");
    }

    #[test]
    fn test_render_list() {
        assert_eq!(render_list(&[]), "[]");
        assert_eq!(
            render_list(&[Value::Int(1), Value::text("b"), Value::Empty]),
            "[1, 'b', 'Ø']"
        );
    }

    #[test]
    fn test_render_dump_fresh_vm() {
        let vm = AtomVm::new();
        let out = render_dump(&vm.snapshot(), &Config::default());
        let lines: Vec<&str> = out.lines().collect();
        assert_eq!(lines[0], "=== VM State ===");
        assert_eq!(lines[2], "Logic4 (S³): ['Ø', 'Ø', 'Ø', 'Ø']");
        assert!(lines[4].starts_with("Context64 (S⁶³) [first 8]: ['Ø', "));
        assert!(lines[4].ends_with("]..."));
        assert_eq!(lines[7], "Stack (depth=0): []");
        assert_eq!(lines[8], "Leaves stored: 0");
        assert!(lines[9].starts_with("Digest: #"));
    }

    #[test]
    fn test_render_dump_stack_window() {
        let mut vm = AtomVm::new();
        for i in 0..7 {
            vm.push(Value::Int(i));
        }
        let out = render_dump(&vm.snapshot(), &Config::default());
        assert!(out.contains("Stack (depth=7): [2, 3, 4, 5, 6]\n"), "got: {}", out);
    }

    #[test]
    fn test_render_zero() {
        let paths = CanonicalPath::all();
        let out = render_zero(&paths, 2);
        insta::assert_snapshot!(out.trim_end(), @r"
        Generated 512 zero atoms
          State.FrameA.Local.Block1.Record1.Closure1.Logic1.Relation1.L = Ø
          State.FrameA.Local.Block1.Record1.Closure1.Logic1.Relation1.R = Ø
          ... and 510 more
        ");
    }

    #[test]
    fn test_render_zero_small_preview_has_no_tail() {
        let paths = &CanonicalPath::all()[..2];
        let out = render_zero(paths, 5);
        assert!(!out.contains("more"));
        assert_eq!(out.lines().count(), 3);
    }

    #[test]
    fn test_snapshot_to_json() {
        let mut vm = AtomVm::new();
        vm.load(BankId::Logic4, &[Value::Int(1), Value::text("x")]);
        vm.push(Value::Real(1.5));
        let json = snapshot_to_json(&vm.snapshot());
        assert!(json.starts_with("{\n  \"logic4\": [1, \"x\", \"Ø\", \"Ø\"],\n"));
        assert!(json.contains("\"stack\": [1.5],"));
        assert!(json.contains("\"leaf_count\": 0,"));
        assert!(json.contains("\"pc\": 0,"));
        assert!(json.ends_with("\"\n}"));
    }
}
