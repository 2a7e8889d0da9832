use super::*;
use crate::register::BankId;
use crate::value::Value;

const LEFT: &str = "State.FrameA.Local.Block1.Record1.Closure1.Logic1.Relation1.L";

fn shell() -> Shell {
    Shell::new(Config::default())
}

fn transcript(shell: &mut Shell, lines: &[&str]) -> String {
    let mut out = String::new();
    for line in lines {
        let reply = shell.execute_line(line);
        out.push_str(&shell.config().prompt);
        out.push_str(line);
        out.push('\n');
        out.push_str(&reply.stdout);
        out.push_str(&reply.stderr);
    }
    out
}

// ── Parsing ──

#[test]
fn test_parse_blank_lines() {
    assert_eq!(parse_line(""), Ok(None));
    assert_eq!(parse_line("   \t "), Ok(None));
}

#[test]
fn test_parse_set_keeps_rest_of_line() {
    let cmd = parse_line(&format!("set {}   two  words", LEFT)).unwrap();
    assert_eq!(
        cmd,
        Some(Command::Set {
            path: LEFT.to_string(),
            value: Value::text("two  words"),
        })
    );
}

#[test]
fn test_parse_set_typed_literal() {
    match parse_line(&format!("set {} 42", LEFT)) {
        Ok(Some(Command::Set { value, .. })) => assert_eq!(value, Value::Int(42)),
        other => panic!("unexpected {:?}", other),
    }
}

#[test]
fn test_parse_case_insensitive() {
    assert_eq!(parse_line("DUMP"), Ok(Some(Command::Dump { json: false })));
    assert_eq!(parse_line("dump JSON"), Ok(Some(Command::Dump { json: true })));
    assert_eq!(parse_line("Quit"), Ok(Some(Command::Exit)));
}

#[test]
fn test_parse_missing_arguments_is_unknown() {
    assert_eq!(
        parse_line("set onlypath"),
        Err(ShellError::UnknownCommand("set".to_string()))
    );
    assert_eq!(
        parse_line("get"),
        Err(ShellError::UnknownCommand("get".to_string()))
    );
    assert_eq!(
        parse_line("push"),
        Err(ShellError::UnknownCommand("push".to_string()))
    );
}

#[test]
fn test_parse_get_ignores_extra_tokens() {
    assert_eq!(
        parse_line(&format!("get {} extra", LEFT)),
        Ok(Some(Command::Get {
            path: LEFT.to_string()
        }))
    );
}

#[test]
fn test_parse_load_and_batch() {
    assert_eq!(
        parse_line("load logic4 1 2 x"),
        Ok(Some(Command::Load {
            bank: BankId::Logic4,
            values: vec![Value::Int(1), Value::Int(2), Value::text("x")],
        }))
    );
    assert_eq!(
        parse_line("batch Context64 2 a"),
        Ok(Some(Command::LoadBatch {
            bank: BankId::Context64,
            batch: 2,
            values: vec![Value::text("a")],
        }))
    );
    assert!(matches!(
        parse_line("batch Context64 -1 a"),
        Err(ShellError::BadArgument { .. })
    ));
    assert!(matches!(
        parse_line("load Frame128 1"),
        Err(ShellError::BadArgument { .. })
    ));
}

#[test]
fn test_parse_fold_without_values() {
    assert_eq!(
        parse_line("fold"),
        Ok(Some(Command::Fold { values: vec![] }))
    );
}

// ── Execution ──

#[test]
fn test_session_transcript() {
    let mut shell = shell();
    let out = transcript(
        &mut shell,
        &[
            "zero",
            "set State.FrameA.Local.Block1.Record1.Closure1.Logic1.Relation1.L hello world",
            "get State.FrameA.Local.Block1.Record1.Closure1.Logic1.Relation1.L",
            "get State.FrameC.Local.Block1.Record1.Closure1.Logic1.Relation1.L",
            "SET State.FrameA.Local x",
            "frobnicate",
            "set lonely",
        ],
    );
    insta::assert_snapshot!(out.trim_end(), @r"
    atomvm> zero
    Generated 512 zero atoms
    atomvm> set State.FrameA.Local.Block1.Record1.Closure1.Logic1.Relation1.L hello world
    OK State.FrameA.Local.Block1.Record1.Closure1.Logic1.Relation1.L
    atomvm> get State.FrameA.Local.Block1.Record1.Closure1.Logic1.Relation1.L
    State.FrameA.Local.Block1.Record1.Closure1.Logic1.Relation1.L = hello world
    atomvm> get State.FrameC.Local.Block1.Record1.Closure1.Logic1.Relation1.L
    ERROR: Invalid path: State.FrameC.Local.Block1.Record1.Closure1.Logic1.Relation1.L
    atomvm> SET State.FrameA.Local x
    ERROR: Invalid path: State.FrameA.Local
    atomvm> frobnicate
    Unknown command: frobnicate
    atomvm> set lonely
    Unknown command: set
    ");
}

#[test]
fn test_path_errors_carry_kind() {
    let mut shell = shell();
    let reply = shell.execute_line("get State.FrameA.Local");
    assert!(matches!(reply.error, Some(PathError::MalformedPath { .. })));
    let reply = shell.execute_line(&format!("set {} v", LEFT.replace("Logic1", "Logic3")));
    assert!(matches!(reply.error, Some(PathError::InvalidPath { .. })));
    assert!(reply.stdout.is_empty());
}

#[test]
fn test_failed_set_does_not_mutate() {
    let mut shell = shell();
    shell.execute_line("set State.FrameA.Remote.Block1.Record1.Closure1.Logic1.Relation1.Q v");
    assert_eq!(shell.vm().snapshot().leaf_count, 0);
}

#[test]
fn test_exit() {
    let mut shell = shell();
    assert!(shell.execute_line("exit").exit);
    assert!(!shell.execute_line("help").exit);
}

#[test]
fn test_help_lists_commands() {
    let reply = shell().execute_line("help");
    for cmd in ["zero", "set <path> <value>", "get <path>", "dump", "exit"] {
        assert!(reply.stdout.contains(cmd), "help missing {}", cmd);
    }
}

#[test]
fn test_stack_commands() {
    let mut shell = shell();
    assert_eq!(shell.execute_line("push a").stdout, "depth = 1\n");
    assert_eq!(shell.execute_line("push b").stdout, "depth = 2\n");
    assert_eq!(shell.execute_line("pair").stdout, "(b . a)\n");
    let reply = shell.execute_line("pop");
    assert_eq!(reply.stdout, "");
    assert_eq!(reply.stderr, "stack empty\n");
    shell.execute_line("push Ø");
    assert_eq!(shell.execute_line("pop").stdout, "Ø\n");
}

#[test]
fn test_fold_command() {
    let mut shell = shell();
    assert_eq!(shell.execute_line("fold a b c").stdout, "((a . b) . c)\n");
    assert_eq!(shell.execute_line("fold").stdout, "Ø\n");
}

#[test]
fn test_load_commands() {
    let mut shell = shell();
    let reply = shell.execute_line("load logic4 1 2 3 4 5");
    assert_eq!(
        reply.stdout,
        "Loaded 4 values into Logic4\nLogic4: [1, 2, 3, 4]\n"
    );
    let reply = shell.execute_line("batch context64 3 x y");
    assert_eq!(reply.stdout, "Loaded 2 values into Context64 batch 3\n");
    assert_eq!(
        shell.vm().bank(BankId::Context64).get(48),
        Some(&Value::text("x"))
    );
    let reply = shell.execute_line("batch context64 5 x");
    assert!(reply.stdout.is_empty());
    assert!(reply.stderr.starts_with("warning: batch 5 out of range for Context64"));
}

#[test]
fn test_dump_json() {
    let mut shell = shell();
    let reply = shell.execute_line("dump json");
    assert!(reply.stdout.starts_with("{\n  \"logic4\""));
    assert!(reply.stdout.ends_with("}\n"));
}

#[test]
fn test_demo_output() {
    let mut shell = shell();
    let reply = shell.execute_line("demo");
    let out = reply.stdout;
    assert!(out.starts_with("=== AtomVM Demo ===\n\n1. Building tree from 8 atoms:\n"));
    assert!(out.contains(
        "   Input: ['A1', 'A2', 'A3', 'A4', 'A5', 'A6', 'A7', 'A8']\n"
    ));
    assert!(out.contains(
        "   Tree: (((A1 . A2) . (A3 . A4)) . ((A5 . A6) . (A7 . A8)))\n"
    ));
    assert!(out.contains("   Logic4: [1, 2, 3, 4]\n"));
    assert!(out.contains(&format!("   {} = CID:bafy...\n", LEFT)));
    assert!(out.contains("   Created pair: (Relation2 . Relation1)\n"));
    assert!(out.contains("Stack (depth=0): []\n"));
    assert!(out.contains("Leaves stored: 2\n"));
    assert!(reply.stderr.is_empty());
}
