//! The five-step walkthrough behind `atomvm demo`.

use std::fmt::Write;

use crate::config::Config;
use crate::format::{render_dump, render_list};
use crate::path::PathError;
use crate::register::BankId;
use crate::value::Value;
use crate::vm::AtomVm;

const LEFT: &str = "State.FrameA.Local.Block1.Record1.Closure1.Logic1.Relation1.L";
const RIGHT: &str = "State.FrameA.Local.Block1.Record1.Closure1.Logic1.Relation1.R";

pub(super) fn run(vm: &mut AtomVm, config: &Config) -> Result<String, PathError> {
    let mut out = String::new();
    let _ = writeln!(out, "=== AtomVM Demo ===");
    let _ = writeln!(out);

    let _ = writeln!(out, "1. Building tree from 8 atoms:");
    let atoms: Vec<Value> = (1..=8).map(|i| Value::text(format!("A{}", i))).collect();
    let _ = writeln!(out, "   Input: {}", render_list(&atoms));
    let _ = writeln!(out, "   Tree: {}", vm.fold(&atoms));
    let _ = writeln!(out);

    let _ = writeln!(out, "2. Loading into Logic4 registers ({} sphere):", BankId::Logic4.sphere());
    let values: Vec<Value> = (1..=4).map(Value::Int).collect();
    vm.load(BankId::Logic4, &values);
    let _ = writeln!(
        out,
        "   Logic4: {}",
        render_list(vm.bank(BankId::Logic4).cells())
    );
    let _ = writeln!(out);

    let _ = writeln!(out, "3. Setting leaf values:");
    vm.set(LEFT, Value::text("CID:bafy..."))?;
    vm.set(RIGHT, Value::text("SIG:0xabc..."))?;
    let _ = writeln!(out, "   {} = {}", LEFT, vm.get(LEFT)?);
    let _ = writeln!(out, "   {} = {}", RIGHT, vm.get(RIGHT)?);
    let _ = writeln!(out);

    let _ = writeln!(out, "4. Stack operations (non-squarable dimensions):");
    vm.push(Value::text("Relation1"));
    vm.push(Value::text("Relation2"));
    let _ = writeln!(out, "   Created pair: {}", vm.pair_from_stack());
    let _ = writeln!(out);

    let _ = writeln!(out, "5. Current VM state:");
    out.push_str(&render_dump(&vm.snapshot(), config));
    Ok(out)
}
