//! The State256 virtual machine.
//!
//! `AtomVm` owns every piece of state (four register banks, the value
//! stack, the leaf store and a reserved program counter) and exposes the
//! command API the shell drives. Nothing here blocks or shares state; a
//! caller that wants concurrency wraps the whole VM behind one lock.

use crate::hash::{hash_store, StateHash};
use crate::path::{CanonicalPath, PathError};
use crate::register::{BankId, RegisterBank};
use crate::stack::ValueStack;
use crate::store::LeafStore;
use crate::tree;
use crate::value::Value;

/// Everything a VM instance owns.
#[derive(Clone, Debug)]
pub struct VmState {
    pub logic4: RegisterBank,
    pub record16: RegisterBank,
    pub context64: RegisterBank,
    pub state256: RegisterBank,
    pub stack: ValueStack,
    pub leaves: LeafStore,
    /// Reserved; no operation reads or advances it.
    pub pc: usize,
}

impl Default for VmState {
    fn default() -> Self {
        Self {
            logic4: RegisterBank::new(BankId::Logic4),
            record16: RegisterBank::new(BankId::Record16),
            context64: RegisterBank::new(BankId::Context64),
            state256: RegisterBank::new(BankId::State256),
            stack: ValueStack::new(),
            leaves: LeafStore::new(),
            pc: 0,
        }
    }
}

impl VmState {
    pub fn bank(&self, id: BankId) -> &RegisterBank {
        match id {
            BankId::Logic4 => &self.logic4,
            BankId::Record16 => &self.record16,
            BankId::Context64 => &self.context64,
            BankId::State256 => &self.state256,
        }
    }

    fn bank_mut(&mut self, id: BankId) -> &mut RegisterBank {
        match id {
            BankId::Logic4 => &mut self.logic4,
            BankId::Record16 => &mut self.record16,
            BankId::Context64 => &mut self.context64,
            BankId::State256 => &mut self.state256,
        }
    }
}

/// Owned copy of the VM state for dumps and introspection.
#[derive(Clone, Debug, PartialEq)]
pub struct Snapshot {
    pub logic4: Vec<Value>,
    pub record16: Vec<Value>,
    pub context64: Vec<Value>,
    pub state256: Vec<Value>,
    /// Bottom-to-top.
    pub stack: Vec<Value>,
    pub leaf_count: usize,
    pub pc: usize,
    pub digest: StateHash,
}

impl Snapshot {
    pub fn bank(&self, id: BankId) -> &[Value] {
        match id {
            BankId::Logic4 => &self.logic4,
            BankId::Record16 => &self.record16,
            BankId::Context64 => &self.context64,
            BankId::State256 => &self.state256,
        }
    }
}

/// A single VM instance.
#[derive(Clone, Debug, Default)]
pub struct AtomVm {
    state: VmState,
}

impl AtomVm {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn state(&self) -> &VmState {
        &self.state
    }

    // ── Leaves ──

    /// Reset all 512 leaves to `Ø`; returns the paths in enumeration order.
    pub fn initialize_zero(&mut self) -> Vec<CanonicalPath> {
        self.state.leaves.initialize_zero()
    }

    pub fn set(&mut self, path_text: &str, value: Value) -> Result<CanonicalPath, PathError> {
        self.state.leaves.set(path_text, value).inspect_err(|e| {
            tracing::debug!(error = %e, "leaf set rejected");
        })
    }

    pub fn get(&self, path_text: &str) -> Result<Value, PathError> {
        self.state.leaves.get(path_text)
    }

    // ── Registers ──

    pub fn bank(&self, id: BankId) -> &RegisterBank {
        self.state.bank(id)
    }

    /// Direct load into cells `0..`; see [`RegisterBank::load`].
    pub fn load(&mut self, id: BankId, values: &[Value]) -> usize {
        self.state.bank_mut(id).load(values)
    }

    /// Batched load; `None` when `batch` is outside the bank.
    pub fn load_batch(&mut self, id: BankId, batch: usize, values: &[Value]) -> Option<usize> {
        self.state.bank_mut(id).load_batch(batch, values)
    }

    // ── Stack ──

    pub fn push(&mut self, value: Value) {
        self.state.stack.push(value);
    }

    pub fn pop(&mut self) -> Option<Value> {
        self.state.stack.pop()
    }

    // ── Trees ──

    pub fn pair(&self, a: &Value, b: &Value) -> String {
        tree::pair(a, b)
    }

    pub fn fold(&self, values: &[Value]) -> String {
        tree::fold(values)
    }

    /// Pop two values and pair them top-first; an empty stack yields `Ø`.
    pub fn pair_from_stack(&mut self) -> String {
        let a = self.pop().unwrap_or_default();
        let b = self.pop().unwrap_or_default();
        tree::pair(&a, &b)
    }

    // ── Introspection ──

    pub fn snapshot(&self) -> Snapshot {
        let s = &self.state;
        Snapshot {
            logic4: s.logic4.cells().to_vec(),
            record16: s.record16.cells().to_vec(),
            context64: s.context64.cells().to_vec(),
            state256: s.state256.cells().to_vec(),
            stack: s.stack.as_slice().to_vec(),
            leaf_count: s.leaves.len(),
            pc: s.pc,
            digest: hash_store(&s.leaves),
        }
    }
}
