//! Register banks for the squarable dimensions (4, 16, 64, 256).
//!
//! Banks are fixed-length scratch arrays, independent of the leaf store
//! and of each other. Loads never fail: input past the end of the bank
//! (or past the end of a batch) is dropped, trailing cells keep their old
//! contents, and a batch index outside the bank is ignored.

use std::fmt;

use crate::value::Value;

/// Cells written by one batched load.
pub const BATCH_WIDTH: usize = 16;

/// Identifies one of the four banks.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum BankId {
    Logic4,
    Record16,
    Context64,
    State256,
}

impl BankId {
    pub const ALL: [BankId; 4] = [
        BankId::Logic4,
        BankId::Record16,
        BankId::Context64,
        BankId::State256,
    ];

    pub fn size(self) -> usize {
        match self {
            BankId::Logic4 => 4,
            BankId::Record16 => 16,
            BankId::Context64 => 64,
            BankId::State256 => 256,
        }
    }

    /// Number of valid batch indices (`size / 16`; zero for Logic4).
    pub fn batch_count(self) -> usize {
        self.size() / BATCH_WIDTH
    }

    pub fn name(self) -> &'static str {
        match self {
            BankId::Logic4 => "Logic4",
            BankId::Record16 => "Record16",
            BankId::Context64 => "Context64",
            BankId::State256 => "State256",
        }
    }

    /// Hypersphere label shown in dumps (S^(n-1) for a bank of size n).
    pub fn sphere(self) -> &'static str {
        match self {
            BankId::Logic4 => "S³",
            BankId::Record16 => "S¹⁵",
            BankId::Context64 => "S⁶³",
            BankId::State256 => "S²⁵⁵",
        }
    }

    /// Case-insensitive lookup by name (`logic4`, `State256`, ...).
    pub fn from_name(name: &str) -> Option<BankId> {
        BankId::ALL
            .into_iter()
            .find(|id| id.name().eq_ignore_ascii_case(name))
    }
}

impl fmt::Display for BankId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// A fixed-length array of values, initialized to `Ø`.
#[derive(Clone, Debug, PartialEq)]
pub struct RegisterBank {
    id: BankId,
    cells: Vec<Value>,
}

impl RegisterBank {
    pub fn new(id: BankId) -> Self {
        Self {
            id,
            cells: vec![Value::Empty; id.size()],
        }
    }

    pub fn id(&self) -> BankId {
        self.id
    }

    pub fn len(&self) -> usize {
        self.cells.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    pub fn get(&self, index: usize) -> Option<&Value> {
        self.cells.get(index)
    }

    pub fn cells(&self) -> &[Value] {
        &self.cells
    }

    /// Copy `values` into cells `0..`, returning how many were written.
    pub fn load(&mut self, values: &[Value]) -> usize {
        let written = self.copy_into(0, self.cells.len(), values);
        tracing::debug!(bank = %self.id, written, "bank loaded");
        written
    }

    /// Copy up to 16 `values` into batch `batch` (cells `batch*16..`).
    ///
    /// Returns `None` without touching the bank when `batch` is out of
    /// range, otherwise the number of cells written.
    pub fn load_batch(&mut self, batch: usize, values: &[Value]) -> Option<usize> {
        if batch >= self.id.batch_count() {
            tracing::warn!(
                bank = %self.id,
                batch,
                batches = self.id.batch_count(),
                "batch index out of range, load ignored"
            );
            return None;
        }
        let written = self.copy_into(batch * BATCH_WIDTH, BATCH_WIDTH, values);
        tracing::debug!(bank = %self.id, batch, written, "bank batch loaded");
        Some(written)
    }

    fn copy_into(&mut self, start: usize, width: usize, values: &[Value]) -> usize {
        let n = width.min(values.len());
        if values.len() > n {
            tracing::warn!(
                bank = %self.id,
                dropped = values.len() - n,
                "load input truncated"
            );
        }
        self.cells[start..start + n].clone_from_slice(&values[..n]);
        n
    }
}
