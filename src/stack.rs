//! Value stack for the non-squarable dimensions (2, 8, 32, 128).

use crate::value::Value;

/// Unbounded LIFO of values.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct ValueStack {
    items: Vec<Value>,
}

impl ValueStack {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, value: Value) {
        self.items.push(value);
        tracing::debug!(depth = self.items.len(), "stack push");
    }

    /// Remove the top value. `None` means the stack was empty, which is
    /// distinct from `Some(Value::Empty)`.
    pub fn pop(&mut self) -> Option<Value> {
        let value = self.items.pop();
        tracing::debug!(depth = self.items.len(), hit = value.is_some(), "stack pop");
        value
    }

    pub fn depth(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Bottom-to-top view.
    pub fn as_slice(&self) -> &[Value] {
        &self.items
    }
}
