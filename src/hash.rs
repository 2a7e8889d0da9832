//! Content addressing for leaf stores.
//!
//! The digest covers every stored entry in enumeration order: the
//! canonical path, the value's type tag and its printed form. Two stores
//! with the same entries hash the same regardless of write order. An
//! explicit `Ø` entry and an absent leaf hash differently, since the leaf
//! count is part of what a dump reports.

use crate::store::LeafStore;

// Version byte for hash stability
const HASH_VERSION: u8 = 2;

/// A 256-bit BLAKE3 digest of a leaf store.
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub struct StateHash(pub [u8; 32]);

impl StateHash {
    /// Display as full hex.
    pub fn to_hex(&self) -> String {
        self.0.iter().map(|b| format!("{:02x}", b)).collect()
    }

    /// Display as short base-32 (8 characters, 40 bits).
    pub fn to_short(&self) -> String {
        const ALPHABET: &[u8] = b"0123456789abcdefghjkmnpqrstuvwxyz";
        let val = u64::from_be_bytes([
            0, 0, 0, self.0[0], self.0[1], self.0[2], self.0[3], self.0[4],
        ]);
        let mut result = String::with_capacity(8);
        for i in (0..8).rev() {
            let idx = ((val >> (i * 5)) & 0x1F) as usize;
            result.push(ALPHABET[idx] as char);
        }
        result
    }
}

impl std::fmt::Debug for StateHash {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "#{}", self.to_short())
    }
}

impl std::fmt::Display for StateHash {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "#{}", self.to_short())
    }
}

/// Hash every entry of `store`.
pub fn hash_store(store: &LeafStore) -> StateHash {
    let mut hasher = blake3::Hasher::new();
    hasher.update(&[HASH_VERSION]);
    hasher.update(&(store.len() as u64).to_le_bytes());
    for (path, value) in store.iter() {
        hasher.update(&(path.ordinal() as u16).to_le_bytes());
        hasher.update(value.kind().as_bytes());
        hasher.update(&[0]);
        let text = value.to_string();
        hasher.update(&(text.len() as u64).to_le_bytes());
        hasher.update(text.as_bytes());
    }
    StateHash(*hasher.finalize().as_bytes())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::path::CanonicalPath;
    use crate::value::Value;

    const LEFT: &str = "State.FrameA.Local.Block1.Record1.Closure1.Logic1.Relation1.L";
    const RIGHT: &str = "State.FrameA.Local.Block1.Record1.Closure1.Logic1.Relation1.R";

    #[test]
    fn test_hash_independent_of_write_order() {
        let mut a = LeafStore::new();
        a.set(LEFT, Value::Int(1)).unwrap();
        a.set(RIGHT, Value::Int(2)).unwrap();
        let mut b = LeafStore::new();
        b.set(RIGHT, Value::Int(2)).unwrap();
        b.set(LEFT, Value::Int(1)).unwrap();
        assert_eq!(hash_store(&a), hash_store(&b));
    }

    #[test]
    fn test_hash_sees_value_type() {
        let mut a = LeafStore::new();
        a.set(LEFT, Value::Int(1)).unwrap();
        let mut b = LeafStore::new();
        b.set(LEFT, Value::text("1")).unwrap();
        assert_ne!(hash_store(&a), hash_store(&b));
    }

    #[test]
    fn test_hash_tells_frames_apart() {
        let all = CanonicalPath::all();
        let mut a = LeafStore::new();
        a.set_path(all[0], Value::text("x"));
        let mut b = LeafStore::new();
        b.set_path(all[256], Value::text("x"));
        assert_ne!(hash_store(&a), hash_store(&b));
    }

    #[test]
    fn test_hash_sees_explicit_empty() {
        let empty = LeafStore::new();
        let mut zeroed = LeafStore::new();
        zeroed.initialize_zero();
        assert_ne!(hash_store(&empty), hash_store(&zeroed));
    }

    #[test]
    fn test_hash_formats() {
        let h = hash_store(&LeafStore::new());
        assert_eq!(h.to_hex().len(), 64);
        assert_eq!(h.to_short().len(), 8);
        assert_eq!(format!("{}", h), format!("#{}", h.to_short()));
    }
}
