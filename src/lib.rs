//! AtomVM: a State256 virtual machine.
//!
//! A path-addressed store of 512 leaves organized as an 8-level
//! hierarchy, four fixed-size register banks, a value stack, and a
//! pairwise tree folder, driven through a small command API.
//!
//! ```text
//! State.<frame>.<context>.<block>.<record>.<closure>.<logic>.<relation>.<atom>
//!        2       4         2       2        2         2       2          2
//! ```

pub mod config;
pub mod diagnostic;
pub mod format;
pub mod hash;
pub mod path;
pub mod register;
pub mod shell;
pub mod span;
pub mod stack;
pub mod store;
pub mod tree;
pub mod value;
pub mod vm;

pub use config::Config;
pub use path::{CanonicalPath, PathError, RawPath, SegmentKind};
pub use register::{BankId, RegisterBank};
pub use shell::Shell;
pub use store::LeafStore;
pub use tree::Noun;
pub use value::Value;
pub use vm::{AtomVm, Snapshot};
