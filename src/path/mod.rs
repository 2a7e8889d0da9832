//! Path codec: the canonical `State.<frame>...<atom>` address of a leaf.
//!
//! Parsing and validation are separate steps. `parse` only checks the
//! shape of the string (nine `.`-separated tokens, the first one `State`)
//! and yields a [`RawPath`] holding the eight segments as text. `validate`
//! / [`RawPath::resolve`] then check every segment against its closed
//! vocabulary and produce a typed [`CanonicalPath`]. A well-formed path
//! can still be invalid, and a `RawPath` serializes back to exactly the
//! text it was parsed from whether or not it is valid.
//!
//! Key space: 2 frames x 4 contexts x 2^6 = 512 leaves, enumerated with
//! `frame` outermost and `atom` innermost.

use std::fmt;

use thiserror::Error;

use crate::diagnostic::Diagnostic;
use crate::span::{token_spans, Span};

/// Literal first token of every canonical path.
pub const ROOT: &str = "State";

/// Number of `.`-separated tokens in a canonical path (root + 8 segments).
pub const TOKEN_COUNT: usize = 9;

/// Number of addressable leaves: the product of the segment domain sizes.
pub const LEAF_COUNT: usize = Frame::ALL.len()
    * Context::ALL.len()
    * Block::ALL.len()
    * Record::ALL.len()
    * Closure::ALL.len()
    * Logic::ALL.len()
    * Relation::ALL.len()
    * Atom::ALL.len();

// ─── Segment Domains ───────────────────────────────────────────────

macro_rules! segment_domain {
    ($(#[$meta:meta])* $name:ident { $($variant:ident => $text:literal),+ $(,)? }) => {
        $(#[$meta])*
        #[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
        pub enum $name {
            $($variant),+
        }

        impl $name {
            /// Every member of the domain, in enumeration order.
            pub const ALL: &'static [$name] = &[$($name::$variant),+];

            pub fn as_str(self) -> &'static str {
                match self {
                    $($name::$variant => $text),+
                }
            }

            pub fn from_token(token: &str) -> Option<Self> {
                match token {
                    $($text => Some($name::$variant),)+
                    _ => None,
                }
            }

            /// Position within `ALL`.
            pub fn index(self) -> usize {
                self as usize
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(self.as_str())
            }
        }
    };
}

segment_domain!(Frame { FrameA => "FrameA", FrameB => "FrameB" });

segment_domain!(Context {
    Local => "Local",
    Remote => "Remote",
    Proposed => "Proposed",
    Canonical => "Canonical",
});

segment_domain!(Block { Block1 => "Block1", Block2 => "Block2" });
segment_domain!(Record { Record1 => "Record1", Record2 => "Record2" });
segment_domain!(Closure { Closure1 => "Closure1", Closure2 => "Closure2" });
segment_domain!(Logic { Logic1 => "Logic1", Logic2 => "Logic2" });
segment_domain!(Relation { Relation1 => "Relation1", Relation2 => "Relation2" });

segment_domain!(
    /// Left or right side of a relation pair.
    Atom { L => "L", R => "R" }
);

/// Names the eight segments of a path, outermost first.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum SegmentKind {
    Frame,
    Context,
    Block,
    Record,
    Closure,
    Logic,
    Relation,
    Atom,
}

impl SegmentKind {
    pub const ALL: [SegmentKind; 8] = [
        SegmentKind::Frame,
        SegmentKind::Context,
        SegmentKind::Block,
        SegmentKind::Record,
        SegmentKind::Closure,
        SegmentKind::Logic,
        SegmentKind::Relation,
        SegmentKind::Atom,
    ];

    pub fn name(self) -> &'static str {
        match self {
            SegmentKind::Frame => "frame",
            SegmentKind::Context => "context",
            SegmentKind::Block => "block",
            SegmentKind::Record => "record",
            SegmentKind::Closure => "closure",
            SegmentKind::Logic => "logic",
            SegmentKind::Relation => "relation",
            SegmentKind::Atom => "atom",
        }
    }

    /// Token position in the path string (1..=8; token 0 is `State`).
    pub fn token_index(self) -> usize {
        self as usize + 1
    }

    /// The closed vocabulary for this segment.
    pub fn domain(self) -> Vec<&'static str> {
        fn names<T: Copy>(all: &[T], f: fn(T) -> &'static str) -> Vec<&'static str> {
            all.iter().map(|v| f(*v)).collect()
        }
        match self {
            SegmentKind::Frame => names(Frame::ALL, Frame::as_str),
            SegmentKind::Context => names(Context::ALL, Context::as_str),
            SegmentKind::Block => names(Block::ALL, Block::as_str),
            SegmentKind::Record => names(Record::ALL, Record::as_str),
            SegmentKind::Closure => names(Closure::ALL, Closure::as_str),
            SegmentKind::Logic => names(Logic::ALL, Logic::as_str),
            SegmentKind::Relation => names(Relation::ALL, Relation::as_str),
            SegmentKind::Atom => names(Atom::ALL, Atom::as_str),
        }
    }

    pub fn contains(self, token: &str) -> bool {
        match self {
            SegmentKind::Frame => Frame::from_token(token).is_some(),
            SegmentKind::Context => Context::from_token(token).is_some(),
            SegmentKind::Block => Block::from_token(token).is_some(),
            SegmentKind::Record => Record::from_token(token).is_some(),
            SegmentKind::Closure => Closure::from_token(token).is_some(),
            SegmentKind::Logic => Logic::from_token(token).is_some(),
            SegmentKind::Relation => Relation::from_token(token).is_some(),
            SegmentKind::Atom => Atom::from_token(token).is_some(),
        }
    }
}

impl fmt::Display for SegmentKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

// ─── Errors ────────────────────────────────────────────────────────

/// Why a path string was rejected.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum PathError {
    /// Not nine `.`-separated tokens with a leading `State`.
    #[error("malformed path '{path}': {detail}")]
    MalformedPath { path: String, detail: String },

    /// Well-formed, but a segment is outside its vocabulary.
    #[error("invalid path '{path}': {segment} '{value}' is not one of {}", .segment.domain().join(", "))]
    InvalidPath {
        path: String,
        segment: SegmentKind,
        value: String,
    },
}

impl PathError {
    /// The path text that was rejected.
    pub fn path(&self) -> &str {
        match self {
            PathError::MalformedPath { path, .. } | PathError::InvalidPath { path, .. } => path,
        }
    }

    /// Convert to a diagnostic whose span points into [`PathError::path`].
    pub fn to_diagnostic(&self) -> Diagnostic {
        match self {
            PathError::MalformedPath { path, detail } => {
                let spans = token_spans(path);
                let span = if spans.len() == TOKEN_COUNT && &path[spans[0].range()] != ROOT {
                    spans[0]
                } else {
                    Span::whole(path)
                };
                Diagnostic::error(format!("malformed path: {}", detail), span).with_help(format!(
                    "paths look like {}.<frame>.<context>.<block>.<record>.<closure>.<logic>.<relation>.<atom>",
                    ROOT
                ))
            }
            PathError::InvalidPath {
                path,
                segment,
                value,
            } => {
                let span = token_spans(path)
                    .get(segment.token_index())
                    .copied()
                    .unwrap_or_else(|| Span::whole(path));
                Diagnostic::error(format!("invalid {} '{}'", segment, value), span)
                    .with_help(format!("expected one of: {}", segment.domain().join(", ")))
            }
        }
    }
}

// ─── Raw Path ──────────────────────────────────────────────────────

/// A syntactically well-formed path whose segments have not been validated.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct RawPath {
    segments: [String; 8],
}

impl RawPath {
    /// Build from eight segment strings, outermost first.
    ///
    /// A segment containing `.` could not be parsed back from the
    /// serialized text, so it is rejected as `MalformedPath`.
    pub fn new(segments: [String; 8]) -> Result<Self, PathError> {
        if let Some(i) = segments.iter().position(|s| s.contains('.')) {
            let path = Self { segments };
            return Err(PathError::MalformedPath {
                detail: format!(
                    "{} segment '{}' contains '.'",
                    SegmentKind::ALL[i],
                    path.segments[i]
                ),
                path: path.to_string(),
            });
        }
        Ok(Self { segments })
    }

    pub fn segment(&self, kind: SegmentKind) -> &str {
        &self.segments[kind as usize]
    }

    pub fn segments(&self) -> &[String; 8] {
        &self.segments
    }

    /// True iff every segment is in its domain.
    pub fn is_valid(&self) -> bool {
        SegmentKind::ALL
            .iter()
            .all(|kind| kind.contains(self.segment(*kind)))
    }

    /// Validate every segment, producing the typed path.
    ///
    /// Reports the outermost offending segment.
    pub fn resolve(&self) -> Result<CanonicalPath, PathError> {
        let invalid = |kind: SegmentKind| PathError::InvalidPath {
            path: self.to_string(),
            segment: kind,
            value: self.segment(kind).to_string(),
        };
        Ok(CanonicalPath {
            frame: Frame::from_token(self.segment(SegmentKind::Frame))
                .ok_or_else(|| invalid(SegmentKind::Frame))?,
            context: Context::from_token(self.segment(SegmentKind::Context))
                .ok_or_else(|| invalid(SegmentKind::Context))?,
            block: Block::from_token(self.segment(SegmentKind::Block))
                .ok_or_else(|| invalid(SegmentKind::Block))?,
            record: Record::from_token(self.segment(SegmentKind::Record))
                .ok_or_else(|| invalid(SegmentKind::Record))?,
            closure: Closure::from_token(self.segment(SegmentKind::Closure))
                .ok_or_else(|| invalid(SegmentKind::Closure))?,
            logic: Logic::from_token(self.segment(SegmentKind::Logic))
                .ok_or_else(|| invalid(SegmentKind::Logic))?,
            relation: Relation::from_token(self.segment(SegmentKind::Relation))
                .ok_or_else(|| invalid(SegmentKind::Relation))?,
            atom: Atom::from_token(self.segment(SegmentKind::Atom))
                .ok_or_else(|| invalid(SegmentKind::Atom))?,
        })
    }
}

impl fmt::Display for RawPath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(ROOT)?;
        for segment in &self.segments {
            write!(f, ".{}", segment)?;
        }
        Ok(())
    }
}

// ─── Canonical Path ────────────────────────────────────────────────

/// A validated leaf address.
///
/// Field order and variant order follow the enumeration nesting, so the
/// derived `Ord` sorts paths in the same order [`CanonicalPath::all`]
/// yields them.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct CanonicalPath {
    pub frame: Frame,
    pub context: Context,
    pub block: Block,
    pub record: Record,
    pub closure: Closure,
    pub logic: Logic,
    pub relation: Relation,
    pub atom: Atom,
}

impl CanonicalPath {
    /// Parse and validate in one step.
    pub fn parse(text: &str) -> Result<Self, PathError> {
        parse(text)?.resolve()
    }

    /// All [`LEAF_COUNT`] paths, `frame` outermost and `atom` innermost.
    pub fn all() -> Vec<CanonicalPath> {
        let mut paths = Vec::with_capacity(LEAF_COUNT);
        for &frame in Frame::ALL {
            for &context in Context::ALL {
                for &block in Block::ALL {
                    for &record in Record::ALL {
                        for &closure in Closure::ALL {
                            for &logic in Logic::ALL {
                                for &relation in Relation::ALL {
                                    for &atom in Atom::ALL {
                                        paths.push(CanonicalPath {
                                            frame,
                                            context,
                                            block,
                                            record,
                                            closure,
                                            logic,
                                            relation,
                                            atom,
                                        });
                                    }
                                }
                            }
                        }
                    }
                }
            }
        }
        paths
    }

    /// Position of this path in [`CanonicalPath::all`] (`0..LEAF_COUNT`).
    pub fn ordinal(&self) -> usize {
        let digits = [
            (self.frame.index(), Frame::ALL.len()),
            (self.context.index(), Context::ALL.len()),
            (self.block.index(), Block::ALL.len()),
            (self.record.index(), Record::ALL.len()),
            (self.closure.index(), Closure::ALL.len()),
            (self.logic.index(), Logic::ALL.len()),
            (self.relation.index(), Relation::ALL.len()),
            (self.atom.index(), Atom::ALL.len()),
        ];
        digits
            .iter()
            .fold(0, |acc, (digit, radix)| acc * radix + digit)
    }

    pub fn to_raw(&self) -> RawPath {
        let segments = [
            self.frame.as_str(),
            self.context.as_str(),
            self.block.as_str(),
            self.record.as_str(),
            self.closure.as_str(),
            self.logic.as_str(),
            self.relation.as_str(),
            self.atom.as_str(),
        ];
        RawPath {
            segments: segments.map(str::to_string),
        }
    }
}

impl fmt::Display for CanonicalPath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}.{}.{}.{}.{}.{}.{}.{}.{}",
            ROOT,
            self.frame,
            self.context,
            self.block,
            self.record,
            self.closure,
            self.logic,
            self.relation,
            self.atom
        )
    }
}

// ─── Codec Operations ──────────────────────────────────────────────

/// Split `text` into a [`RawPath`]. No domain validation.
pub fn parse(text: &str) -> Result<RawPath, PathError> {
    let tokens: Vec<&str> = text.split('.').collect();
    if tokens.len() != TOKEN_COUNT {
        return Err(PathError::MalformedPath {
            path: text.to_string(),
            detail: format!(
                "expected {} dot-separated segments, found {}",
                TOKEN_COUNT,
                tokens.len()
            ),
        });
    }
    if tokens[0] != ROOT {
        return Err(PathError::MalformedPath {
            path: text.to_string(),
            detail: format!("first segment must be '{}', found '{}'", ROOT, tokens[0]),
        });
    }
    let segments: [String; 8] = std::array::from_fn(|i| tokens[i + 1].to_string());
    Ok(RawPath { segments })
}

/// True iff every segment of `path` belongs to its domain.
pub fn validate(path: &RawPath) -> bool {
    path.is_valid()
}

/// Inverse of [`parse`].
pub fn serialize(path: &RawPath) -> String {
    path.to_string()
}
