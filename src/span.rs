/// A byte offset range into a path string.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Span {
    pub start: u32,
    pub end: u32,
}

impl Span {
    pub fn new(start: u32, end: u32) -> Self {
        Self { start, end }
    }

    pub fn dummy() -> Self {
        Self { start: 0, end: 0 }
    }

    /// Span covering the whole of `text`.
    pub fn whole(text: &str) -> Self {
        Self {
            start: 0,
            end: text.len() as u32,
        }
    }

    pub fn range(&self) -> std::ops::Range<usize> {
        self.start as usize..self.end as usize
    }
}

/// Spans of each `.`-separated token in `text`, in order.
pub fn token_spans(text: &str) -> Vec<Span> {
    let mut spans = Vec::new();
    let mut start = 0usize;
    for (i, c) in text.char_indices() {
        if c == '.' {
            spans.push(Span::new(start as u32, i as u32));
            start = i + 1;
        }
    }
    spans.push(Span::new(start as u32, text.len() as u32));
    spans
}
