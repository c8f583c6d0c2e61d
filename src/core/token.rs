// src/core/token.rs
//! Grammar of asset identifier tokens.
//!
//! ```text
//! token    := prefix ( '_' segment )*  |  segment
//! prefix   := label ( '_' qualifier )*
//! segment  := part ( '-' part )*
//! part     := hex digits naming one scalar value
//! ```
//!
//! The first `_`-segment is the platform/name label and is thrown away. Real
//! asset names sometimes carry descriptive qualifiers after it
//! (`medium-light-skin-tone`, `type-1-2`); a segment whose leading part is not
//! hex is folded into the prefix as long as it is not the last segment.
//!
//! Qualifiers are recognised by shape only: one whose first word is itself
//! valid hex (`bed-…`, `cafe-…`) stays in the body. That is harmless when it
//! precedes a trailing segment that wins the tie-break anyway.

/// One `_`-delimited chunk and its `-`-delimited parts.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Segment<'a> {
    pub text: &'a str,
    pub parts: Vec<&'a str>,
    /// Byte offset of `text` in the token.
    pub offset: usize,
}

impl<'a> Segment<'a> {
    fn new(text: &'a str, offset: usize) -> Self {
        Self { text, parts: text.split('-').collect(), offset }
    }

    /// Byte offset in the token of the first part equal to `part`.
    pub fn part_offset(&self, part: &str) -> Option<usize> {
        let mut at = self.offset;
        for p in &self.parts {
            if *p == part {
                return Some(at);
            }
            at += p.len() + 1;
        }
        None
    }
}

/// How the authoritative segment was chosen.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Resolution {
    /// Only one body segment.
    Single,
    /// The trailing segment repeated the tail of the one before it and was dropped.
    RedundantSuffixDropped,
    /// The trailing segment carries new information and wins.
    TrailingSegmentKept,
}

impl Resolution {
    pub fn as_str(self) -> &'static str {
        match self {
            Resolution::Single => "single",
            Resolution::RedundantSuffixDropped => "redundant-suffix-dropped",
            Resolution::TrailingSegmentKept => "trailing-segment-kept",
        }
    }
}

/// A tokenized identifier: prefix labels plus the hex-bearing body.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RawToken<'a> {
    prefix: Vec<&'a str>,
    head: Segment<'a>,
    rest: Vec<Segment<'a>>,
}

impl<'a> RawToken<'a> {
    pub fn parse(source: &'a str) -> Self {
        let mut offset = 0;
        let segments: Vec<Segment<'a>> = source
            .split('_')
            .map(|s| {
                let seg = Segment::new(s, offset);
                offset += s.len() + 1;
                seg
            })
            .collect();

        let mut start = usize::from(segments.len() > 1);
        while start + 1 < segments.len() && is_qualifier(segments[start].text) {
            start += 1;
        }

        let (prefix, body) = segments.split_at(start);
        let mut body = body.iter().cloned();
        // split() always yields at least one item and start < len
        let head = body.next().unwrap_or_else(|| Segment::new("", source.len()));
        Self {
            prefix: prefix.iter().map(|s| s.text).collect(),
            head,
            rest: body.collect(),
        }
    }

    pub fn prefix(&self) -> &[&'a str] {
        &self.prefix
    }

    /// Body segments in encounter order.
    pub fn segments(&self) -> impl Iterator<Item = &Segment<'a>> {
        std::iter::once(&self.head).chain(self.rest.iter())
    }

    /// Pick the one segment to decode.
    ///
    /// A trailing segment that is a byte-for-byte suffix of the segment
    /// right before it restates a modifier already present there and is
    /// dropped; any other trailing segment wins. Earlier segments never win.
    pub fn authoritative(&self) -> (&Segment<'a>, Resolution) {
        let Some((last, before)) = self.rest.split_last() else {
            return (&self.head, Resolution::Single);
        };
        let preceding = before.last().unwrap_or(&self.head);
        if preceding.text.ends_with(last.text) {
            (preceding, Resolution::RedundantSuffixDropped)
        } else {
            (last, Resolution::TrailingSegmentKept)
        }
    }
}

pub(crate) fn is_hex_digits(s: &str) -> bool {
    !s.is_empty() && s.bytes().all(|b| b.is_ascii_hexdigit())
}

fn is_qualifier(segment: &str) -> bool {
    !is_hex_digits(segment.split('-').next().unwrap_or(""))
}
