// src/core/codepoint.rs
//! Ordered scalar values making up one emoji glyph.

use std::fmt;

use serde::ser::{Serialize, SerializeStruct, Serializer};

/// Non-empty, ordered run of Unicode scalar values rendered as one glyph.
///
/// `char` already rules out surrogates and values past U+10FFFF, so the only
/// invariant kept here is non-emptiness.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct CodepointSequence {
    scalars: Vec<char>,
}

impl CodepointSequence {
    pub fn new(scalars: Vec<char>) -> Option<Self> {
        if scalars.is_empty() {
            None
        } else {
            Some(Self { scalars })
        }
    }

    /// Build from already-rendered text, one entry per scalar value.
    pub fn from_text(text: &str) -> Option<Self> {
        Self::new(text.chars().collect())
    }

    pub fn len(&self) -> usize {
        self.scalars.len()
    }

    /// Always false; kept for the usual `len`/`is_empty` pairing.
    pub fn is_empty(&self) -> bool {
        self.scalars.is_empty()
    }

    pub fn scalars(&self) -> impl Iterator<Item = u32> + '_ {
        self.scalars.iter().map(|&c| c as u32)
    }

    /// Inverse of the asset-name convention: lowercase hex joined by `-`.
    pub fn to_hex_identifier(&self) -> String {
        self.scalars()
            .map(|v| format!("{:x}", v))
            .collect::<Vec<_>>()
            .join("-")
    }

    /// `U+1F91A U+1F3FB`
    pub fn to_code_points(&self) -> String {
        self.scalars()
            .map(|v| format!("U+{:04X}", v))
            .collect::<Vec<_>>()
            .join(" ")
    }

    pub fn encode_utf16(&self) -> Vec<u16> {
        let mut buf = [0u16; 2];
        let mut out = Vec::with_capacity(self.scalars.len() * 2);
        for c in &self.scalars {
            out.extend_from_slice(c.encode_utf16(&mut buf));
        }
        out
    }
}

impl fmt::Display for CodepointSequence {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for c in &self.scalars {
            write!(f, "{}", c)?;
        }
        Ok(())
    }
}

impl Serialize for CodepointSequence {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let code_points: Vec<String> = self.scalars().map(|v| format!("U+{:04X}", v)).collect();
        let mut st = serializer.serialize_struct("CodepointSequence", 3)?;
        st.serialize_field("glyph", &self.to_string())?;
        st.serialize_field("hex", &self.to_hex_identifier())?;
        st.serialize_field("code_points", &code_points)?;
        st.end()
    }
}
