//! Concatenated name strings with an offset index.
//!
//! Names are stored back to back in one string. The index holds one offset per
//! name plus a final sentinel equal to the blob length, so name `i` is
//! `text[index[i]..index[i + 1]]`.

use serde::Serialize;

/// Narrowest unsigned integer able to hold every offset of a blob.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum IndexWidth {
    U8,
    U16,
    U32,
}

impl IndexWidth {
    pub fn for_max_offset(max: usize) -> Self {
        if max <= u8::MAX as usize {
            IndexWidth::U8
        } else if max <= u16::MAX as usize {
            IndexWidth::U16
        } else {
            IndexWidth::U32
        }
    }

    pub fn bytes(self) -> usize {
        match self {
            IndexWidth::U8 => 1,
            IndexWidth::U16 => 2,
            IndexWidth::U32 => 4,
        }
    }

    pub fn rust_name(self) -> &'static str {
        match self {
            IndexWidth::U8 => "u8",
            IndexWidth::U16 => "u16",
            IndexWidth::U32 => "u32",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct NameBlob {
    pub text: String,
    pub index: Vec<u32>,
    pub width: IndexWidth,
}

impl NameBlob {
    pub fn from_names<'a>(names: impl IntoIterator<Item = &'a str>) -> Self {
        let mut text = String::new();
        let mut index = vec![0u32];
        for name in names {
            text.push_str(name);
            index.push(text.len() as u32);
        }
        let width = IndexWidth::for_max_offset(text.len());
        NameBlob { text, index, width }
    }

    /// Number of names in the blob.
    pub fn len(&self) -> usize {
        self.index.len() - 1
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Byte range of name `i`.
    pub fn span(&self, i: usize) -> (u32, u32) {
        (self.index[i], self.index[i + 1])
    }

    pub fn name(&self, i: usize) -> &str {
        let (start, end) = self.span(i);
        &self.text[start as usize..end as usize]
    }

    pub fn names(&self) -> impl Iterator<Item = &str> + '_ {
        (0..self.len()).map(move |i| self.name(i))
    }
}

#[cfg(test)]
#[path = "../tests/name_blob_tests.rs"]
mod tests;
