//! Build-time code generation for the byte-to-decimal lookup table. Used during compilation to
//! generate the `numberlut.h` header (and its Rust counterpart) that hosts bake in so they can
//! print bytes as decimal text without doing any number formatting at runtime.

use std::fmt::{self, Write};
use std::ops::Index;
use std::str::FromStr;

/// Number of entries in the table; one per possible byte value.
pub const TABLE_LEN: usize = 256;

/// How many entries are emitted on a single line of generated code.
const ENTRIES_PER_LINE: usize = 16;

/// The decimal representation of a single byte value.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ByteEntry {
   /// Number of characters in `text`.
   pub len: usize,
   /// Canonical base-10 representation (no sign, no leading zeros).
   pub text: String,
}

impl ByteEntry {
   pub fn new(value: u8) -> Self {
      let text = value.to_string();
      Self { len: text.len(), text }
   }
}

/// All 256 byte entries, indexed by byte value.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ByteTable {
   entries: [ByteEntry; TABLE_LEN],
}

impl ByteTable {
   pub fn new() -> Self {
      Self {
         entries: std::array::from_fn(|i| ByteEntry::new(i as u8)),
      }
   }

   pub fn len(&self) -> usize {
      self.entries.len()
   }

   pub fn is_empty(&self) -> bool {
      self.entries.is_empty()
   }

   /// Iterates over the entries in ascending byte order.
   pub fn iter(&self) -> std::slice::Iter<'_, ByteEntry> {
      self.entries.iter()
   }
}

impl Default for ByteTable {
   fn default() -> Self {
      Self::new()
   }
}

impl Index<u8> for ByteTable {
   type Output = ByteEntry;

   fn index(&self, value: u8) -> &ByteEntry {
      &self.entries[value as usize]
   }
}

impl<'a> IntoIterator for &'a ByteTable {
   type Item = &'a ByteEntry;
   type IntoIter = std::slice::Iter<'a, ByteEntry>;

   fn into_iter(self) -> Self::IntoIter {
      self.iter()
   }
}

/// The language the table is emitted in.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Language {
   C,
   Rust,
}

impl Language {
   /// The file name a host expects the table under.
   pub fn default_file_name(self) -> &'static str {
      match self {
         Language::C => "numberlut.h",
         Language::Rust => "numberlut.rs",
      }
   }
}

impl fmt::Display for Language {
   fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
      match self {
         Language::C => write!(f, "C"),
         Language::Rust => write!(f, "Rust"),
      }
   }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnknownLanguage(pub String);

impl fmt::Display for UnknownLanguage {
   fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
      write!(f, "unknown language `{}` (expected `c` or `rust`)", self.0)
   }
}

impl std::error::Error for UnknownLanguage {}

impl FromStr for Language {
   type Err = UnknownLanguage;

   fn from_str(s: &str) -> Result<Self, Self::Err> {
      match s.to_ascii_lowercase().as_str() {
         "c" => Ok(Language::C),
         "rust" | "rs" => Ok(Language::Rust),
         _ => Err(UnknownLanguage(s.to_owned())),
      }
   }
}

/// Generates the lookup table source for the given language.
pub fn generate(language: Language) -> String {
   match language {
      Language::C => generate_numberlut(),
      Language::Rust => generate_numberlut_rust(),
   }
}

/// Generates the `numberlut.h` file.
pub fn generate_numberlut() -> String {
   let mut buffer = String::from(
      r#"/* Generated by numberlut. Do not edit. */

#ifndef NUMBERLUT_H
#define NUMBERLUT_H

#include <stddef.h>

static const struct {
   size_t len;
   const char *str;
} byte_to_decimal[256] = {
"#,
   );

   write_entries(&mut buffer, |buffer, entry| {
      let _ = write!(buffer, r#"{{{}, "{}"}},"#, entry.len, entry.text);
   });

   buffer.push_str("};\n\n#endif\n");
   buffer
}

/// Generates the `numberlut.rs` file, meant to be pulled in with `include!`.
pub fn generate_numberlut_rust() -> String {
   let mut buffer = String::from(
      r#"// Generated by numberlut. Do not edit.

#[rustfmt::skip]
pub static BYTE_TO_DECIMAL: [(usize, &str); 256] = [
"#,
   );

   write_entries(&mut buffer, |buffer, entry| {
      let _ = write!(buffer, r#"({}, "{}"),"#, entry.len, entry.text);
   });

   buffer.push_str("];\n");
   buffer
}

fn write_entries(buffer: &mut String, mut write_entry: impl FnMut(&mut String, &ByteEntry)) {
   let table = ByteTable::new();
   for row in table.entries.chunks(ENTRIES_PER_LINE) {
      buffer.push_str("   ");
      for (i, entry) in row.iter().enumerate() {
         if i > 0 {
            buffer.push(' ');
         }
         write_entry(buffer, entry);
      }
      buffer.push('\n');
   }
}
