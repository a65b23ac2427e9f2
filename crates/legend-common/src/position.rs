//! Position and location utilities.
//!
//! Editors speak in zero-based line/character positions, while the syntax
//! tree stores byte offsets. `LineMap` converts between the two.

use serde::{Deserialize, Serialize};

/// A position in a source file (0-indexed line and column).
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct Position {
    /// 0-indexed line number
    pub line: u32,
    /// 0-indexed column (UTF-16 code units for LSP compatibility)
    pub character: u32,
}

impl Position {
    pub fn new(line: u32, character: u32) -> Self {
        Position { line, character }
    }
}

/// A range in a source file.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Range {
    pub start: Position,
    pub end: Position,
}

impl Range {
    pub fn new(start: Position, end: Position) -> Self {
        Range { start, end }
    }

    /// Whether `position` falls inside this range (end exclusive).
    pub fn contains(&self, position: Position) -> bool {
        self.start <= position && position < self.end
    }
}

/// A location in a source file (file path + range).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Location {
    #[serde(rename = "uri")]
    pub file_path: String,
    pub range: Range,
}

impl Location {
    pub fn new(file_path: String, range: Range) -> Self {
        Location { file_path, range }
    }
}

/// Source location with both offset and line/column info.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SourceLocation {
    /// Byte offset from start of file
    pub offset: u32,
    /// 0-indexed line number
    pub line: u32,
    /// 0-indexed column
    pub character: u32,
}

impl SourceLocation {
    pub fn new(offset: u32, line: u32, character: u32) -> Self {
        SourceLocation {
            offset,
            line,
            character,
        }
    }
}

/// Line map for efficient offset <-> position conversion.
/// Stores the starting offset of each line.
#[derive(Debug, Clone)]
pub struct LineMap {
    /// Starting offset of each line (line_starts[0] is always 0)
    line_starts: Vec<u32>,
}

impl LineMap {
    /// Build a line map from source text.
    pub fn build(source: &str) -> Self {
        let bytes = source.as_bytes();
        let mut line_starts = vec![0u32];

        for i in memchr::memchr2_iter(b'\n', b'\r', bytes) {
            if bytes[i] == b'\n' {
                line_starts.push((i + 1) as u32);
            } else if bytes.get(i + 1) != Some(&b'\n') {
                // Lone \r (old Mac); \r\n is handled by the \n
                line_starts.push((i + 1) as u32);
            }
        }

        LineMap { line_starts }
    }

    /// Convert a byte offset to a Position (line, character).
    /// Character is counted in UTF-16 code units. Offsets past the end of the
    /// source clamp to the end.
    pub fn offset_to_position(&self, offset: u32, source: &str) -> Position {
        let line = match self.line_starts.binary_search(&offset) {
            Ok(exact) => exact,
            Err(insert_point) => insert_point.saturating_sub(1),
        };

        let line_start = self.line_starts.get(line).copied().unwrap_or(0);
        let clamped_end = (offset as usize).min(source.len());
        let start = (line_start as usize).min(clamped_end);
        let slice = source.get(start..clamped_end).unwrap_or("");
        let character = slice.chars().map(|ch| ch.len_utf16() as u32).sum();

        Position {
            line: line as u32,
            character,
        }
    }

    /// Convert a byte span to a Range.
    pub fn range(&self, start: u32, end: u32, source: &str) -> Range {
        Range::new(
            self.offset_to_position(start, source),
            self.offset_to_position(end.max(start), source),
        )
    }

    /// Convert a Position (line, character) to a byte offset.
    pub fn position_to_offset(&self, position: Position, source: &str) -> Option<u32> {
        let line_idx = position.line as usize;
        let line_start = *self.line_starts.get(line_idx)?;
        let line_limit = self
            .line_starts
            .get(line_idx + 1)
            .copied()
            .unwrap_or(source.len() as u32);
        let slice = source
            .get(line_start as usize..line_limit as usize)
            .unwrap_or("");
        let mut utf16_count = 0u32;
        let mut byte_count = 0u32;

        for ch in slice.chars() {
            if ch == '\n' || ch == '\r' {
                break;
            }
            let ch_utf16 = ch.len_utf16() as u32;
            if utf16_count + ch_utf16 > position.character {
                break;
            }
            utf16_count += ch_utf16;
            byte_count += ch.len_utf8() as u32;
            if utf16_count == position.character {
                break;
            }
        }

        Some(line_start + byte_count)
    }

    /// Get the number of lines.
    pub fn line_count(&self) -> usize {
        self.line_starts.len()
    }

    /// Get the starting offset of a line.
    pub fn line_start(&self, line: usize) -> Option<u32> {
        self.line_starts.get(line).copied()
    }

    /// Text of a line without its terminator.
    pub fn line_text<'a>(&self, line: usize, source: &'a str) -> Option<&'a str> {
        let start = *self.line_starts.get(line)? as usize;
        let end = self
            .line_starts
            .get(line + 1)
            .map_or(source.len(), |&next| next as usize);
        source
            .get(start..end)
            .map(|text| text.trim_end_matches(['\n', '\r']))
    }
}

#[cfg(test)]
mod position_tests {
    use super::*;

    #[test]
    fn test_line_map_simple() {
        let source = "line1\nline2\nline3";
        let map = LineMap::build(source);

        assert_eq!(map.line_count(), 3);
        assert_eq!(map.offset_to_position(0, source), Position::new(0, 0));
        assert_eq!(map.offset_to_position(4, source), Position::new(0, 4));
        assert_eq!(map.offset_to_position(6, source), Position::new(1, 0));
        assert_eq!(map.offset_to_position(12, source), Position::new(2, 0));
    }

    #[test]
    fn test_line_map_windows_and_mac_line_endings() {
        let source = "line1\r\nline2\rline3";
        let map = LineMap::build(source);

        assert_eq!(map.line_count(), 3);
        assert_eq!(map.offset_to_position(7, source), Position::new(1, 0));
        assert_eq!(map.offset_to_position(13, source), Position::new(2, 0));
        assert_eq!(map.line_text(0, source), Some("line1"));
        assert_eq!(map.line_text(1, source), Some("line2"));
    }

    #[test]
    fn test_position_to_offset_roundtrip() {
        let source = "const x = 1;\nlet y = 2;\nvar z = 3;";
        let map = LineMap::build(source);

        for offset in 0..source.len() as u32 {
            let pos = map.offset_to_position(offset, source);
            let back = map.position_to_offset(pos, source).unwrap();
            assert_eq!(offset, back, "roundtrip failed for offset {offset}");
        }
    }

    #[test]
    fn test_utf16_columns() {
        let source = "A \u{1F680} B";
        let map = LineMap::build(source);

        assert_eq!(map.offset_to_position(2, source).character, 2);
        assert_eq!(map.offset_to_position(7, source).character, 5);
        assert_eq!(
            map.position_to_offset(Position::new(0, 5), source),
            Some(7)
        );
    }

    #[test]
    fn test_offsets_past_end_clamp_to_last_position() {
        let source = "ab\ncd";
        let map = LineMap::build(source);
        let range = map.range(3, 99, source);

        assert_eq!(range.start, Position::new(1, 0));
        assert_eq!(range.end, Position::new(1, 2));
    }
}
