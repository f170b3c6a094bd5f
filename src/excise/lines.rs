use std::ops::Range;

/// The lines of a text file, each keeping its own terminator.
///
/// Concatenating every line gives back the original text byte-for-byte, so
/// CRLF endings and a missing final newline survive an edit untouched.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct LineSequence {
    lines: Vec<String>,
}

impl LineSequence {
    /// Split on `\n` only. A lone `\r` is not a line end and stays inside
    /// its line, unlike universal-newline readers; `\r\n` stays attached to
    /// the line it ends.
    pub fn parse(contents: &str) -> Self {
        Self {
            lines: contents.split_inclusive('\n').map(str::to_string).collect(),
        }
    }

    pub fn len(&self) -> usize {
        self.lines.len()
    }

    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.lines.iter().map(String::as_str)
    }

    /// Remove a half-open range of lines and return them in order
    pub fn remove_range(&mut self, range: Range<usize>) -> Vec<String> {
        self.lines.drain(range).collect()
    }

    /// Join the lines back into file contents
    pub fn to_contents(&self) -> String {
        self.lines.concat()
    }
}

impl From<Vec<String>> for LineSequence {
    fn from(lines: Vec<String>) -> Self {
        Self { lines }
    }
}
