use crate::source::{FsLoader, Source, SourceLoader};
use common_framework::{LexerError, Position};
use std::path::{Path, PathBuf};
use tracing::trace;

/// A bidirectional character cursor over an in-memory source text.
///
/// The cursor `offset` points at the next character to read and lives in
/// `[0, len]`. The reported [`position`](Self::position) describes the most
/// recently consumed character: before any read it is `(0, 1, 1)`, and a
/// consumed newline is reported at the head of the line it opens.
#[derive(Debug, Clone)]
pub struct Lexer {
    text: String,
    chars: Vec<char>,
    file: Option<PathBuf>,
    offset: usize,
    line: usize,
    line_start: usize,
    characters: String,
    /// Character range `characters` was taken from.
    moved: (usize, usize),
}

impl Lexer {
    /// Creates a lexer over the given text.
    pub fn new<S: Into<String>>(text: S) -> Self {
        let text = text.into();
        let chars = text.chars().collect();
        Self {
            text,
            chars,
            file: None,
            offset: 0,
            line: 1,
            line_start: 0,
            characters: String::new(),
            moved: (0, 0),
        }
    }

    /// Creates a lexer over the contents of a file on the local filesystem.
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self, LexerError> {
        Self::from_file_with(path, &FsLoader)
    }

    /// Creates a lexer over a file loaded through the given loader.
    pub fn from_file_with<P: AsRef<Path>>(
        path: P,
        loader: &dyn SourceLoader,
    ) -> Result<Self, LexerError> {
        let path = path.as_ref();
        let bytes = loader.load(path).map_err(|source| LexerError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let text = String::from_utf8(bytes).map_err(|source| LexerError::Decode {
            path: path.to_path_buf(),
            source,
        })?;

        trace!(target: "lexer_framework::lexer", path = %path.display(), "Loaded source file");

        let mut lexer = Self::new(text);
        lexer.file = Some(path.to_path_buf());
        Ok(lexer)
    }

    /// Creates a lexer from either kind of source.
    pub fn open(source: Source) -> Result<Self, LexerError> {
        match source {
            Source::Text(text) => Ok(Self::new(text)),
            Source::File(path) => Self::from_file(path),
        }
    }

    /// Returns the full source text.
    pub fn text(&self) -> &str {
        &self.text
    }

    /// Returns the path the text was loaded from, if any.
    pub fn file(&self) -> Option<&Path> {
        self.file.as_deref()
    }

    /// Returns the total number of characters in the text.
    pub fn len(&self) -> usize {
        self.chars.len()
    }

    /// Same as [`len`](Self::len).
    pub fn length(&self) -> usize {
        self.chars.len()
    }

    pub fn is_empty(&self) -> bool {
        self.chars.is_empty()
    }

    /// Returns the cursor offset, the index of the next character to read.
    pub fn offset(&self) -> usize {
        self.offset
    }

    /// Returns the number of characters left to read.
    pub fn remaining(&self) -> usize {
        self.chars.len() - self.offset
    }

    /// Returns true if every character has been read.
    pub fn is_eof(&self) -> bool {
        self.offset >= self.chars.len()
    }

    /// Index of the most recently consumed character (0-indexed).
    pub fn index(&self) -> usize {
        self.offset.saturating_sub(1)
    }

    /// Column of the most recently consumed character (1-indexed).
    pub fn column(&self) -> usize {
        (self.offset - self.line_start).max(1)
    }

    /// Line of the most recently consumed character (1-indexed).
    pub fn line(&self) -> usize {
        self.line
    }

    /// Returns a snapshot of the current position.
    pub fn position(&self) -> Position {
        Position::new(self.index(), self.column(), self.line())
    }

    /// Returns the position the cursor will report once the next character
    /// is consumed, or the current position at the end of the text.
    pub fn next_position(&self) -> Position {
        match self.chars.get(self.offset) {
            Some('\n') => Position::new(self.offset, 1, self.line + 1),
            Some(_) => Position::new(
                self.offset,
                (self.offset + 1 - self.line_start).max(1),
                self.line,
            ),
            None => self.position(),
        }
    }

    /// Returns the characters moved over by the latest read or push.
    pub fn characters(&self) -> &str {
        &self.characters
    }

    /// Reads `length` characters and advances the cursor past them.
    ///
    /// Reading past the end of the text is an error, not a short read.
    pub fn read(&mut self, length: usize) -> Result<String, LexerError> {
        if length < 1 {
            return Err(LexerError::InvalidLength { length });
        }
        let end = self.offset.saturating_add(length);
        if end > self.chars.len() {
            return Err(self.out_of_bounds(signed(end)));
        }

        let start = self.offset;
        while self.offset < end {
            self.step_forward();
        }
        self.set_moved(start, end);

        trace!(target: "lexer_framework::lexer", length, offset = self.offset, "read");
        Ok(self.characters.clone())
    }

    /// Reads the current character; equivalent to `read(1)`.
    pub fn consume(&mut self) -> Result<char, LexerError> {
        let ch = *self
            .chars
            .get(self.offset)
            .ok_or_else(|| self.out_of_bounds(signed(self.offset)))?;
        self.step_forward();
        self.characters.clear();
        self.characters.push(ch);
        self.moved = (self.offset - 1, self.offset);
        Ok(ch)
    }

    /// Returns the character at the cursor without moving it.
    pub fn peek(&self) -> Result<char, LexerError> {
        self.peek_at(0)
    }

    /// Returns the character at `offset` from the cursor without moving it.
    /// Negative offsets look backward.
    pub fn peek_at(&self, offset: isize) -> Result<char, LexerError> {
        let target = signed(self.offset).saturating_add(offset);
        usize::try_from(target)
            .ok()
            .and_then(|index| self.chars.get(index).copied())
            .ok_or_else(|| self.out_of_bounds(target))
    }

    /// Moves the cursor back by `length` characters and returns them.
    pub fn push(&mut self, length: usize) -> Result<String, LexerError> {
        if length < 1 {
            return Err(LexerError::InvalidLength { length });
        }
        if length > self.offset {
            return Err(self.out_of_bounds(signed(self.offset) - signed(length)));
        }

        let end = self.offset;
        let start = end - length;
        let newlines = self.chars[start..end].iter().filter(|ch| **ch == '\n').count();

        self.offset = start;
        self.line -= newlines;
        self.line_start = self.chars[..start]
            .iter()
            .rposition(|ch| *ch == '\n')
            .map_or(0, |index| index + 1);
        self.set_moved(start, end);

        trace!(target: "lexer_framework::lexer", length, offset = self.offset, "push");
        Ok(self.characters.clone())
    }

    /// Returns true if the text at the cursor starts with `pattern`.
    pub fn lookahead(&self, pattern: &str) -> bool {
        let pattern: Vec<char> = pattern.chars().collect();
        self.chars[self.offset..].starts_with(&pattern)
    }

    /// Returns true if the text right before the cursor ends with `pattern`.
    pub fn lookbehind(&self, pattern: &str) -> bool {
        let pattern: Vec<char> = pattern.chars().collect();
        self.chars[..self.offset].ends_with(&pattern)
    }

    /// Consumes characters while the predicate returns true.
    pub fn consume_while<F>(&mut self, mut predicate: F) -> String
    where
        F: FnMut(char) -> bool,
    {
        let start = self.offset;
        while let Some(&ch) = self.chars.get(self.offset) {
            if !predicate(ch) {
                break;
            }
            self.step_forward();
        }
        self.set_moved(start, self.offset);
        self.characters.clone()
    }

    /// Returns the characters in `start..end` without moving the cursor.
    pub fn slice(&self, start: usize, end: usize) -> Result<String, LexerError> {
        if end > self.chars.len() {
            return Err(self.out_of_bounds(signed(end)));
        }
        if start > end {
            return Err(self.out_of_bounds(signed(start)));
        }
        Ok(self.chars[start..end].iter().collect())
    }

    /// Moves the cursor back to the beginning of the text.
    pub fn reset(&mut self) {
        self.offset = 0;
        self.line = 1;
        self.line_start = 0;
        self.characters.clear();
        self.moved = (0, 0);
    }

    /// Creates a checkpoint that can be restored later.
    pub fn checkpoint(&self) -> Checkpoint {
        Checkpoint {
            offset: self.offset,
            line: self.line,
            line_start: self.line_start,
            moved: self.moved,
        }
    }

    /// Restores the cursor to a previous checkpoint.
    pub fn restore(&mut self, checkpoint: Checkpoint) {
        self.offset = checkpoint.offset;
        self.line = checkpoint.line;
        self.line_start = checkpoint.line_start;
        if self.moved != checkpoint.moved {
            self.set_moved(checkpoint.moved.0, checkpoint.moved.1);
        }
    }

    fn set_moved(&mut self, start: usize, end: usize) {
        self.characters = self.chars[start..end].iter().collect();
        self.moved = (start, end);
    }

    fn step_forward(&mut self) {
        if self.chars[self.offset] == '\n' {
            self.line += 1;
            self.line_start = self.offset + 1;
        }
        self.offset += 1;
    }

    fn out_of_bounds(&self, target: isize) -> LexerError {
        LexerError::OutOfBounds {
            target,
            length: self.chars.len(),
        }
    }
}

fn signed(value: usize) -> isize {
    isize::try_from(value).unwrap_or(isize::MAX)
}

/// Yields one character per step until the text is exhausted.
/// Iteration does not rewind; call [`Lexer::reset`] to start over.
impl Iterator for Lexer {
    type Item = char;

    fn next(&mut self) -> Option<Self::Item> {
        if self.is_eof() {
            return None;
        }
        self.consume().ok()
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = self.remaining();
        (remaining, Some(remaining))
    }
}

/// A saved cursor state.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Checkpoint {
    offset: usize,
    line: usize,
    line_start: usize,
    moved: (usize, usize),
}

impl Checkpoint {
    /// Returns the cursor offset stored in this checkpoint.
    pub fn offset(&self) -> usize {
        self.offset
    }
}
