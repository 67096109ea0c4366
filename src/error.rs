use std::borrow::Cow;
use std::error::Error;
use std::fmt;

/// Human-oriented coordinates of an error location
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ReadablePosition {
    /// 1-based line number
    pub line: usize,
    /// 1-based column, counted in characters
    pub column: usize,
    /// Byte offset from the start of the line
    pub byte_offset: usize,
}

#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct CodeLoc<'code> {
    code: &'code str,
    /// The position in `code` where the cursor encountered an error
    loc: usize,
}

impl<'code> CodeLoc<'code> {
    pub fn new(code: &'code str, loc: usize) -> Self {
        Self { code, loc }
    }

    pub fn position(&self) -> usize {
        self.loc
    }

    pub fn source(&self) -> &'code str {
        self.code
    }

    /// The character at the error location, `None` at end of input
    pub fn found(&self) -> Option<char> {
        self.code.get(self.loc..).and_then(|rest| rest.chars().next())
    }

    /// Calculate line, column and byte offset within that line
    pub fn readable_position(&self) -> ReadablePosition {
        let before = self.code.get(..self.loc).unwrap_or(self.code);
        let line_start = before.rfind('\n').map_or(0, |i| i + 1);
        let line = before.matches('\n').count() + 1;
        let column = before[line_start..].chars().count() + 1;

        ReadablePosition {
            line,
            column,
            byte_offset: before.len() - line_start,
        }
    }

    /// Get lines of context around the error position
    /// Returns up to 2 lines before and after the error line
    pub fn context_lines(&self) -> Vec<String> {
        let pos = self.readable_position();
        let first = pos.line.saturating_sub(2);
        let last = pos.line + 2;
        let mut lines = Vec::new();

        for (index, line_content) in self.code.split('\n').enumerate() {
            let current_line = index + 1;
            if current_line < first || current_line > last {
                continue;
            }

            let prefix = if current_line == pos.line {
                format!("  > {} | ", current_line)
            } else {
                format!("    {} | ", current_line)
            };
            lines.push(format!("{}{}", prefix, line_content));

            if current_line == pos.line {
                let pointer_offset = prefix.len() + pos.column - 1;
                lines.push(format!("{}^--- here", " ".repeat(pointer_offset)));
            }
        }

        lines
    }
}

/// Failure of a parser at a given location
///
/// Besides what was expected, a failure records whether the failing parser had
/// consumed input before it gave up. `choice` only tries the next alternative
/// after a failure that consumed nothing; `attempt` clears the flag.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SyntaxError<'code> {
    expected: Vec<Cow<'static, str>>,
    unexpected: Option<Cow<'static, str>>,
    loc: CodeLoc<'code>,
    consumed: bool,
}

impl<'code> SyntaxError<'code> {
    pub fn new(expected: impl Into<Cow<'static, str>>, loc: CodeLoc<'code>) -> Self {
        Self {
            expected: vec![expected.into()],
            unexpected: None,
            loc,
            consumed: false,
        }
    }

    /// Override what is reported as found at the location
    pub fn with_unexpected(mut self, unexpected: impl Into<Cow<'static, str>>) -> Self {
        self.unexpected = Some(unexpected.into());
        self
    }

    pub fn expected(&self) -> &[Cow<'static, str>] {
        &self.expected
    }

    pub fn loc(&self) -> CodeLoc<'code> {
        self.loc
    }

    /// Byte offset of the failure
    pub fn position(&self) -> usize {
        self.loc.position()
    }

    /// The character at the failure location, `None` at end of input
    pub fn found(&self) -> Option<char> {
        self.loc.found()
    }

    /// Whether input was consumed before the failure
    pub fn consumed(&self) -> bool {
        self.consumed
    }

    /// Expectations joined for display, e.g. `"/packs/" or "/options/"`
    pub fn expectation(&self) -> String {
        match self.expected.as_slice() {
            [] => "nothing".to_string(),
            [only] => only.to_string(),
            [init @ .., last] => format!("{} or {}", init.join(", "), last),
        }
    }

    /// What was found at the failure location, for display
    pub fn unexpected(&self) -> String {
        match (&self.unexpected, self.found()) {
            (Some(text), _) => text.to_string(),
            (None, Some(found)) => format!("{:?}", found),
            (None, None) => "end of input".to_string(),
        }
    }

    pub(crate) fn consuming(mut self) -> Self {
        self.consumed = true;
        self
    }

    pub(crate) fn consuming_if(self, advanced: bool) -> Self {
        if advanced { self.consuming() } else { self }
    }

    pub(crate) fn backtracked(mut self) -> Self {
        self.consumed = false;
        self
    }

    pub(crate) fn relabel(mut self, label: Cow<'static, str>) -> Self {
        self.expected = vec![label];
        self
    }

    /// Combine two failures of sibling alternatives
    ///
    /// The failure that got further wins; failures at the same position list
    /// the expectations of both. Ties keep what the later one found.
    pub(crate) fn merge(self, other: SyntaxError<'code>) -> SyntaxError<'code> {
        if other.position() > self.position() {
            return other;
        }
        if other.position() < self.position() {
            return self;
        }

        let mut expected = self.expected;
        for item in other.expected {
            if !expected.contains(&item) {
                expected.push(item);
            }
        }

        SyntaxError {
            expected,
            unexpected: other.unexpected.or(self.unexpected),
            loc: other.loc,
            consumed: self.consumed || other.consumed,
        }
    }
}

impl<'code> fmt::Display for SyntaxError<'code> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let pos = self.loc.readable_position();
        writeln!(
            f,
            "Syntax error at line {}, column {} (absolute position: {}): expected {}, found {}",
            pos.line,
            pos.column,
            self.loc.position(),
            self.expectation(),
            self.unexpected()
        )?;
        writeln!(f)?;
        for line in self.loc.context_lines() {
            writeln!(f, "{}", line)?;
        }
        Ok(())
    }
}

impl<'code> Error for SyntaxError<'code> {}

/// Owned failure returned by [`crate::parse_configuration`]
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("syntax error at line {line}, column {column}: expected {expected}, found {found}")]
pub struct ParseError {
    /// Byte offset of the failure in the input
    pub offset: usize,
    pub line: usize,
    pub column: usize,
    pub expected: String,
    pub found: String,
    /// Source lines around the failure with a pointer under it
    pub context: String,
}

impl<'code> From<SyntaxError<'code>> for ParseError {
    fn from(error: SyntaxError<'code>) -> Self {
        let pos = error.loc.readable_position();
        ParseError {
            offset: error.position(),
            line: pos.line,
            column: pos.column,
            expected: error.expectation(),
            found: error.unexpected(),
            context: error.loc.context_lines().join("\n"),
        }
    }
}
