use std::fmt::Display;
use std::io::{self, BufRead, Write};

/// Line-oriented prompt/reply terminal over any reader and writer.
pub struct Console<R, W> {
    input: R,
    output: W,
}

impl<R: BufRead, W: Write> Console<R, W> {
    pub fn new(input: R, output: W) -> Self {
        Self { input, output }
    }

    /// Write one line of output.
    pub fn say(&mut self, line: impl Display) -> io::Result<()> {
        writeln!(self.output, "{line}")
    }

    /// Print `question` and read the reply without its line ending.
    ///
    /// Bytes that are not valid UTF-8 are replaced rather than rejected, so
    /// a garbled reply is just text no prompt accepts. Returns `None` once
    /// input is exhausted.
    pub fn prompt(&mut self, question: &str) -> io::Result<Option<String>> {
        write!(self.output, "{question}")?;
        self.output.flush()?;

        let mut raw = Vec::new();
        if self.input.read_until(b'\n', &mut raw)? == 0 {
            return Ok(None);
        }
        let mut line = String::from_utf8_lossy(&raw).into_owned();
        let trimmed = line.trim_end_matches(['\n', '\r']).len();
        line.truncate(trimmed);
        Ok(Some(line))
    }

    pub fn into_output(self) -> W {
        self.output
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    #[test]
    fn prompt_strips_line_endings_only() {
        let mut console = Console::new(Cursor::new(" A1 \r\nnext\n"), Vec::new());
        assert_eq!(console.prompt("code? ").unwrap().as_deref(), Some(" A1 "));
        assert_eq!(console.prompt("again? ").unwrap().as_deref(), Some("next"));
        assert_eq!(console.prompt("eof? ").unwrap(), None);

        let out = String::from_utf8(console.into_output()).unwrap();
        assert_eq!(out, "code? again? eof? ");
    }

    #[test]
    fn invalid_utf8_reply_is_replaced_not_an_error() {
        let mut console = Console::new(Cursor::new(b"\xff\xfe\nA1\n".to_vec()), Vec::new());
        assert_eq!(
            console.prompt("").unwrap().as_deref(),
            Some("\u{FFFD}\u{FFFD}")
        );
        assert_eq!(console.prompt("").unwrap().as_deref(), Some("A1"));
    }

    #[test]
    fn last_line_without_newline_is_read() {
        let mut console = Console::new(Cursor::new("8"), Vec::new());
        assert_eq!(console.prompt("").unwrap().as_deref(), Some("8"));
    }
}
