//! Line-oriented terminal I/O.
//!
//! The controller only needs three things from a terminal: wipe it, print
//! a screen, read one line. `StdTerminal` does that against the real
//! stdout/stdin; tests script it.

use std::io::{self, BufRead, Write};

use crossterm::cursor::MoveTo;
use crossterm::execute;
use crossterm::terminal::{Clear, ClearType};

pub trait Terminal {
    fn clear_screen(&mut self) -> io::Result<()>;

    /// Write text as-is and flush, so prompts without a newline show up.
    fn print(&mut self, text: &str) -> io::Result<()>;

    /// Read one line without its line ending. `UnexpectedEof` once input is closed.
    fn read_line(&mut self) -> io::Result<String>;
}

#[derive(Default)]
pub struct StdTerminal;

impl StdTerminal {
    pub fn new() -> Self {
        Self
    }
}

impl Terminal for StdTerminal {
    fn clear_screen(&mut self) -> io::Result<()> {
        execute!(io::stdout(), Clear(ClearType::All), MoveTo(0, 0))
    }

    fn print(&mut self, text: &str) -> io::Result<()> {
        let mut out = io::stdout().lock();
        out.write_all(text.as_bytes())?;
        out.flush()
    }

    fn read_line(&mut self) -> io::Result<String> {
        read_line_from(&mut io::stdin().lock())
    }
}

/// Read one line from `reader`. Bytes that are not UTF-8 become U+FFFD, so
/// a garbled line is just unrecognized input rather than an error.
fn read_line_from<R: BufRead>(reader: &mut R) -> io::Result<String> {
    let mut buf = Vec::new();
    if reader.read_until(b'\n', &mut buf)? == 0 {
        return Err(io::Error::new(io::ErrorKind::UnexpectedEof, "stdin closed"));
    }
    let line = String::from_utf8_lossy(&buf);
    Ok(line.trim_end_matches(['\r', '\n']).to_string())
}
