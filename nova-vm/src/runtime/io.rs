//! Character I/O collaborators for the `out` and `in` opcodes.

use std::collections::VecDeque;
use std::io::{self, Read, Write};

/// Receives the characters emitted by `out`.
pub trait CharSink {
    fn write_char(&mut self, ch: char) -> io::Result<()>;

    /// Called before the machine blocks on input.
    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}

/// Supplies the characters consumed by `in`. `Ok(None)` means end of input.
pub trait CharSource {
    fn read_char(&mut self) -> io::Result<Option<char>>;
}

impl CharSink for String {
    fn write_char(&mut self, ch: char) -> io::Result<()> {
        self.push(ch);
        Ok(())
    }
}

/// Adapts any byte writer, encoding characters as UTF-8 and flushing on newline.
#[derive(Debug)]
pub struct WriterSink<W: Write> {
    inner: W,
}

impl<W: Write> WriterSink<W> {
    pub fn new(inner: W) -> Self {
        Self { inner }
    }

    pub fn into_inner(self) -> W {
        self.inner
    }
}

impl<W: Write> CharSink for WriterSink<W> {
    fn write_char(&mut self, ch: char) -> io::Result<()> {
        let mut buf = [0u8; 4];
        self.inner.write_all(ch.encode_utf8(&mut buf).as_bytes())?;
        if ch == '\n' {
            self.inner.flush()?;
        }
        Ok(())
    }

    fn flush(&mut self) -> io::Result<()> {
        self.inner.flush()
    }
}

/// Adapts any byte reader, decoding one UTF-8 character per request.
#[derive(Debug)]
pub struct ReaderSource<R: Read> {
    inner: R,
}

impl<R: Read> ReaderSource<R> {
    pub fn new(inner: R) -> Self {
        Self { inner }
    }
}

fn utf8_width(lead: u8) -> Option<usize> {
    match lead {
        0x00..=0x7F => Some(1),
        0xC0..=0xDF => Some(2),
        0xE0..=0xEF => Some(3),
        0xF0..=0xF7 => Some(4),
        _ => None,
    }
}

impl<R: Read> CharSource for ReaderSource<R> {
    fn read_char(&mut self) -> io::Result<Option<char>> {
        let mut buf = [0u8; 4];
        loop {
            match self.inner.read(&mut buf[..1]) {
                Ok(0) => return Ok(None),
                Ok(_) => break,
                Err(e) if e.kind() == io::ErrorKind::Interrupted => continue,
                Err(e) => return Err(e),
            }
        }

        let width = utf8_width(buf[0])
            .ok_or_else(|| io::Error::new(io::ErrorKind::InvalidData, "invalid UTF-8 lead byte"))?;
        self.inner.read_exact(&mut buf[1..width])?;

        let text = std::str::from_utf8(&buf[..width])
            .map_err(|e| io::Error::new(io::ErrorKind::InvalidData, e))?;
        Ok(text.chars().next())
    }
}

/// A fixed script of input characters, for tests and embedding.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ScriptedInput {
    pending: VecDeque<char>,
}

impl ScriptedInput {
    pub fn new(script: &str) -> Self {
        Self {
            pending: script.chars().collect(),
        }
    }

    pub fn empty() -> Self {
        Self::default()
    }

    pub fn remaining(&self) -> usize {
        self.pending.len()
    }
}

impl CharSource for ScriptedInput {
    fn read_char(&mut self) -> io::Result<Option<char>> {
        Ok(self.pending.pop_front())
    }
}
