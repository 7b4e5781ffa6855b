use std::{fmt, io};

use crate::error::Result;

/// Output stream that remembers its first failure.
///
/// Generators write through `write!`/`writeln!` without checking each
/// call; once a write fails every following one is skipped, and the
/// error comes out of [`Sink::finish`].
pub struct Sink<W> {
    inner: W,
    error: Option<io::Error>,
}

impl<W: io::Write> Sink<W> {
    pub fn new(inner: W) -> Self {
        Sink { inner, error: None }
    }

    // shadows io::Write::write_fmt so that write!(sink, ..) yields ()
    pub fn write_fmt(&mut self, args: fmt::Arguments<'_>) {
        if self.error.is_some() {
            return;
        }

        if let Err(e) = self.inner.write_fmt(args) {
            self.error = Some(e);
        }
    }

    pub fn write_str(&mut self, s: &str) {
        self.write_fmt(format_args!("{}", s))
    }

    pub fn failed(&self) -> bool {
        self.error.is_some()
    }

    /// Hands back the destination, or the first write error.
    pub fn finish(self) -> Result<W> {
        match self.error {
            Some(e) => Err(e.into()),
            None => Ok(self.inner),
        }
    }
}
