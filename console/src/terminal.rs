use std::fmt::Display;
use std::io::{BufRead, Write};

use error_stack::ResultExt;
use kernel::KernelError;

/// Line-oriented prompt over any reader/writer pair.
pub struct Terminal<R, W> {
    input: R,
    output: W,
}

impl<R: BufRead, W: Write> Terminal<R, W> {
    pub fn new(input: R, output: W) -> Self {
        Self { input, output }
    }

    /// Prints `message` and reads one line without its line ending. `None` once input is exhausted.
    /// Bytes that are not UTF-8 are replaced rather than rejected.
    pub fn prompt(&mut self, message: &str) -> error_stack::Result<Option<String>, KernelError> {
        write!(self.output, "{message}")
            .and_then(|_| self.output.flush())
            .change_context_lazy(|| KernelError::Internal)
            .attach_printable("Failed to write prompt")?;

        let mut raw = Vec::new();
        let read = self
            .input
            .read_until(b'\n', &mut raw)
            .change_context_lazy(|| KernelError::Internal)
            .attach_printable("Failed to read input")?;
        if read == 0 {
            return Ok(None);
        }
        let line = String::from_utf8_lossy(&raw);
        Ok(Some(line.trim_end_matches(['\r', '\n']).to_string()))
    }

    pub fn println(&mut self, line: impl Display) -> error_stack::Result<(), KernelError> {
        writeln!(self.output, "{line}")
            .change_context_lazy(|| KernelError::Internal)
            .attach_printable("Failed to write output")
    }

    pub fn print_lines<L: Display>(
        &mut self,
        lines: impl IntoIterator<Item = L>,
    ) -> error_stack::Result<(), KernelError> {
        lines.into_iter().try_for_each(|line| self.println(line))
    }

    #[cfg(test)]
    pub fn into_output(self) -> W {
        self.output
    }
}
