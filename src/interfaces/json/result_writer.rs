use crate::domain::payment::PaymentResult;
use crate::error::Result;
use std::io::Write;

/// Writes payment results as JSON lines.
pub struct ResultWriter<W: Write> {
    writer: W,
}

impl<W: Write> ResultWriter<W> {
    pub fn new(writer: W) -> Self {
        Self { writer }
    }

    pub fn write_result(&mut self, result: &PaymentResult) -> Result<()> {
        serde_json::to_writer(&mut self.writer, result)?;
        writeln!(self.writer)?;
        Ok(())
    }

    pub fn flush(&mut self) -> Result<()> {
        self.writer.flush()?;
        Ok(())
    }
}
