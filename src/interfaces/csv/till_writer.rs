use crate::domain::till::TillSnapshot;
use crate::error::Result;
use serde::Serialize;
use std::io::Write;

#[derive(Serialize)]
struct TillRow {
    denomination: u64,
    count: u32,
    value: u64,
}

/// Writes the till's contents as CSV, one row per denomination from $20 down.
pub struct TillWriter<W: Write> {
    writer: csv::Writer<W>,
}

impl<W: Write> TillWriter<W> {
    pub fn new(destination: W) -> Self {
        Self {
            writer: csv::Writer::from_writer(destination),
        }
    }

    pub fn write_snapshot(&mut self, snapshot: &TillSnapshot) -> Result<()> {
        for (denomination, count) in snapshot.bills.iter() {
            self.writer.serialize(TillRow {
                denomination: denomination.value(),
                count,
                value: u64::from(count) * denomination.value(),
            })?;
        }
        self.writer.flush()?;
        Ok(())
    }
}
