use crate::domain::transaction::{Purchase, PurchaseRecord};
use crate::error::{Result, TillError};
use std::io::Read;

/// Reads purchases from a CSV source with a `cost,twenties,tens,fives,ones` header.
///
/// This reader wraps `csv::Reader` and provides an iterator over `Result<Purchase>`.
/// It trims whitespace and accepts short rows; missing bill columns count as zero.
pub struct PurchaseReader<R: Read> {
    reader: csv::Reader<R>,
}

impl<R: Read> PurchaseReader<R> {
    /// Creates a new `PurchaseReader` from any `Read` source (e.g., File, Stdin).
    pub fn new(source: R) -> Self {
        let reader = csv::ReaderBuilder::new()
            .trim(csv::Trim::All)
            .flexible(true)
            .from_reader(source);
        Self { reader }
    }

    /// Returns an iterator that lazily reads and validates purchases.
    ///
    /// A zero cost surfaces as `TillError::ValidationError` for that row only.
    pub fn purchases(self) -> impl Iterator<Item = Result<Purchase>> {
        self.reader.into_deserialize::<PurchaseRecord>().map(|result| {
            result
                .map_err(TillError::from)
                .and_then(Purchase::try_from)
        })
    }
}
