use std::io::Read;

use crate::ticket::TicketRequest;
use csv::{DeserializeRecordsIntoIter, Trim};

/// Parses ticket requests in CSV format, one `type,quantity` row per request.
/// An empty quantity is kept as absent.
pub struct CsvTicketRequestParser<R> {
    iter: DeserializeRecordsIntoIter<R, TicketRequest>,
}

impl<R> CsvTicketRequestParser<R>
where
    R: Read,
{
    pub fn new(source: R) -> Self {
        let reader = csv::ReaderBuilder::new()
            .trim(Trim::All)
            .flexible(true)
            .from_reader(source);

        Self {
            iter: reader.into_deserialize(),
        }
    }
}

impl<R> Iterator for CsvTicketRequestParser<R>
where
    R: Read,
{
    type Item = (u64, csv::Result<TicketRequest>);

    fn next(&mut self) -> Option<Self::Item> {
        let curr_line = self.iter.reader().position().line();
        self.iter.next().map(|row| (curr_line, row))
    }
}
