//! Reading and writing states as CSV
//!
//! A puzzle file holds three records of three fields and no header. Fields
//! are `1` to `8` and a single space (or nothing) for the blank:
//!
//! ```text
//! 2,8,3
//! 1,6,4
//! 7, ,5
//! ```

use std::fs::File;
use std::io::{self, Read, Write};
use std::path::Path;

use tracing::debug;

use crate::error::{Error, Result};
use crate::state::{symbol, State};

impl State {
    /// Loads a state from the CSV file at `path`.
    pub fn from_csv(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let file = File::open(path).map_err(|source| match source.kind() {
            io::ErrorKind::NotFound => Error::NotFound {
                path: path.to_path_buf(),
            },
            _ => Error::Io {
                operation: format!("open {}", path.display()),
                source,
            },
        })?;

        debug!(path = %path.display(), "loading state");
        Self::from_csv_reader(file)
    }

    /// Parses a state from CSV data.
    pub fn from_csv_reader<R: Read>(reader: R) -> Result<Self> {
        let mut reader = csv::ReaderBuilder::new()
            .has_headers(false)
            .flexible(true)
            .from_reader(reader);

        let mut rows: Vec<Vec<String>> = Vec::new();
        for record in reader.records() {
            let record = record?;
            rows.push(record.iter().map(str::to_string).collect());
        }

        Self::from_symbols(&rows)
    }

    /// Writes the state in the format read by [`State::from_csv_reader`].
    pub fn write_csv<W: Write>(&self, writer: W) -> Result<()> {
        let mut writer = csv::WriterBuilder::new()
            .has_headers(false)
            .from_writer(writer);

        for row in self.tiles() {
            writer.write_record(row.iter().map(|&value| symbol(value).to_string()))?;
        }

        writer.flush().map_err(|source| Error::Io {
            operation: "flush CSV output".to_string(),
            source,
        })
    }

    /// Saves the state to a CSV file at `path`, replacing any existing file.
    pub fn save_csv(&self, path: impl AsRef<Path>) -> Result<()> {
        let path = path.as_ref();
        let file = File::create(path).map_err(|source| Error::Io {
            operation: format!("create {}", path.display()),
            source,
        })?;
        self.write_csv(file)
    }

    pub fn to_csv_string(&self) -> Result<String> {
        let mut buffer = Vec::new();
        self.write_csv(&mut buffer)?;
        Ok(String::from_utf8_lossy(&buffer).into_owned())
    }
}
