//! Catalog Records
//!
//! Catalog text holds one offer per line:
//!
//! ```text
//! hotel_name,nightly_rate,promo_txt,deal_value,deal_type,start_date,end_date
//! ```
//!
//! A line that fails any check is logged and skipped; the rest of the source
//! still loads.

use std::{
    borrow::Cow,
    fs::File,
    io::{self, BufRead, BufReader},
    path::Path,
};

use jiff::civil::Date;
use thiserror::Error;
use tracing::{debug, warn};

use crate::{
    catalog::{Catalog, CatalogBuilder},
    offers::{Offer, OfferKind, UnknownOfferKind},
};

/// Field separator
pub const FIELD_DELIMITER: char = ',';

/// Fields per record
pub const FIELD_COUNT: usize = 7;

/// Date format accepted in records (`YYYY-MM-DD`).
pub const DATE_FORMAT: &str = "%Y-%m-%d";

/// Why a single record was rejected.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum RecordError {
    /// Wrong number of fields.
    #[error("expected 7 fields, found {0}")]
    FieldCount(usize),

    /// A field was empty after trimming.
    #[error("missing field: {0}")]
    MissingField(&'static str),

    /// A numeric field was not a base-10 integer.
    #[error("invalid {field}: {value:?} is not an integer")]
    InvalidInteger {
        /// Field name
        field: &'static str,
        /// Raw field text
        value: String,
    },

    /// The nightly rate was below zero.
    #[error("nightly rate must not be negative, found {0}")]
    NegativeRate(i64),

    /// A date field was not a `YYYY-MM-DD` calendar date.
    #[error("invalid {field}: {value:?} is not a YYYY-MM-DD date")]
    InvalidDate {
        /// Field name
        field: &'static str,
        /// Raw field text
        value: String,
    },

    /// The offer kind token is not one of the known kinds.
    #[error(transparent)]
    UnknownOfferKind(#[from] UnknownOfferKind),
}

/// Errors loading a catalog from a file.
#[derive(Debug, Error)]
pub enum CatalogError {
    /// The catalog file could not be opened.
    #[error("failed to open catalog {path}: {source}")]
    Io {
        /// Path that was opened
        path: String,
        /// Underlying error
        source: io::Error,
    },
}

/// One parsed catalog line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Record {
    /// Property the offer belongs to
    pub property_name: String,

    /// Base rate per night
    pub nightly_rate: i64,

    /// The offer itself
    pub offer: Offer,
}

/// Parse one catalog line.
///
/// # Errors
///
/// Returns a [`RecordError`] naming the first check the line failed.
pub fn parse_record(line: &str) -> Result<Record, RecordError> {
    let fields: Vec<&str> = line.split(FIELD_DELIMITER).map(str::trim).collect();

    let [name, rate, promo_text, value, kind, start, end] = fields.as_slice() else {
        return Err(RecordError::FieldCount(field_count(line)));
    };

    let name = required(name, "hotel name")?;
    let rate = required(rate, "nightly rate")?;
    let promo_text = required(promo_text, "promotional text")?;
    let value = required(value, "deal value")?;
    let kind = required(kind, "deal type")?;
    let start = required(start, "start date")?;
    let end = required(end, "end date")?;

    let start_date = parse_date(start, "start date")?;
    let end_date = parse_date(end, "end date")?;

    let nightly_rate = parse_integer(rate, "nightly rate")?;

    if nightly_rate < 0 {
        return Err(RecordError::NegativeRate(nightly_rate));
    }

    let value = parse_integer(value, "deal value")?;
    let kind: OfferKind = kind.parse()?;

    Ok(Record {
        property_name: name.to_string(),
        nightly_rate,
        offer: Offer::new(kind, promo_text, value, start_date, end_date),
    })
}

/// Blank lines count as having no fields at all.
fn field_count(line: &str) -> usize {
    if line.trim().is_empty() {
        0
    } else {
        line.split(FIELD_DELIMITER).count()
    }
}

fn required<'a>(field: &'a str, name: &'static str) -> Result<&'a str, RecordError> {
    if field.is_empty() {
        Err(RecordError::MissingField(name))
    } else {
        Ok(field)
    }
}

fn parse_integer(field: &str, name: &'static str) -> Result<i64, RecordError> {
    field
        .parse::<i64>()
        .map_err(|_err| RecordError::InvalidInteger {
            field: name,
            value: field.to_string(),
        })
}

/// Parse a strict `YYYY-MM-DD` date.
///
/// # Errors
///
/// Returns [`RecordError::InvalidDate`] if the text is not exactly four year
/// digits, two month digits and two day digits separated by dashes, or names a
/// day that does not exist.
pub fn parse_date(field: &str, name: &'static str) -> Result<Date, RecordError> {
    let invalid = || RecordError::InvalidDate {
        field: name,
        value: field.to_string(),
    };

    let well_formed = field.len() == 10
        && field.bytes().enumerate().all(|(i, b)| match i {
            4 | 7 => b == b'-',
            _ => b.is_ascii_digit(),
        });

    if !well_formed {
        return Err(invalid());
    }

    Date::strptime(DATE_FORMAT, field).map_err(|_err| invalid())
}

/// Load a catalog from text, skipping lines that fail to parse.
pub fn load_catalog(text: &str) -> Catalog {
    let mut loader = Loader::new();

    for line in text.lines() {
        loader.push_line(line);
    }

    loader.finish()
}

/// Load a catalog line by line from a reader.
///
/// Bytes that are not valid UTF-8 are replaced with `U+FFFD` and the line is
/// parsed as usual. A read error ends the load; everything read before it is
/// kept.
pub fn load_catalog_from_reader(mut reader: impl BufRead) -> Catalog {
    let mut loader = Loader::new();
    let mut buf = Vec::new();

    loop {
        buf.clear();

        match reader.read_until(b'\n', &mut buf) {
            Ok(0) => break,
            Ok(_) => {
                let decoded = String::from_utf8_lossy(&buf);

                if matches!(decoded, Cow::Owned(_)) {
                    warn!(
                        line = loader.line_number + 1,
                        "catalog record is not valid UTF-8; replacing invalid bytes"
                    );
                }

                loader.push_line(strip_line_ending(&decoded));
            }
            Err(error) => {
                warn!(
                    line = loader.line_number + 1,
                    %error,
                    "stopped reading catalog; keeping records read so far"
                );
                break;
            }
        }
    }

    loader.finish()
}

fn strip_line_ending(line: &str) -> &str {
    let line = line.strip_suffix('\n').unwrap_or(line);

    line.strip_suffix('\r').unwrap_or(line)
}

/// Load a catalog from a file.
///
/// # Errors
///
/// Returns [`CatalogError::Io`] if the file cannot be opened. Read errors after
/// that truncate the catalog instead of failing.
pub fn load_catalog_file(path: impl AsRef<Path>) -> Result<Catalog, CatalogError> {
    let path = path.as_ref();

    let file = File::open(path).map_err(|source| CatalogError::Io {
        path: path.display().to_string(),
        source,
    })?;

    Ok(load_catalog_from_reader(BufReader::new(file)))
}

#[derive(Debug)]
struct Loader {
    builder: CatalogBuilder,
    line_number: usize,
    skipped: usize,
}

impl Loader {
    fn new() -> Self {
        Self {
            builder: Catalog::builder(),
            line_number: 0,
            skipped: 0,
        }
    }

    fn push_line(&mut self, line: &str) {
        self.line_number += 1;
        self.builder.record_source_line(line);

        match parse_record(line) {
            Ok(record) => {
                self.builder
                    .add_offer(&record.property_name, record.nightly_rate, record.offer);
            }
            Err(error) => {
                self.skipped += 1;

                warn!(line = self.line_number, %error, raw = line, "skipping catalog record");
            }
        }
    }

    fn finish(self) -> Catalog {
        debug!(
            lines = self.line_number,
            offers = self.builder.offer_count(),
            skipped = self.skipped,
            "loaded catalog"
        );

        self.builder.build()
    }
}
