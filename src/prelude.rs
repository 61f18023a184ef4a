//! Concierge prelude.
//!
//! Convenience exports for common library consumers.

pub use crate::{
    catalog::Catalog,
    offers::{Offer, OfferKind, UnknownOfferKind},
    properties::{Property, PropertyKey},
    quotes::{QueryError, Quote, QuoteError, StayRequest},
    records::{
        CatalogError, Record, RecordError, load_catalog, load_catalog_file,
        load_catalog_from_reader, parse_record,
    },
    report::{ReportError, write_quote},
};
