//! Concierge
//!
//! Concierge picks the cheapest promotional offer a lodging property has for a
//! stay: a check-in date and a number of nights.
//!
//! Offers are loaded from catalog text, one comma separated record per line:
//!
//! ```text
//! Hotel Foobar,250,$50 off your stay 3 nights or more,-50,rebate_3plus,2016-03-01,2016-03-31
//! ```

pub mod catalog;
pub mod fixtures;
pub mod offers;
pub mod prelude;
pub mod properties;
pub mod quotes;
pub mod records;
pub mod report;
