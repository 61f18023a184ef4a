//! Quotes

use std::fmt;

use jiff::civil::Date;
use thiserror::Error;

use crate::{
    offers::{Offer, undiscounted_price},
    properties::Property,
};

/// Errors raised while validating a stay request.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum QueryError {
    /// No check-in date was supplied.
    #[error("check-in date is required")]
    MissingCheckInDate,

    /// The property name was empty or whitespace.
    #[error("property name is required")]
    MissingProperty,

    /// A stay must last at least one night.
    #[error("stay length must be at least one night")]
    NoNights,
}

/// Errors raised when deriving prices from a quote.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum QuoteError {
    /// The quote was made for a property the catalog does not contain.
    #[error("no property named {0:?}; there is no nightly rate to price")]
    UnknownProperty(String),
}

/// A validated request for the best offer on a stay.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StayRequest {
    property: String,
    check_in: Date,
    nights: u32,
}

impl StayRequest {
    /// Validate the parts of a stay request.
    ///
    /// # Errors
    ///
    /// - [`QueryError::MissingProperty`]: the property name is blank.
    /// - [`QueryError::MissingCheckInDate`]: no check-in date was supplied.
    /// - [`QueryError::NoNights`]: `nights` is zero.
    pub fn new(
        property: impl Into<String>,
        check_in: Option<Date>,
        nights: u32,
    ) -> Result<Self, QueryError> {
        let property = property.into();

        if property.trim().is_empty() {
            return Err(QueryError::MissingProperty);
        }

        let check_in = check_in.ok_or(QueryError::MissingCheckInDate)?;

        if nights == 0 {
            return Err(QueryError::NoNights);
        }

        Ok(Self {
            property,
            check_in,
            nights,
        })
    }

    /// Requested property name
    pub fn property(&self) -> &str {
        &self.property
    }

    /// Check-in date
    pub fn check_in(&self) -> Date {
        self.check_in
    }

    /// Stay length in nights
    pub fn nights(&self) -> u32 {
        self.nights
    }
}

/// The outcome of a best-offer search.
///
/// The final price is derived from the property's nightly rate each time it is
/// asked for; nothing about the price is stored.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Quote {
    property: Option<Property>,
    requested_property: String,
    offer: Offer,
    check_in: Date,
    nights: u32,
}

impl Quote {
    /// Create a quote for a known property.
    ///
    /// Use [`Quote::unknown_property`] when the name matched nothing.
    pub fn new(property: Property, offer: Offer, check_in: Date, nights: u32) -> Self {
        Self {
            requested_property: property.name().to_string(),
            property: Some(property),
            offer,
            check_in,
            nights,
        }
    }

    /// Create a quote for a property name that matched nothing.
    pub fn unknown_property(name: &str, check_in: Date, nights: u32) -> Self {
        Self {
            property: None,
            requested_property: name.to_string(),
            offer: Offer::no_offer(),
            check_in,
            nights,
        }
    }

    /// Matched property, if any
    pub fn property(&self) -> Option<&Property> {
        self.property.as_ref()
    }

    /// The name that was asked for.
    pub fn requested_property(&self) -> &str {
        &self.requested_property
    }

    /// Chosen offer; the no-discount offer when nothing applied.
    pub fn offer(&self) -> &Offer {
        &self.offer
    }

    /// Requested check-in date
    pub fn check_in(&self) -> Date {
        self.check_in
    }

    /// Requested stay length
    pub fn nights(&self) -> u32 {
        self.nights
    }

    fn nightly_rate(&self) -> Result<i64, QuoteError> {
        self.property
            .as_ref()
            .map(Property::nightly_rate)
            .ok_or_else(|| QuoteError::UnknownProperty(self.requested_property.clone()))
    }

    /// What the guest pays with the chosen offer applied.
    ///
    /// # Errors
    ///
    /// Returns [`QuoteError::UnknownProperty`] if the quote has no property.
    pub fn final_price(&self) -> Result<i64, QuoteError> {
        Ok(self.offer.final_price(self.nightly_rate()?, self.nights))
    }

    /// What the guest would pay with no offer.
    ///
    /// # Errors
    ///
    /// Returns [`QuoteError::UnknownProperty`] if the quote has no property.
    pub fn undiscounted_price(&self) -> Result<i64, QuoteError> {
        Ok(undiscounted_price(self.nightly_rate()?, self.nights))
    }

    /// Difference between the undiscounted and final price.
    ///
    /// Negative when the chosen offer is a surcharge.
    ///
    /// # Errors
    ///
    /// Returns [`QuoteError::UnknownProperty`] if the quote has no property.
    pub fn savings(&self) -> Result<i64, QuoteError> {
        Ok(self
            .undiscounted_price()?
            .saturating_sub(self.final_price()?))
    }

    /// One-line description of the quote.
    ///
    /// # Errors
    ///
    /// Returns [`QuoteError::UnknownProperty`] if the quote has no property.
    pub fn summary(&self) -> Result<String, QuoteError> {
        let price = self.final_price()?;

        Ok(format!(
            "At {} for length of stay of {} nights, and a check-in on {}, {} Your final price would be: ${}",
            self.requested_property,
            self.nights,
            self.check_in,
            self.offer.promotional_text(),
            price
        ))
    }
}

impl fmt::Display for Quote {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.offer.promotional_text())
    }
}

#[cfg(test)]
mod tests {
    use jiff::civil::date;
    use testresult::TestResult;

    use super::*;

    fn foobar_quote() -> Quote {
        let offer = Offer::flat_rebate_three_plus(
            "$50 off your stay 3 nights or more.",
            -50,
            date(2016, 3, 1),
            date(2016, 3, 31),
        );
        let property = Property::with_offers("Hotel Foobar", 250, [offer.clone()]);

        Quote::new(property, offer, date(2016, 3, 15), 3)
    }

    #[test]
    fn prices_are_derived_from_property_rate() -> TestResult {
        let quote = foobar_quote();

        assert_eq!(quote.undiscounted_price()?, 750);
        assert_eq!(quote.final_price()?, 700);
        assert_eq!(quote.savings()?, 50);

        Ok(())
    }

    #[test]
    fn known_property_quote_records_its_name() {
        let quote = foobar_quote();

        assert_eq!(quote.requested_property(), "Hotel Foobar");
        assert_eq!(quote.property().map(Property::name), Some("Hotel Foobar"));
        assert!(quote.final_price().is_ok());
    }

    #[test]
    fn unknown_property_cannot_be_priced() {
        let quote = Quote::unknown_property("Nowhere", date(2016, 3, 15), 3);

        assert_eq!(quote.requested_property(), "Nowhere");
        assert_eq!(quote.offer(), &Offer::no_offer());
        assert_eq!(
            quote.final_price(),
            Err(QuoteError::UnknownProperty("Nowhere".to_string()))
        );
        assert!(quote.savings().is_err());
        assert!(quote.summary().is_err());
    }

    #[test]
    fn summary_describes_stay() -> TestResult {
        assert_eq!(
            foobar_quote().summary()?,
            "At Hotel Foobar for length of stay of 3 nights, and a check-in on 2016-03-15, \
             $50 off your stay 3 nights or more. Your final price would be: $700"
        );

        Ok(())
    }

    #[test]
    fn display_is_promotional_text() {
        assert_eq!(
            foobar_quote().to_string(),
            "$50 off your stay 3 nights or more."
        );
        assert_eq!(
            Quote::unknown_property("Nowhere", date(2016, 3, 15), 1).to_string(),
            "No deal available"
        );
    }

    #[test]
    fn stay_request_requires_check_in_date() {
        assert_eq!(
            StayRequest::new("Hotel Foobar", None, 2),
            Err(QueryError::MissingCheckInDate)
        );
    }

    #[test]
    fn stay_request_requires_nights() {
        assert_eq!(
            StayRequest::new("Hotel Foobar", Some(date(2016, 3, 15)), 0),
            Err(QueryError::NoNights)
        );
    }

    #[test]
    fn stay_request_requires_property() {
        assert_eq!(
            StayRequest::new("   ", Some(date(2016, 3, 15)), 2),
            Err(QueryError::MissingProperty)
        );
    }

    #[test]
    fn stay_request_keeps_name_untrimmed() -> TestResult {
        let request = StayRequest::new(" Hotel Foobar", Some(date(2016, 3, 15)), 2)?;

        assert_eq!(request.property(), " Hotel Foobar");
        assert_eq!(request.check_in(), date(2016, 3, 15));
        assert_eq!(request.nights(), 2);

        Ok(())
    }
}
