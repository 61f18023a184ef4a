//! Catalog
//!
//! The properties loaded from one catalog source. Catalogs are only built by
//! the loaders in [`crate::records`]; once loaded a [`Catalog`] can only be
//! queried.

use jiff::civil::Date;
use rustc_hash::FxHashMap;
use slotmap::SlotMap;
use tracing::debug;

use crate::{
    offers::Offer,
    properties::{Property, PropertyKey},
    quotes::{Quote, StayRequest},
};

/// Accumulates properties and offers while a catalog source is read.
#[derive(Debug, Default)]
pub(crate) struct CatalogBuilder {
    properties: SlotMap<PropertyKey, Property>,
    property_keys: FxHashMap<String, PropertyKey>,
    source_text: String,
}

impl CatalogBuilder {
    /// Create an empty builder.
    pub fn new() -> Self {
        Self::default()
    }

    /// Attach `offer` to the named property, creating the property on first use.
    ///
    /// The nightly rate of the first row naming a property is the one kept; a
    /// differing rate on a later row is ignored.
    pub fn add_offer(&mut self, property_name: &str, nightly_rate: i64, offer: Offer) -> &mut Self {
        let key = match self.property_keys.get(property_name) {
            Some(key) => *key,
            None => {
                let key = self
                    .properties
                    .insert(Property::new(property_name, nightly_rate));

                self.property_keys.insert(property_name.to_string(), key);

                key
            }
        };

        if let Some(property) = self.properties.get_mut(key) {
            if property.nightly_rate() != nightly_rate {
                debug!(
                    property = property_name,
                    kept = property.nightly_rate(),
                    ignored = nightly_rate,
                    "nightly rate differs from first record; keeping first"
                );
            }

            property.push_offer(offer);
        }

        self
    }

    /// Append a line of source text, kept verbatim for diagnostics.
    pub fn record_source_line(&mut self, line: &str) -> &mut Self {
        self.source_text.push_str(line);
        self.source_text.push('\n');

        self
    }

    /// Number of offers attached so far, across all properties.
    pub fn offer_count(&self) -> usize {
        self.properties
            .values()
            .map(|property| property.offers().len())
            .sum()
    }

    /// Finish loading.
    pub fn build(self) -> Catalog {
        Catalog {
            properties: self.properties,
            property_keys: self.property_keys,
            source_text: self.source_text,
        }
    }
}

/// Read-only collection of properties, keyed by exact name.
///
/// There is no way to add to a catalog from outside the crate:
///
/// ```compile_fail
/// let _builder = concierge::catalog::Catalog::builder();
/// ```
#[derive(Debug, Clone, Default)]
pub struct Catalog {
    properties: SlotMap<PropertyKey, Property>,
    property_keys: FxHashMap<String, PropertyKey>,
    source_text: String,
}

impl Catalog {
    /// Start building a catalog.
    pub(crate) fn builder() -> CatalogBuilder {
        CatalogBuilder::new()
    }

    /// Look up a property by exact, case-sensitive name.
    pub fn property(&self, name: &str) -> Option<&Property> {
        self.property_keys
            .get(name)
            .and_then(|key| self.properties.get(*key))
    }

    /// Owned copy of every property, in the order they were first seen.
    pub fn properties(&self) -> Vec<Property> {
        self.properties.values().cloned().collect()
    }

    /// Iterate over the properties without copying.
    pub fn iter(&self) -> impl Iterator<Item = &Property> {
        self.properties.values()
    }

    /// Number of properties
    pub fn len(&self) -> usize {
        self.properties.len()
    }

    /// Whether no property was loaded
    pub fn is_empty(&self) -> bool {
        self.properties.is_empty()
    }

    /// The text the catalog was loaded from.
    pub fn source_text(&self) -> &str {
        &self.source_text
    }

    /// Find the best offer for a stay at the named property.
    ///
    /// An unknown name is not an error: the quote carries no property and the
    /// no-discount offer.
    pub fn find_best_value(&self, property_name: &str, check_in: Date, nights: u32) -> Quote {
        match self.property(property_name) {
            Some(property) => {
                let offer = property.find_best_offer(check_in, nights);

                debug!(
                    property = property_name,
                    %check_in,
                    nights,
                    offer = offer.promotional_text(),
                    "selected offer"
                );

                Quote::new(property.clone(), offer, check_in, nights)
            }
            None => {
                debug!(property = property_name, "no such property");

                Quote::unknown_property(property_name, check_in, nights)
            }
        }
    }

    /// [`Catalog::find_best_value`] for an already validated request.
    pub fn quote(&self, request: &StayRequest) -> Quote {
        self.find_best_value(request.property(), request.check_in(), request.nights())
    }
}

#[cfg(test)]
mod tests {
    use jiff::civil::date;
    use testresult::TestResult;

    use crate::{offers::OfferKind, quotes::QuoteError};

    use super::*;

    fn march_rebate(text: &str, amount: i64) -> Offer {
        Offer::flat_rebate(text, amount, date(2016, 3, 1), date(2016, 3, 31))
    }

    #[test]
    fn add_offer_creates_property_once() {
        let mut builder = Catalog::builder();

        builder
            .add_offer("Hotel Foobar", 250, march_rebate("$20 off", -20))
            .add_offer("Hotel Foobar", 250, march_rebate("$30 off", -30));

        let catalog = builder.build();

        assert_eq!(catalog.len(), 1);
        assert_eq!(
            catalog.property("Hotel Foobar").map(|p| p.offers().len()),
            Some(2)
        );
    }

    #[test]
    fn first_nightly_rate_wins() {
        let mut builder = Catalog::builder();

        builder
            .add_offer("Hotel Foobar", 250, march_rebate("$20 off", -20))
            .add_offer("Hotel Foobar", 300, march_rebate("$30 off", -30));

        let catalog = builder.build();

        assert_eq!(
            catalog.property("Hotel Foobar").map(Property::nightly_rate),
            Some(250)
        );
    }

    #[test]
    fn lookup_is_exact_and_case_sensitive() {
        let mut builder = Catalog::builder();

        builder.add_offer("Hotel Foobar", 250, march_rebate("$20 off", -20));

        let catalog = builder.build();

        assert!(catalog.property("Hotel Foobar").is_some());
        assert!(catalog.property("hotel foobar").is_none());
        assert!(catalog.property("Hotel Foobar ").is_none());
    }

    #[test]
    fn properties_are_listed_in_first_seen_order() {
        let mut builder = Catalog::builder();

        builder
            .add_offer("Zeta Inn", 90, march_rebate("a", -1))
            .add_offer("Alpha Lodge", 120, march_rebate("b", -2))
            .add_offer("Zeta Inn", 90, march_rebate("c", -3));

        let names: Vec<String> = builder
            .build()
            .properties()
            .into_iter()
            .map(|p| p.name().to_string())
            .collect();

        assert_eq!(names, ["Zeta Inn", "Alpha Lodge"]);
    }

    #[test]
    fn properties_snapshot_is_detached() {
        let mut builder = Catalog::builder();

        builder.add_offer("Hotel Foobar", 250, march_rebate("$20 off", -20));

        let catalog = builder.build();
        let mut snapshot = catalog.properties();

        snapshot.clear();

        assert_eq!(catalog.len(), 1);
        assert_eq!(catalog.properties().len(), 1);
    }

    #[test]
    fn find_best_value_for_unknown_property() {
        let catalog = Catalog::default();
        let quote = catalog.find_best_value("Nowhere", date(2016, 3, 10), 2);

        assert!(quote.property().is_none());
        assert_eq!(quote.offer(), &Offer::no_offer());
        assert_eq!(quote.check_in(), date(2016, 3, 10));
        assert_eq!(quote.nights(), 2);
        assert!(matches!(
            quote.final_price(),
            Err(QuoteError::UnknownProperty(name)) if name == "Nowhere"
        ));
    }

    #[test]
    fn find_best_value_selects_cheapest() -> TestResult {
        let mut builder = Catalog::builder();

        builder
            .add_offer("Hotel Foobar", 250, march_rebate("$20 off", -20))
            .add_offer("Hotel Foobar", 250, march_rebate("$60 off", -60))
            .add_offer(
                "Hotel Foobar",
                250,
                Offer::percent_rebate("10% off", -10, date(2016, 3, 1), date(2016, 3, 31)),
            );

        let quote = builder
            .build()
            .find_best_value("Hotel Foobar", date(2016, 3, 10), 2);

        // 500 - 60 = 440 vs 500 * 90 / 100 = 450
        assert_eq!(quote.offer().kind(), OfferKind::FlatRebate);
        assert_eq!(quote.final_price()?, 440);

        Ok(())
    }

    #[test]
    fn quote_uses_request_fields() -> TestResult {
        let mut builder = Catalog::builder();

        builder.add_offer("Hotel Foobar", 250, march_rebate("$20 off", -20));

        let catalog = builder.build();
        let request = StayRequest::new("Hotel Foobar", Some(date(2016, 3, 10)), 1)?;
        let quote = catalog.quote(&request);

        assert_eq!(quote.final_price()?, 230);

        Ok(())
    }

    #[test]
    fn source_lines_are_kept_verbatim() {
        let mut builder = Catalog::builder();

        builder
            .record_source_line("first line")
            .record_source_line("  second, line ");

        assert_eq!(builder.build().source_text(), "first line\n  second, line \n");
    }

    #[test]
    fn offer_count_spans_properties() {
        let mut builder = Catalog::builder();

        builder
            .add_offer("A", 10, march_rebate("a", -1))
            .add_offer("B", 10, march_rebate("b", -1))
            .add_offer("A", 10, march_rebate("c", -1));

        assert_eq!(builder.offer_count(), 3);
    }
}
