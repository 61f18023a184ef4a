//! Properties

use jiff::civil::Date;
use slotmap::new_key_type;
use smallvec::SmallVec;
use tracing::trace;

use crate::offers::Offer;

new_key_type! {
    /// Property Key
    pub struct PropertyKey;
}

/// A lodging property, its base nightly rate and its offers in configured order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Property {
    name: String,
    nightly_rate: i64,
    offers: SmallVec<[Offer; 4]>,
}

impl Property {
    /// Create a property with no offers.
    pub fn new(name: impl Into<String>, nightly_rate: i64) -> Self {
        Self {
            name: name.into(),
            nightly_rate,
            offers: SmallVec::new(),
        }
    }

    /// Create a property with the given offers, kept in order.
    pub fn with_offers(
        name: impl Into<String>,
        nightly_rate: i64,
        offers: impl IntoIterator<Item = Offer>,
    ) -> Self {
        Self {
            name: name.into(),
            nightly_rate,
            offers: offers.into_iter().collect(),
        }
    }

    /// Property name
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Base rate per night
    pub fn nightly_rate(&self) -> i64 {
        self.nightly_rate
    }

    /// Offers in configured order
    pub fn offers(&self) -> &[Offer] {
        &self.offers
    }

    /// Owned copy of the offers; changes to it do not touch the property.
    pub fn all_offers(&self) -> Vec<Offer> {
        self.offers.to_vec()
    }

    pub(crate) fn push_offer(&mut self, offer: Offer) {
        self.offers.push(offer);
    }

    /// Find the offer giving the lowest price for a stay.
    ///
    /// Offers are tried in configured order and only a strictly lower price
    /// replaces the current best, so the earliest of several equally priced
    /// offers wins. Returns [`Offer::no_offer`] when nothing qualifies.
    pub fn find_best_offer(&self, check_in: Date, nights: u32) -> Offer {
        self.best_offer(check_in, nights)
            .cloned()
            .unwrap_or_default()
    }

    /// Borrowing form of [`Property::find_best_offer`]; `None` when nothing qualifies.
    pub fn best_offer(&self, check_in: Date, nights: u32) -> Option<&Offer> {
        let mut best = None;
        let mut best_price = i64::MAX;

        for offer in &self.offers {
            if !offer.is_nights_applicable(nights) || !offer.is_date_applicable(check_in) {
                continue;
            }

            let price = offer.final_price(self.nightly_rate, nights);

            trace!(
                property = %self.name,
                offer = offer.promotional_text(),
                price,
                "candidate offer"
            );

            if price < best_price {
                best_price = price;
                best = Some(offer);
            }
        }

        best
    }
}
