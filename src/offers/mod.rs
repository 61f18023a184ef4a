//! Offers
//!
//! A promotional rule: when it applies (stay length and check-in window) and
//! what the guest pays once it does.

use jiff::civil::Date;

pub mod kind;

pub use kind::{OfferKind, UnknownOfferKind};

/// Promotional text shown when nothing applies.
pub const NO_OFFER_TEXT: &str = "No deal available";

/// A single promotional pricing rule attached to a property.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Offer {
    kind: OfferKind,
    promotional_text: String,
    start_date: Date,
    end_date: Date,
    value: i64,
}

impl Offer {
    /// Create an offer of the given kind.
    ///
    /// Percentages outside `[-100, 0]` are stored as `100`, which doubles the
    /// stay total and keeps the offer from ever winning a comparison.
    pub fn new(
        kind: OfferKind,
        promotional_text: impl Into<String>,
        value: i64,
        start_date: Date,
        end_date: Date,
    ) -> Self {
        let value = match kind {
            OfferKind::NoOffer => 0,
            OfferKind::FlatRebate | OfferKind::FlatRebate3Plus => value,
            OfferKind::PercentRebate if (-100..=0).contains(&value) => value,
            OfferKind::PercentRebate => 100,
        };

        Self {
            kind,
            promotional_text: promotional_text.into(),
            start_date,
            end_date,
            value,
        }
    }

    /// Flat rebate applicable to any stay length.
    pub fn flat_rebate(
        promotional_text: impl Into<String>,
        amount: i64,
        start_date: Date,
        end_date: Date,
    ) -> Self {
        Self::new(
            OfferKind::FlatRebate,
            promotional_text,
            amount,
            start_date,
            end_date,
        )
    }

    /// Flat rebate applicable to stays of three nights or more.
    pub fn flat_rebate_three_plus(
        promotional_text: impl Into<String>,
        amount: i64,
        start_date: Date,
        end_date: Date,
    ) -> Self {
        Self::new(
            OfferKind::FlatRebate3Plus,
            promotional_text,
            amount,
            start_date,
            end_date,
        )
    }

    /// Percentage rebate on the stay total.
    pub fn percent_rebate(
        promotional_text: impl Into<String>,
        percent: i64,
        start_date: Date,
        end_date: Date,
    ) -> Self {
        Self::new(
            OfferKind::PercentRebate,
            promotional_text,
            percent,
            start_date,
            end_date,
        )
    }

    /// The "nothing applied" offer.
    ///
    /// Its window never expires and its price is always the undiscounted total,
    /// so every instance compares equal to every other.
    pub fn no_offer() -> Self {
        Self::new(OfferKind::NoOffer, NO_OFFER_TEXT, 0, Date::MIN, Date::MAX)
    }

    /// Return the offer kind.
    pub fn kind(&self) -> OfferKind {
        self.kind
    }

    /// Return whether this is the no-discount kind.
    pub fn is_no_offer(&self) -> bool {
        self.kind == OfferKind::NoOffer
    }

    /// Text shown to the guest for this offer.
    pub fn promotional_text(&self) -> &str {
        &self.promotional_text
    }

    /// First check-in date the offer covers.
    pub fn start_date(&self) -> Date {
        self.start_date
    }

    /// Last check-in date the offer covers.
    pub fn end_date(&self) -> Date {
        self.end_date
    }

    /// Shortest qualifying stay.
    pub fn minimum_nights(&self) -> u32 {
        self.kind.minimum_nights()
    }

    /// The configured value after normalisation: a rebate amount, a percentage,
    /// or `0` for the no-discount kind.
    pub fn value(&self) -> i64 {
        self.value
    }

    /// Return whether a stay of `nights` is long enough for this offer.
    pub fn is_nights_applicable(&self, nights: u32) -> bool {
        nights >= self.minimum_nights()
    }

    /// Return whether a check-in on `date` falls inside the offer window.
    ///
    /// Both bounds are inclusive. A window whose start is after its end covers
    /// nothing.
    pub fn is_date_applicable(&self, date: Date) -> bool {
        self.start_date <= date && date <= self.end_date
    }

    /// Return whether both the stay length and the check-in date qualify.
    pub fn is_applicable(&self, check_in: Date, nights: u32) -> bool {
        self.is_nights_applicable(nights) && self.is_date_applicable(check_in)
    }

    /// Price the guest pays for `nights` at `nightly_rate` with this offer applied.
    pub fn final_price(&self, nightly_rate: i64, nights: u32) -> i64 {
        let base = undiscounted_price(nightly_rate, nights);

        match self.kind {
            OfferKind::NoOffer => base,
            OfferKind::FlatRebate | OfferKind::FlatRebate3Plus => base.saturating_add(self.value),
            OfferKind::PercentRebate => base.saturating_mul(100 + self.value) / 100,
        }
    }
}

impl Default for Offer {
    fn default() -> Self {
        Self::no_offer()
    }
}

/// Stay total before any offer.
pub fn undiscounted_price(nightly_rate: i64, nights: u32) -> i64 {
    nightly_rate.saturating_mul(i64::from(nights))
}
