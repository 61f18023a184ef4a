//! Offer Kinds

use std::{fmt, str::FromStr};

use serde::Deserialize;
use thiserror::Error;

/// Error returned when a catalog token does not name a known offer kind.
#[derive(Debug, Error, PartialEq, Eq)]
#[error("unknown offer kind: {0}")]
pub struct UnknownOfferKind(pub String);

/// The closed set of pricing rules an offer can carry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Deserialize)]
pub enum OfferKind {
    /// No discount; the guest pays the full nightly rate.
    #[serde(rename = "none")]
    NoOffer,

    /// A fixed amount added to the stay total (usually negative).
    #[serde(rename = "rebate")]
    FlatRebate,

    /// A fixed amount added to the stay total, for stays of three nights or more.
    #[serde(rename = "rebate_3plus")]
    FlatRebate3Plus,

    /// A percentage in `[-100, 0]` applied to the stay total.
    #[serde(rename = "pct")]
    PercentRebate,
}

impl OfferKind {
    /// Every kind, in catalog token order.
    pub const ALL: [OfferKind; 4] = [
        OfferKind::NoOffer,
        OfferKind::FlatRebate,
        OfferKind::FlatRebate3Plus,
        OfferKind::PercentRebate,
    ];

    /// Token used for this kind in catalog text.
    pub const fn token(self) -> &'static str {
        match self {
            OfferKind::NoOffer => "none",
            OfferKind::FlatRebate => "rebate",
            OfferKind::FlatRebate3Plus => "rebate_3plus",
            OfferKind::PercentRebate => "pct",
        }
    }

    /// Shortest stay, in nights, this kind of offer can apply to.
    pub const fn minimum_nights(self) -> u32 {
        match self {
            OfferKind::FlatRebate3Plus => 3,
            OfferKind::NoOffer | OfferKind::FlatRebate | OfferKind::PercentRebate => 1,
        }
    }
}

impl FromStr for OfferKind {
    type Err = UnknownOfferKind;

    fn from_str(token: &str) -> Result<Self, Self::Err> {
        OfferKind::ALL
            .into_iter()
            .find(|kind| kind.token() == token)
            .ok_or_else(|| UnknownOfferKind(token.to_string()))
    }
}

impl fmt::Display for OfferKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.token())
    }
}
