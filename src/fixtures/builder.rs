//! Catalog Text Builder
//!
//! Writes catalog lines for tests. Each setter changes the current row; calling
//! [`CatalogTextBuilder::new_line`] commits it and starts the next row with the
//! same values, so a multi-row catalog only spells out what changes.

use jiff::civil::{Date, date};

use crate::{offers::OfferKind, records::FIELD_DELIMITER};

/// Default property name
pub const DEFAULT_PROPERTY: &str = "Test Hotel";

/// Default nightly rate
pub const DEFAULT_NIGHTLY_RATE: i64 = 25;

/// Default offer value
pub const DEFAULT_VALUE: i64 = -10;

/// Default promotional text
pub const DEFAULT_PROMO_TEXT: &str = "Exciting test promotional message!";

/// Builds catalog text one row at a time.
#[derive(Debug, Clone)]
pub struct CatalogTextBuilder {
    lines: Vec<String>,
    property: String,
    nightly_rate: i64,
    promo_text: String,
    value: i64,
    kind_token: String,
    start_date: Date,
    end_date: Date,
}

impl CatalogTextBuilder {
    /// A builder whose first row is a flat rebate for [`DEFAULT_PROPERTY`].
    ///
    /// The window starts on `start_date` and lasts a week.
    pub fn new(start_date: Date) -> Self {
        Self {
            lines: Vec::new(),
            property: DEFAULT_PROPERTY.to_string(),
            nightly_rate: DEFAULT_NIGHTLY_RATE,
            promo_text: DEFAULT_PROMO_TEXT.to_string(),
            value: DEFAULT_VALUE,
            kind_token: OfferKind::FlatRebate.token().to_string(),
            start_date,
            end_date: start_date.saturating_add(jiff::Span::new().days(7)),
        }
    }

    /// Set the property name
    #[must_use]
    pub fn property(mut self, name: &str) -> Self {
        name.clone_into(&mut self.property);
        self
    }

    /// Set the nightly rate
    #[must_use]
    pub fn nightly_rate(mut self, rate: i64) -> Self {
        self.nightly_rate = rate;
        self
    }

    /// Set the promotional text
    #[must_use]
    pub fn promo_text(mut self, text: &str) -> Self {
        text.clone_into(&mut self.promo_text);
        self
    }

    /// Set the offer value
    #[must_use]
    pub fn value(mut self, value: i64) -> Self {
        self.value = value;
        self
    }

    /// Set the offer kind
    #[must_use]
    pub fn kind(mut self, kind: OfferKind) -> Self {
        kind.token().clone_into(&mut self.kind_token);
        self
    }

    /// Set a raw kind token, which need not be a known kind.
    #[must_use]
    pub fn kind_token(mut self, token: &str) -> Self {
        token.clone_into(&mut self.kind_token);
        self
    }

    /// Set the first day of the window
    #[must_use]
    pub fn start_date(mut self, start: Date) -> Self {
        self.start_date = start;
        self
    }

    /// Set the last day of the window
    #[must_use]
    pub fn end_date(mut self, end: Date) -> Self {
        self.end_date = end;
        self
    }

    /// Set both ends of the window from calendar parts.
    #[must_use]
    pub fn window(self, start: (i16, i8, i8), end: (i16, i8, i8)) -> Self {
        self.start_date(date(start.0, start.1, start.2))
            .end_date(date(end.0, end.1, end.2))
    }

    /// Commit the current row and start another with the same values.
    #[must_use]
    pub fn new_line(mut self) -> Self {
        let line = self.record();

        self.lines.push(line);
        self
    }

    /// Add a line verbatim, e.g. a malformed one.
    #[must_use]
    pub fn raw_line(mut self, line: &str) -> Self {
        self.lines.push(line.to_string());
        self
    }

    /// Current row as a catalog line.
    pub fn record(&self) -> String {
        let delimiter = FIELD_DELIMITER.to_string();

        [
            self.property.clone(),
            self.nightly_rate.to_string(),
            self.promo_text.clone(),
            self.value.to_string(),
            self.kind_token.clone(),
            self.start_date.to_string(),
            self.end_date.to_string(),
        ]
        .join(&delimiter)
    }

    /// Committed rows followed by the current one, newline separated.
    pub fn build(&self) -> String {
        let mut lines = self.lines.clone();

        lines.push(self.record());
        lines.join("\n")
    }
}

#[cfg(test)]
mod tests {
    use testresult::TestResult;

    use crate::records::parse_record;

    use super::*;

    #[test]
    fn default_row_is_a_week_long_rebate() -> TestResult {
        let text = CatalogTextBuilder::new(date(2016, 3, 1)).build();

        assert_eq!(
            text,
            "Test Hotel,25,Exciting test promotional message!,-10,rebate,2016-03-01,2016-03-08"
        );

        let record = parse_record(&text)?;

        assert_eq!(record.offer.kind(), OfferKind::FlatRebate);

        Ok(())
    }

    #[test]
    fn new_line_carries_values_forward() {
        let text = CatalogTextBuilder::new(date(2016, 3, 1))
            .property("Hotel Foobar")
            .value(-50)
            .new_line()
            .value(-20)
            .kind(OfferKind::FlatRebate3Plus)
            .build();

        let lines: Vec<&str> = text.lines().collect();

        assert_eq!(lines.len(), 2);
        assert!(lines.iter().all(|line| line.starts_with("Hotel Foobar,25,")));
        assert!(text.contains(",-50,rebate,"));
        assert!(text.contains(",-20,rebate_3plus,"));
    }

    #[test]
    fn raw_line_is_kept_verbatim() {
        let text = CatalogTextBuilder::new(date(2016, 3, 1))
            .raw_line("not,a,record")
            .build();

        assert!(text.starts_with("not,a,record\n"));
    }

    #[test]
    fn window_sets_both_dates() {
        let text = CatalogTextBuilder::new(date(2016, 1, 1))
            .window((2016, 3, 7), (2016, 3, 15))
            .build();

        assert!(text.ends_with(",2016-03-07,2016-03-15"));
    }
}
