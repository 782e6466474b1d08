use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// A jurisdiction-specific tax entry returned by the
/// [`TaxRateProvider`](crate::ports::TaxRateProvider).
///
/// The rate is a multiplier (`1.2` means the taxed amount is 120% of the net
/// amount), not a percentage.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TaxEntry {
    pub description: String,
    pub rate: Decimal,
}

impl TaxEntry {
    pub fn new(description: impl Into<String>, rate: Decimal) -> Self {
        Self {
            description: description.into(),
            rate,
        }
    }

    /// Applies this entry's rate to the whole net total, or `None` on overflow.
    pub fn apply(&self, net_total: Decimal) -> Option<Decimal> {
        self.rate.checked_mul(net_total)
    }
}

/// Sums [`TaxEntry::apply`] over every entry.
///
/// Each entry multiplies the entire net total independently and the results
/// are added, so three entries of `1.2` over `100` give `360`. Returns `None`
/// if any product or the running sum overflows.
pub fn gross_total(entries: &[TaxEntry], net_total: Decimal) -> Option<Decimal> {
    entries
        .iter()
        .try_fold(Decimal::ZERO, |total, entry| total.checked_add(entry.apply(net_total)?))
}
