//! Payment-method frequency.

use tracing::debug;

use super::{tally, LabelCount};
use crate::dataset::Payment;

/// Count payments per payment type, most frequent first.
pub fn payment_method_frequency(payments: &[Payment]) -> Vec<LabelCount> {
    let counts = tally(payments.iter().map(|p| p.payment_type.as_str()));
    debug!(methods = counts.len(), "Computed payment method frequency");
    counts
}

/// The entry with the highest count; the first one wins a tie.
pub fn most_common(counts: &[LabelCount]) -> Option<&LabelCount> {
    counts.iter().fold(None, |best, candidate| match best {
        Some(b) if b.count >= candidate.count => Some(b),
        _ => Some(candidate),
    })
}
