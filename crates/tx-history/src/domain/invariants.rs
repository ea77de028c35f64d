//! Domain invariants for sorted transaction history
//!
//! Each check takes the displayed (sorted) history and returns `true` when
//! the invariant holds.

use super::entities::ChronikTx;
use std::collections::HashMap;

/// INVARIANT-1: Permutation
/// Sorting neither drops, adds, nor dedups records.
pub fn invariant_permutation(input: &[ChronikTx], output: &[ChronikTx]) -> bool {
    if input.len() != output.len() {
        return false;
    }

    let mut counts: HashMap<&str, i64> = HashMap::new();
    for tx in input {
        *counts.entry(tx.txid.as_str()).or_default() += 1;
    }
    for tx in output {
        *counts.entry(tx.txid.as_str()).or_default() -= 1;
    }

    counts.values().all(|&c| c == 0)
}

/// INVARIANT-2: Unconfirmed First
/// No unconfirmed record follows a confirmed one.
pub fn invariant_unconfirmed_first(history: &[ChronikTx]) -> bool {
    let first_confirmed = history
        .iter()
        .position(ChronikTx::is_confirmed)
        .unwrap_or(history.len());

    history[first_confirmed..].iter().all(ChronikTx::is_confirmed)
}

/// INVARIANT-3: Unconfirmed Recency
/// `timeFirstSeen` never increases across the unconfirmed prefix.
pub fn invariant_unconfirmed_non_increasing(history: &[ChronikTx]) -> bool {
    let unconfirmed: Vec<_> = history
        .iter()
        .filter(|tx| !tx.is_confirmed())
        .map(|tx| tx.time_first_seen)
        .collect();

    unconfirmed.windows(2).all(|w| w[0] >= w[1])
}

/// INVARIANT-4: Confirmed Recency
/// Height never increases across the confirmed suffix; within one height,
/// `timeFirstSeen` never increases.
pub fn invariant_confirmed_non_increasing(history: &[ChronikTx]) -> bool {
    let confirmed: Vec<_> = history
        .iter()
        .filter_map(|tx| tx.height().map(|h| (h, tx.time_first_seen)))
        .collect();

    confirmed.windows(2).all(|w| w[0] >= w[1])
}

/// All ordering invariants for one sort call.
pub fn check_all(input: &[ChronikTx], output: &[ChronikTx]) -> bool {
    invariant_permutation(input, output)
        && invariant_unconfirmed_first(output)
        && invariant_unconfirmed_non_increasing(output)
        && invariant_confirmed_non_increasing(output)
}
