//! Chronological history ordering
//!
//! Newest activity first: mempool txs ahead of mined ones, mempool txs by
//! first-seen time, mined txs by block height then first-seen time.
//! `slice::sort_by_key` is stable, so exact ties keep input order.

use crate::domain::entities::ChronikTx;
use std::cmp::Reverse;

/// Sort a flat history for display. The input is left untouched.
///
/// Never fails: a record without `block` or `timeFirstSeen` is treated as
/// unconfirmed with first-seen time `0`, i.e. the oldest mempool tx.
pub fn sort_tx_history(txs: &[ChronikTx]) -> Vec<ChronikTx> {
    // 1. Partition by confirmation state
    let (mut unconfirmed, mut confirmed): (Vec<ChronikTx>, Vec<ChronikTx>) =
        txs.iter().cloned().partition(|tx| !tx.is_confirmed());

    // 2. Unconfirmed: more recent timeFirstSeen first
    unconfirmed.sort_by_key(|tx| Reverse(tx.time_first_seen));

    // 3. Confirmed: higher blocks first, then more recent timeFirstSeen within a block
    confirmed.sort_by_key(|tx| {
        let height = tx.height().unwrap_or_default();
        Reverse((height, tx.time_first_seen))
    });

    // 4. Mempool txs are newer than any confirmed history
    unconfirmed.append(&mut confirmed);
    unconfirmed
}

/// Sort, then keep the `rendered_count` most recent records.
pub fn sort_and_trim_tx_history(txs: &[ChronikTx], rendered_count: usize) -> Vec<ChronikTx> {
    let mut sorted = sort_tx_history(txs);
    sorted.truncate(rendered_count);
    sorted
}
