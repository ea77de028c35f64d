//! Value objects for transaction history
//!
//! Indexer JSON encodes several integers as strings (`"timeFirstSeen": "0"`),
//! and older fixtures mix both encodings. [`LenientU64`] accepts either and
//! falls back to zero, so a malformed record still has a total sort key.

use serde_with::{DefaultOnError, DisplayFromStr, PickFirst, Same};

/// Unix time in seconds.
pub type UnixSeconds = u64;

/// Block height.
pub type BlockHeight = u64;

/// Sentinel for "first-seen time unknown".
pub const UNKNOWN_TIME_FIRST_SEEN: UnixSeconds = 0;

/// `serde_as` encoding for an integer that may arrive as a JSON number or a
/// decimal string. Serializes as a decimal string, the way the indexer emits it.
///
/// Anything else (null, negative, fractional, garbage) decodes to `0`. Pair
/// with `#[serde(default)]` so a missing field also lands on zero.
pub type LenientU64 = DefaultOnError<PickFirst<(DisplayFromStr, Same)>>;

/// Like [`LenientU64`], but serializes as a JSON number.
pub type LenientNumericU64 = DefaultOnError<PickFirst<(Same, DisplayFromStr)>>;
