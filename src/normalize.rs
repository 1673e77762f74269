//! Path normalization: percent-decoding and identifier collapsing
//!
//! Raw request paths are full of high-cardinality identifiers (numeric
//! database ids, hex hashes and UUID blobs, proprietary OTRL reference
//! codes). Left alone they make every request unique, so each
//! identifier-shaped path segment is collapsed to the literal `[id]`
//! before counting. The heuristic is deliberately permissive: it can
//! over-match or under-match and that is accepted.

use std::borrow::Cow;

/// The replacement token for identifier-shaped segments
pub const ID_TOKEN: &str = "[id]";

/// A single segment-shape predicate
type SegmentMatcher = fn(&str) -> bool;

/// Hex string of length 20-64: hashes, UUID-like blobs, long hex ids
fn is_long_hex(segment: &str) -> bool {
    (20..=64).contains(&segment.len()) && segment.bytes().all(|b| b.is_ascii_hexdigit())
}

/// Purely numeric segment of any length
fn is_numeric(segment: &str) -> bool {
    !segment.is_empty() && segment.bytes().all(|b| b.is_ascii_digit())
}

/// Proprietary reference code: literal `OTRL` prefix plus 0-10 trailing
/// characters of any kind. Kept exactly this narrow; intent for other
/// id schemes is unknown.
fn is_otrl_code(segment: &str) -> bool {
    // The 0-10 bound counts characters, not bytes; decoded tails may be
    // multi-byte.
    segment
        .strip_prefix("OTRL")
        .is_some_and(|tail| tail.chars().count() <= 10)
}

/// Collapses identifier-shaped path segments to [`ID_TOKEN`]
///
/// Matchers are checked in order; the first hit replaces the whole
/// segment. `[id]` itself matches no form, so normalization is
/// idempotent.
#[derive(Debug, Clone)]
pub struct IdNormalizer {
    matchers: Vec<SegmentMatcher>,
}

impl Default for IdNormalizer {
    fn default() -> Self {
        Self::new()
    }
}

impl IdNormalizer {
    /// Normalizer with the standard matcher set: long-hex, numeric, OTRL
    pub fn new() -> Self {
        Self {
            matchers: vec![is_long_hex, is_numeric, is_otrl_code],
        }
    }

    fn is_identifier(&self, segment: &str) -> bool {
        self.matchers.iter().any(|m| m(segment))
    }

    /// Percent-decode `path`, then replace every identifier-shaped
    /// segment with `[id]`.
    ///
    /// Decoding happens before segmentation so that an encoded `%2F`
    /// becomes a real segment boundary. A decode failure (decoded bytes
    /// are not valid UTF-8) falls back to the raw path; it never aborts
    /// the run.
    pub fn normalize(&self, path: &str) -> String {
        let decoded = match urlencoding::decode(path) {
            Ok(decoded) => decoded,
            Err(_) => Cow::Borrowed(path),
        };
        self.normalize_decoded(&decoded)
    }

    /// Replace identifier-shaped segments in an already-decoded path
    pub fn normalize_decoded(&self, path: &str) -> String {
        path.split('/')
            .map(|segment| {
                if self.is_identifier(segment) {
                    ID_TOKEN
                } else {
                    segment
                }
            })
            .collect::<Vec<_>>()
            .join("/")
    }
}
