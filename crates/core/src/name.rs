//! Human-readable document identifiers.

use core::fmt;

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use serde::{Deserialize, Serialize};

/// Identifier of a stored document, e.g. `SO-7K2M4QX1A`.
///
/// Assigned by the store on create and immutable afterwards. Name equality is
/// plain string equality; names are only unique within their entity kind.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct DocName(String);

impl DocName {
    pub fn new(value: impl Into<String>) -> Self {
        Self(value.into())
    }

    /// Placeholder carried by documents before the store assigns a real name.
    pub fn unassigned() -> Self {
        Self(String::new())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn is_assigned(&self) -> bool {
        !self.0.is_empty()
    }
}

impl fmt::Display for DocName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.0, f)
    }
}

impl From<&str> for DocName {
    fn from(value: &str) -> Self {
        Self(value.to_string())
    }
}

impl From<String> for DocName {
    fn from(value: String) -> Self {
        Self(value)
    }
}

/// Length of the random suffix after the `<PREFIX>-` part.
const SUFFIX_LEN: usize = 9;

const SUFFIX_ALPHABET: &[u8] = b"ABCDEFGHIJKLMNOPQRSTUVWXYZ0123456789";

/// Generates `<PREFIX>-<SUFFIX>` document names from an injectable PRNG.
///
/// Uniqueness is probabilistic (36^9 suffixes per kind); collisions are not
/// detected. A hardened rewrite would switch to a monotonic counter or UUIDs
/// and treat a collision as a hard error.
#[derive(Debug)]
pub struct NameGenerator {
    rng: StdRng,
}

impl NameGenerator {
    /// Entropy-seeded generator for production use.
    pub fn from_entropy() -> Self {
        Self {
            rng: StdRng::from_entropy(),
        }
    }

    /// Deterministic generator. Same seed, same name stream.
    pub fn seeded(seed: u64) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
        }
    }

    pub fn next_name(&mut self, prefix: &str) -> DocName {
        let mut name = String::with_capacity(prefix.len() + 1 + SUFFIX_LEN);
        name.push_str(prefix);
        name.push('-');
        for _ in 0..SUFFIX_LEN {
            let idx = self.rng.gen_range(0..SUFFIX_ALPHABET.len());
            name.push(SUFFIX_ALPHABET[idx] as char);
        }
        DocName(name)
    }
}

impl Default for NameGenerator {
    fn default() -> Self {
        Self::from_entropy()
    }
}
