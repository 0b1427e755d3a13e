//! Pairing generation
//!
//! Draws a derangement of the roster: every participant gives exactly one
//! gift, receives exactly one gift, and never draws their own name.
//!
//! The draw is rejection sampling over uniform shuffles. A permutation with
//! any fixed point is thrown away as a whole and the list is reshuffled, so
//! the accepted result is uniform over all derangements.
//!
//! # Examples
//!
//! ```
//! use rand::SeedableRng;
//! use rand::rngs::StdRng;
//! use secret_santa::pairing::{PairingOptions, generate_pairings};
//!
//! let names = vec!["Alice".to_string(), "Bob".to_string(), "Carol".to_string()];
//! let mut rng = StdRng::seed_from_u64(7);
//! let pairings = generate_pairings(&names, &mut rng, &PairingOptions::default()).unwrap();
//!
//! for pair in pairings.iter() {
//!     assert_ne!(pair.giver, pair.giftee);
//! }
//! ```

use std::collections::{HashMap, HashSet};

use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::{Rng, SeedableRng};
use serde::Serialize;
use thiserror::Error;

/// Smallest roster that admits a derangement
pub const MIN_PARTICIPANTS: usize = 2;

/// Default cap on reshuffles before falling back to a rotation
pub const DEFAULT_MAX_ATTEMPTS: u32 = 10_000;

/// Errors that can occur while drawing pairings
#[derive(Debug, Error, PartialEq, Eq)]
pub enum PairingError {
    /// Fewer than two participants
    #[error("not enough participants for Secret Santa: need at least 2, found {found}")]
    NotEnoughParticipants {
        /// Number of names supplied
        found: usize,
    },

    /// A caller-supplied mapping is not a derangement of its own keys
    #[error("invalid pairing mapping: {0}")]
    InvalidMapping(String),
}

/// Tuning for the reshuffle loop
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PairingOptions {
    /// Shuffles to try before using the rotate-by-one fallback.
    /// `0` means never give up.
    pub max_attempts: u32,
}

impl Default for PairingOptions {
    fn default() -> Self {
        Self {
            max_attempts: DEFAULT_MAX_ATTEMPTS,
        }
    }
}

/// One giver and the person they buy for
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Pair {
    /// Participant giving the gift
    pub giver: String,
    /// Participant receiving the gift
    pub giftee: String,
}

/// A completed draw.
///
/// There are no mutating methods: once built, the mapping is fixed for the
/// life of the value and worker threads can read it through a shared
/// reference without locking.
#[derive(Debug, Clone)]
pub struct Pairings {
    pairs: Vec<Pair>,
    index: HashMap<String, usize>,
}

impl Pairings {
    fn from_pairs(pairs: Vec<Pair>) -> Self {
        let mut index = HashMap::with_capacity(pairs.len());
        for (i, pair) in pairs.iter().enumerate() {
            index.entry(pair.giver.clone()).or_insert(i);
        }
        Self { pairs, index }
    }

    /// Pair `names[i]` with `names[order[i]]`
    fn from_permutation(names: &[String], order: &[usize]) -> Self {
        let pairs = names
            .iter()
            .zip(order)
            .map(|(giver, &j)| Pair {
                giver: giver.clone(),
                giftee: names[j].clone(),
            })
            .collect();
        Self::from_pairs(pairs)
    }

    /// Everyone gives to the next person in roster order; the last gives to
    /// the first.
    #[must_use]
    pub fn rotation(names: &[String]) -> Self {
        let order: Vec<usize> = (0..names.len()).map(|i| (i + 1) % names.len()).collect();
        Self::from_permutation(names, &order)
    }

    /// Build pairings from an existing giver → giftee map.
    ///
    /// The map must have at least two entries, no self-pairing, and its
    /// values must be exactly its keys. Pairs are ordered by giver.
    pub fn from_map(map: HashMap<String, String>) -> Result<Self, PairingError> {
        if map.len() < MIN_PARTICIPANTS {
            return Err(PairingError::NotEnoughParticipants { found: map.len() });
        }

        if let Some(giver) = map.iter().find(|(giver, giftee)| giver == giftee).map(|(g, _)| g) {
            return Err(PairingError::InvalidMapping(format!("{giver} is paired with themselves")));
        }

        let givers: HashSet<&String> = map.keys().collect();
        let giftees: HashSet<&String> = map.values().collect();
        if givers != giftees {
            return Err(PairingError::InvalidMapping(
                "giftees must be the same set of people as givers".to_string(),
            ));
        }

        let mut pairs: Vec<Pair> =
            map.into_iter().map(|(giver, giftee)| Pair { giver, giftee }).collect();
        pairs.sort_by(|a, b| a.giver.cmp(&b.giver));
        Ok(Self::from_pairs(pairs))
    }

    /// Who `giver` buys for, if they are in the draw
    #[must_use]
    pub fn giftee_for(&self, giver: &str) -> Option<&str> {
        self.index.get(giver).map(|&i| self.pairs[i].giftee.as_str())
    }

    /// Whether `giver` is part of the draw
    #[must_use]
    pub fn contains(&self, giver: &str) -> bool {
        self.index.contains_key(giver)
    }

    /// Number of pairs
    #[must_use]
    pub fn len(&self) -> usize {
        self.pairs.len()
    }

    /// Whether the draw is empty (never true for a generated draw)
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.pairs.is_empty()
    }

    /// Pairs in roster order
    pub fn iter(&self) -> impl Iterator<Item = &Pair> {
        self.pairs.iter()
    }

    /// Givers in roster order
    pub fn givers(&self) -> impl Iterator<Item = &str> {
        self.pairs.iter().map(|p| p.giver.as_str())
    }
}

impl<'a> IntoIterator for &'a Pairings {
    type Item = &'a Pair;
    type IntoIter = std::slice::Iter<'a, Pair>;

    fn into_iter(self) -> Self::IntoIter {
        self.pairs.iter()
    }
}

fn is_derangement(order: &[usize]) -> bool {
    order.iter().enumerate().all(|(i, &j)| i != j)
}

/// Draw pairings using the supplied random source.
///
/// Fixed points are checked by roster position, so a roster with repeated
/// names still terminates.
pub fn generate_pairings<R: Rng + ?Sized>(
    names: &[String],
    rng: &mut R,
    options: &PairingOptions,
) -> Result<Pairings, PairingError> {
    if names.len() < MIN_PARTICIPANTS {
        return Err(PairingError::NotEnoughParticipants { found: names.len() });
    }

    let mut order: Vec<usize> = (0..names.len()).collect();
    let mut attempts: u32 = 0;

    loop {
        if options.max_attempts != 0 && attempts >= options.max_attempts {
            log::warn!(
                "no derangement after {attempts} shuffle(s), falling back to rotate-by-one"
            );
            return Ok(Pairings::rotation(names));
        }
        attempts += 1;

        order.shuffle(rng);
        if is_derangement(&order) {
            log::debug!("drew {} pair(s) in {attempts} shuffle(s)", names.len());
            return Ok(Pairings::from_permutation(names, &order));
        }
    }
}

/// Draw pairings from a seeded generator, or from OS entropy when `seed` is
/// `None`.
pub fn draw(
    names: &[String],
    seed: Option<u64>,
    options: &PairingOptions,
) -> Result<Pairings, PairingError> {
    let mut rng = match seed {
        Some(seed) => {
            log::debug!("using fixed seed {seed}");
            StdRng::seed_from_u64(seed)
        },
        None => StdRng::from_os_rng(),
    };
    generate_pairings(names, &mut rng, options)
}
