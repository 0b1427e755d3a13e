//! Property-based tests for pairing generation
//!
//! Uses proptest to verify properties that should hold for all rosters.

use std::collections::HashSet;

use proptest::prelude::*;
use secret_santa::pairing::{PairingError, PairingOptions, draw};

fn roster(min: usize, max: usize) -> impl Strategy<Value = Vec<String>> {
    prop::collection::hash_set("[A-Za-z]{1,12}", min..max)
        .prop_map(|set| set.into_iter().collect::<Vec<_>>())
}

proptest! {
    /// Nobody draws themselves
    #[test]
    fn no_fixed_points(names in roster(2, 40), seed in any::<u64>()) {
        let pairings = draw(&names, Some(seed), &PairingOptions::default()).unwrap();
        for pair in &pairings {
            prop_assert_ne!(&pair.giver, &pair.giftee);
        }
    }

    /// Givers, giftees and the roster are the same set
    #[test]
    fn mapping_is_a_bijection(names in roster(2, 40), seed in any::<u64>()) {
        let pairings = draw(&names, Some(seed), &PairingOptions::default()).unwrap();
        let input: HashSet<&str> = names.iter().map(String::as_str).collect();
        let givers: HashSet<&str> = pairings.givers().collect();
        let giftees: Vec<&str> = pairings.iter().map(|p| p.giftee.as_str()).collect();

        prop_assert_eq!(pairings.len(), names.len());
        prop_assert_eq!(&givers, &input);
        prop_assert_eq!(giftees.len(), input.len());
        prop_assert_eq!(giftees.into_iter().collect::<HashSet<_>>(), input);
    }

    /// A tiny retry budget still yields a valid draw
    #[test]
    fn capped_retries_stay_valid(names in roster(2, 12), seed in any::<u64>(), cap in 1u32..4) {
        let opts = PairingOptions { max_attempts: cap };
        let pairings = draw(&names, Some(seed), &opts).unwrap();
        prop_assert!(pairings.iter().all(|p| p.giver != p.giftee));
    }

    /// Fewer than two names never produces a mapping
    #[test]
    fn small_rosters_rejected(names in roster(0, 2), seed in any::<u64>()) {
        let err = draw(&names, Some(seed), &PairingOptions::default()).unwrap_err();
        prop_assert_eq!(err, PairingError::NotEnoughParticipants { found: names.len() });
    }
}
