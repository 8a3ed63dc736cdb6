//! Property-based tests for match ranking

use mulberry::backend::matching::rank;
use mulberry::shared::{Gender, UserProfile, UserStatus};
use proptest::prelude::*;

const LOCATIONS: [&str; 3] = ["NYC", "LA", "SF"];
const INTERESTS: [&str; 5] = ["hiking", "jazz", "chess", "tennis", "film"];

fn profile(email: String, male: bool, active: bool, location: usize, interests: Vec<usize>) -> UserProfile {
    let mut profile = UserProfile::pending(email, "hash".to_string());
    profile.gender = Some(if male { Gender::Male } else { Gender::Female });
    profile.status = if active { UserStatus::Active } else { UserStatus::Pending };
    profile.location = Some(LOCATIONS[location].to_string());
    profile.interests = interests.into_iter().map(|i| INTERESTS[i].to_string()).collect();
    profile
}

fn candidates() -> impl Strategy<Value = Vec<UserProfile>> {
    proptest::collection::vec(
        (
            any::<bool>(),
            any::<bool>(),
            0..LOCATIONS.len(),
            proptest::collection::vec(0..INTERESTS.len(), 0..4),
        ),
        0..20,
    )
    .prop_map(|rows| {
        rows.into_iter()
            .enumerate()
            .map(|(i, (male, active, location, interests))| {
                profile(format!("user{}@x.io", i), male, active, location, interests)
            })
            .collect()
    })
}

proptest! {
    #[test]
    fn test_ranked_matches_are_eligible(pool in candidates(), limit in 0usize..12) {
        let requester = profile("me@x.io".to_string(), false, true, 0, vec![0, 1, 2]);
        let ranked = rank(&requester, &pool, limit);

        prop_assert!(ranked.len() <= limit);
        for email in &ranked {
            let candidate = pool.iter().find(|p| &p.email == email).unwrap();
            prop_assert_eq!(candidate.gender, Some(Gender::Male));
            prop_assert_eq!(candidate.status, UserStatus::Active);
        }
    }

    #[test]
    fn test_ranking_is_deterministic(pool in candidates()) {
        let requester = profile("me@x.io".to_string(), true, true, 1, vec![1, 3]);
        prop_assert_eq!(rank(&requester, &pool, 10), rank(&requester, &pool, 10));
    }
}
