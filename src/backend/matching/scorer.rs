/**
 * Match Scorer
 *
 * Ranks candidate profiles for a requester.
 *
 * # Algorithm
 *
 * Candidates must be `ACTIVE`, of the opposite gender, and not the requester.
 * Each candidate scores:
 *
 * - +3 when their location equals the requester's
 * - +1 for each of their first three interests found among the requester's
 *
 * Zero scores are dropped. The rest are sorted by score, highest first; the
 * sort is stable, so ties keep scan order. The list is cut at the limit.
 *
 * # Limitations
 *
 * Gender is binary in the stored data, and a requester without a gender
 * gets no matches. Scoring reads the whole `user` table on every
 * computation.
 */

use crate::backend::auth::users::UserDirectory;
use crate::backend::store::StoreResult;
use crate::shared::{UserProfile, MAX_MATCH_LIMIT};

pub const DEFAULT_MATCH_LIMIT: usize = MAX_MATCH_LIMIT;
const MAX_INTERESTS: usize = 3;
const LOCATION_SCORE: u32 = 3;

/// Score of `candidate` for `requester`, or `None` if it is not a match
pub fn score_candidate(requester: &UserProfile, candidate: &UserProfile) -> Option<u32> {
    let wanted = requester.gender?.opposite();
    if !candidate.is_active() || candidate.gender != Some(wanted) || candidate.email == requester.email {
        return None;
    }

    let mut score = 0;
    if requester.location.is_some() && candidate.location == requester.location {
        score += LOCATION_SCORE;
    }

    let interests = &requester.interests[..requester.interests.len().min(MAX_INTERESTS)];
    score += candidate
        .interests
        .iter()
        .take(MAX_INTERESTS)
        .filter(|interest| interests.contains(interest))
        .count() as u32;

    (score > 0).then_some(score)
}

/// Emails of the best candidates, best first
pub fn rank<'a>(
    requester: &UserProfile,
    candidates: impl IntoIterator<Item = &'a UserProfile>,
    limit: usize,
) -> Vec<String> {
    let mut scored: Vec<(u32, &str)> = candidates
        .into_iter()
        .filter_map(|candidate| {
            score_candidate(requester, candidate).map(|score| (score, candidate.email.as_str()))
        })
        .collect();

    scored.sort_by(|a, b| b.0.cmp(&a.0));
    scored
        .into_iter()
        .take(limit)
        .map(|(_, email)| email.to_string())
        .collect()
}

#[derive(Clone)]
pub struct MatchScorer {
    users: UserDirectory,
    limit: usize,
}

impl MatchScorer {
    pub fn new(users: UserDirectory, limit: usize) -> Self {
        Self { users, limit }
    }

    /// Ranked matches for `email`
    ///
    /// # Returns
    /// `None` if the requester has no profile
    pub async fn compute_matches(&self, email: &str) -> StoreResult<Option<Vec<String>>> {
        let Some(requester) = self.users.get(email).await? else {
            return Ok(None);
        };
        if requester.gender.is_none() {
            tracing::warn!("{} has no gender on their profile; no matches", email);
            return Ok(Some(Vec::new()));
        }

        let candidates = self.users.all().await?;
        let matches = rank(&requester, &candidates, self.limit);
        tracing::info!("Computed {} matches for {}", matches.len(), email);
        Ok(Some(matches))
    }
}
