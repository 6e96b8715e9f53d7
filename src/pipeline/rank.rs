//! Ordering - the final pipeline stage.

use std::collections::HashMap;

use crate::types::UserId;

/// Order user ids by descending score.
///
/// Ties are broken by ascending user id. The tie-break is an explicit part
/// of the contract so the output never depends on map iteration order.
pub fn rank_by_score(scores: &HashMap<UserId, u32>) -> Vec<UserId> {
    let mut ranking: Vec<(UserId, u32)> =
        scores.iter().map(|(&user_id, &score)| (user_id, score)).collect();
    ranking.sort_unstable_by(|a, b| b.1.cmp(&a.1).then_with(|| a.0.cmp(&b.0)));
    ranking.into_iter().map(|(user_id, _)| user_id).collect()
}
