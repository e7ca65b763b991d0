//! Deterministic leaderboard construction.

use crate::domain::{LeaderboardEntry, UserStatsMap};

/// Rank every record: total points descending, ties broken by display name
/// ascending, then by `user_id` ascending.
///
/// The final key makes the order a total order over distinct identities, so
/// the output never depends on the map's iteration order. Pure and
/// idempotent: the same input always yields the same sequence.
pub fn build_leaderboard(stats: &UserStatsMap) -> Vec<LeaderboardEntry> {
    let mut entries: Vec<LeaderboardEntry> = stats
        .iter()
        .map(|(user_id, record)| LeaderboardEntry {
            rank: 0,
            user_id: user_id.clone(),
            stats: record.clone(),
        })
        .collect();

    entries.sort_by(|a, b| {
        b.stats
            .total_points
            .cmp(&a.stats.total_points)
            .then_with(|| a.stats.name.cmp(&b.stats.name))
            .then_with(|| a.user_id.cmp(&b.user_id))
    });

    for (index, entry) in entries.iter_mut().enumerate() {
        entry.rank = (index + 1) as u32;
    }

    entries
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::UserStats;

    fn stats_map(users: &[(&str, &str, u64)]) -> UserStatsMap {
        users
            .iter()
            .map(|(user_id, name, points)| {
                (
                    user_id.to_string(),
                    UserStats {
                        name: name.to_string(),
                        total_points: *points,
                        ..UserStats::default()
                    },
                )
            })
            .collect()
    }

    #[test]
    fn test_sorted_by_points_descending() {
        let stats = stats_map(&[("u1", "Ann", 30), ("u2", "Bob", 50), ("u3", "Cid", 10)]);

        let board = build_leaderboard(&stats);

        let points: Vec<u64> = board.iter().map(LeaderboardEntry::total_points).collect();
        assert_eq!(points, vec![50, 30, 10]);
        for pair in board.windows(2) {
            assert!(pair[0].total_points() >= pair[1].total_points());
        }
    }

    #[test]
    fn test_tie_broken_by_name_ascending() {
        let stats = stats_map(&[("u9", "Bob", 50), ("u3", "Amy", 50)]);

        let board = build_leaderboard(&stats);

        assert_eq!(board[0].name(), "Amy");
        assert_eq!(board[1].name(), "Bob");
    }

    #[test]
    fn test_shared_name_tie_broken_by_user_id() {
        let stats = stats_map(&[("u9", "Amy", 50), ("u3", "Amy", 50)]);

        let board = build_leaderboard(&stats);

        assert_eq!(board[0].user_id, "u3");
        assert_eq!(board[1].user_id, "u9");
    }

    #[test]
    fn test_ranks_are_one_based_and_sequential() {
        let stats = stats_map(&[("u1", "Ann", 30), ("u2", "Bob", 30), ("u3", "Cid", 30)]);

        let board = build_leaderboard(&stats);

        let ranks: Vec<u32> = board.iter().map(|e| e.rank).collect();
        assert_eq!(ranks, vec![1, 2, 3]);
    }

    #[test]
    fn test_idempotent_and_referentially_transparent() {
        let stats = stats_map(&[("u1", "Ann", 30), ("u2", "Bob", 50)]);

        assert_eq!(build_leaderboard(&stats), build_leaderboard(&stats));
    }

    #[test]
    fn test_empty_map_yields_empty_board() {
        assert!(build_leaderboard(&UserStatsMap::new()).is_empty());
    }

    #[test]
    fn test_entries_carry_full_stats_copies() {
        let mut stats = stats_map(&[("u1", "Ann", 30)]);
        stats
            .get_mut("u1")
            .unwrap()
            .badges
            .push("Content Creator".to_string());

        let board = build_leaderboard(&stats);

        assert_eq!(board[0].stats, stats["u1"]);
    }
}
