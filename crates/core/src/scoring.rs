//! Scoring module - elapsed-time formatting and final results
//!
//! Single-player rounds report moves taken and elapsed time; multi-player
//! rounds rank players by pairs collected, with a tie when several players
//! share the top score.

/// Format accumulated play time as `m:ss`, or `h:mm:ss` when hours > 0.
///
/// Minutes and seconds are zero-padded below 10 (the leading field is not).
pub fn format_elapsed(elapsed_ms: u64) -> String {
    let total_secs = elapsed_ms / 1000;
    let seconds = total_secs % 60;
    let minutes = (total_secs / 60) % 60;
    let hours = total_secs / 3600;

    if hours > 0 {
        format!("{}:{:02}:{:02}", hours, minutes, seconds)
    } else {
        format!("{}:{:02}", minutes, seconds)
    }
}

/// One player's final standing.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PlayerScore {
    /// Zero-based player index (display adds one).
    pub player: usize,
    /// Pairs collected.
    pub score: u32,
}

/// Whether the round produced a single winner or a shared top score.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameOutcome {
    Win,
    Tie,
}

/// Final multi-player results.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameResults {
    /// Players sorted by score descending; ties keep player order.
    pub ranking: Vec<PlayerScore>,
    pub max_score: u32,
    pub outcome: GameOutcome,
}

impl GameResults {
    /// Winner's player index (first of the ranking; meaningful for
    /// [`GameOutcome::Win`], arbitrary among the tied for a tie).
    pub fn winner(&self) -> Option<usize> {
        self.ranking.first().map(|p| p.player)
    }

    pub fn is_winner(&self, player: usize) -> bool {
        self.ranking
            .iter()
            .any(|p| p.player == player && p.score == self.max_score)
    }
}

/// Rank players by pairs collected.
pub fn compute_results(scores: &[u32]) -> GameResults {
    let mut ranking: Vec<PlayerScore> = scores
        .iter()
        .enumerate()
        .map(|(player, &score)| PlayerScore { player, score })
        .collect();
    // Stable sort: equal scores keep ascending player order.
    ranking.sort_by(|a, b| b.score.cmp(&a.score));

    let max_score = ranking.first().map(|p| p.score).unwrap_or(0);
    let top_count = ranking.iter().filter(|p| p.score == max_score).count();
    let outcome = if top_count > 1 {
        GameOutcome::Tie
    } else {
        GameOutcome::Win
    };

    GameResults {
        ranking,
        max_score,
        outcome,
    }
}
