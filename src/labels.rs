use crate::game::EnrichedGameRecord;

/// 1 if `score` strictly beats `other`. Ties and missing scores give 0.
pub fn win_label(score: Option<i32>, other: Option<i32>) -> u8 {
    match (score, other) {
        (Some(s), Some(o)) if s > o => 1,
        _ => 0,
    }
}

/// Set the home and away win/loss labels.
pub fn apply(row: &mut EnrichedGameRecord) {
    let home = row.game.home_score;
    let away = row.game.away_score;
    row.home_result = win_label(home, away);
    row.away_result = win_label(away, home);
}
