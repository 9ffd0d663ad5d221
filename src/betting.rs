use crate::config::NullScorePolicy;
use crate::game::EnrichedGameRecord;
use crate::team::TeamCatalog;

/// Which side of the game the favorite was on.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum FavoriteSide {
    Home,
    Away,
    Neither,
}

pub fn favorite_side(favorite: &str, home: &str, away: &str) -> FavoriteSide {
    if favorite == home {
        FavoriteSide::Home
    } else if favorite == away {
        FavoriteSide::Away
    } else {
        FavoriteSide::Neither
    }
}

/// 1 if the favorite beat the spread.
///
/// A home favorite's margin is compared with the spread as recorded (signed),
/// an away favorite's margin with its magnitude. Missing scores never cover.
pub fn spread_covered(
    side: FavoriteSide,
    spread: Option<f64>,
    home_score: Option<i32>,
    away_score: Option<i32>,
) -> u8 {
    let (Some(spread), Some(home), Some(away)) = (spread, home_score, away_score) else {
        return 0;
    };
    let margin = i64::from(home) - i64::from(away);
    let covered = match side {
        FavoriteSide::Home => margin as f64 > spread,
        FavoriteSide::Away => (-margin) as f64 > spread.abs(),
        FavoriteSide::Neither => false,
    };
    u8::from(covered)
}

/// Combined score. A sum that does not fit an `i32` is treated as missing.
pub fn total_score(
    home: Option<i32>,
    away: Option<i32>,
    policy: NullScorePolicy,
) -> Option<i32> {
    match policy {
        NullScorePolicy::Propagate => home?.checked_add(away?),
        NullScorePolicy::Zero => home.unwrap_or(0).checked_add(away.unwrap_or(0)),
    }
}

/// 1 if the combined score went over the line; 0 when either is missing.
pub fn over_under_result(total: Option<i32>, line: Option<f64>) -> u8 {
    match (total, line) {
        (Some(total), Some(line)) => u8::from(f64::from(total) > line),
        _ => 0,
    }
}

/// Derive the betting-line features. Expects the favorite already resolved.
pub fn apply(row: &mut EnrichedGameRecord, catalog: &TeamCatalog, policy: NullScorePolicy) {
    let g = &row.game;
    let home = catalog.resolve_team(&g.home_team);
    let away = catalog.resolve_team(&g.away_team);
    let favorite = catalog.resolve_favorite(g.favorite_team_id.as_deref());

    let side = favorite_side(favorite, home, away);
    let covered = spread_covered(side, g.spread, g.home_score, g.away_score);
    let total = total_score(g.home_score, g.away_score, policy);
    let over = over_under_result(total, g.total_line);

    row.spread_covered = covered;
    row.total_score = total;
    row.over_under_result = over;
}
