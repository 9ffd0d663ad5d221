use crate::config::FillDefaults;
use crate::game::EnrichedGameRecord;

/// Set the neutral-site flag and fill missing source values.
///
/// Runs after weather classification, so filled weather never changes the tier
/// of the row it was filled into.
pub fn apply(row: &mut EnrichedGameRecord, fill: &FillDefaults) {
    row.is_neutral_site = u8::from(row.game.is_neutral_site == Some(true));

    let g = &mut row.game;
    g.temperature_f = g.temperature_f.or(Some(fill.temperature_f));
    g.wind_mph = g.wind_mph.or(Some(fill.wind_mph));
    g.humidity_pct = g.humidity_pct.or(Some(fill.humidity_pct));
    g.spread = g.spread.or(Some(fill.spread));
    g.total_line = g.total_line.or(Some(fill.total_line));
    if g.weather_detail.is_none() {
        g.weather_detail = Some(fill.weather_detail.clone());
    }
}

/// Keep rows from `min_season` onward, preserving order.
pub fn retain_seasons(rows: &mut Vec<EnrichedGameRecord>, min_season: i32) {
    rows.retain(|row| row.game.season >= min_season);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game::GameRecord;

    #[test]
    fn test_fills_only_missing_values() {
        let game = GameRecord::new(2021, "KC", "BUF")
            .with_line(Some("KC"), Some(-6.5), None)
            .with_weather(Some(28), None, None);
        let mut row = EnrichedGameRecord::from(game);
        apply(&mut row, &FillDefaults::default());

        let g = &row.game;
        assert_eq!(g.temperature_f, Some(28));
        assert_eq!(g.wind_mph, Some(5));
        assert_eq!(g.humidity_pct, Some(50));
        assert_eq!(g.spread, Some(-6.5));
        assert_eq!(g.total_line, Some(0.0));
        assert_eq!(g.weather_detail.as_deref(), Some("outdoor"));
    }

    #[test]
    fn test_existing_detail_kept() {
        let mut game = GameRecord::new(2021, "KC", "BUF");
        game.weather_detail = Some("DOME".to_string());
        let mut row = EnrichedGameRecord::from(game);
        apply(&mut row, &FillDefaults::default());
        assert_eq!(row.game.weather_detail.as_deref(), Some("DOME"));
    }

    #[test]
    fn test_neutral_site_flag() {
        let mut game = GameRecord::new(2021, "KC", "BUF");
        for (flag, expected) in [(Some(true), 1), (Some(false), 0), (None, 0)] {
            game.is_neutral_site = flag;
            let mut row = EnrichedGameRecord::from(game.clone());
            apply(&mut row, &FillDefaults::default());
            assert_eq!(row.is_neutral_site, expected);
            assert_eq!(row.game.is_neutral_site, flag);
        }
    }

    #[test]
    fn test_retain_seasons() {
        let mut rows: Vec<EnrichedGameRecord> = [2019, 2020, 2018, 2023]
            .into_iter()
            .map(|season| EnrichedGameRecord::from(GameRecord::new(season, "KC", "BUF")))
            .collect();
        retain_seasons(&mut rows, 2020);
        let seasons: Vec<i32> = rows.iter().map(|r| r.game.season).collect();
        assert_eq!(seasons, vec![2020, 2023]);
    }
}
