use crate::constants::{GOOD_WEATHER, MODERATE_WEATHER};
use crate::game::EnrichedGameRecord;

/// Ordinal weather bucket fed to the model as 0, 1 or 2.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum WeatherCondition {
    Bad,
    Moderate,
    Good,
}

impl WeatherCondition {
    pub fn code(self) -> u8 {
        match self {
            WeatherCondition::Bad => 0,
            WeatherCondition::Moderate => 1,
            WeatherCondition::Good => 2,
        }
    }
}

fn within(bounds: (i32, i32, i32, i32), temp: i32, wind: i32, humidity: i32) -> bool {
    let (min_temp, max_temp, max_wind, max_humidity) = bounds;
    (min_temp..=max_temp).contains(&temp) && wind <= max_wind && humidity <= max_humidity
}

/// Classify raw weather readings. Any missing reading is `Bad`.
///
/// Tiers are checked best first; the first one whose bounds hold wins.
pub fn classify(temp: Option<i32>, wind: Option<i32>, humidity: Option<i32>) -> WeatherCondition {
    let (Some(t), Some(w), Some(h)) = (temp, wind, humidity) else {
        return WeatherCondition::Bad;
    };
    if within(GOOD_WEATHER, t, w, h) {
        WeatherCondition::Good
    } else if within(MODERATE_WEATHER, t, w, h) {
        WeatherCondition::Moderate
    } else {
        WeatherCondition::Bad
    }
}

/// Tier-1 bounds check, exposed for property tests on the tier ordering.
pub fn is_moderate_or_better(temp: i32, wind: i32, humidity: i32) -> bool {
    within(MODERATE_WEATHER, temp, wind, humidity)
}

pub fn apply(row: &mut EnrichedGameRecord) {
    let g = &row.game;
    row.weather_condition = classify(g.temperature_f, g.wind_mph, g.humidity_pct);
}
