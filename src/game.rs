use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::constants::MAX_SCORE;
use crate::error::{FeatureError, Result};
use crate::weather::WeatherCondition;

/// One historical game as read from the source table.
#[derive(Clone, Debug, PartialEq)]
pub struct GameRecord {
    pub date: Option<NaiveDate>,
    pub season: i32,
    pub week: String,
    pub is_playoff: Option<bool>,
    pub home_team: String,
    pub away_team: String,
    pub home_score: Option<i32>,
    pub away_score: Option<i32>,
    pub favorite_team_id: Option<String>,
    /// Point spread attached to the favorite, usually negative.
    pub spread: Option<f64>,
    pub total_line: Option<f64>,
    pub stadium: String,
    pub is_neutral_site: Option<bool>,
    pub temperature_f: Option<i32>,
    pub wind_mph: Option<i32>,
    pub humidity_pct: Option<i32>,
    pub weather_detail: Option<String>,
}

impl GameRecord {
    /// Minimal record for a season; everything nullable left empty.
    pub fn new(season: i32, home_team: &str, away_team: &str) -> Self {
        GameRecord {
            date: None,
            season,
            week: String::new(),
            is_playoff: None,
            home_team: home_team.to_string(),
            away_team: away_team.to_string(),
            home_score: None,
            away_score: None,
            favorite_team_id: None,
            spread: None,
            total_line: None,
            stadium: String::new(),
            is_neutral_site: None,
            temperature_f: None,
            wind_mph: None,
            humidity_pct: None,
            weather_detail: None,
        }
    }

    pub fn with_scores(mut self, home: Option<i32>, away: Option<i32>) -> Self {
        self.home_score = home;
        self.away_score = away;
        self
    }

    pub fn with_line(
        mut self,
        favorite: Option<&str>,
        spread: Option<f64>,
        total: Option<f64>,
    ) -> Self {
        self.favorite_team_id = favorite.map(str::to_string);
        self.spread = spread;
        self.total_line = total;
        self
    }

    pub fn with_weather(
        mut self,
        temp: Option<i32>,
        wind: Option<i32>,
        humidity: Option<i32>,
    ) -> Self {
        self.temperature_f = temp;
        self.wind_mph = wind;
        self.humidity_pct = humidity;
        self
    }
}

/// A game with every derived feature attached.
///
/// `game` keeps all raw fields; the finalizer overwrites the favorite with its
/// canonical name and fills missing weather and line values.
#[derive(Clone, Debug, PartialEq)]
pub struct EnrichedGameRecord {
    pub game: GameRecord,
    pub home_result: u8,
    pub away_result: u8,
    pub home_team_index: i32,
    pub away_team_index: i32,
    pub favorite_team_index: i32,
    pub spread_covered: u8,
    pub total_score: Option<i32>,
    pub over_under_result: u8,
    pub weather_condition: WeatherCondition,
    pub is_neutral_site: u8,
}

impl From<GameRecord> for EnrichedGameRecord {
    fn from(game: GameRecord) -> Self {
        EnrichedGameRecord {
            game,
            home_result: 0,
            away_result: 0,
            home_team_index: -1,
            away_team_index: -1,
            favorite_team_index: -1,
            spread_covered: 0,
            total_score: None,
            over_under_result: 0,
            weather_condition: WeatherCondition::Bad,
            is_neutral_site: 0,
        }
    }
}

/// Source row with every cell still as text. Empty cells arrive as `None`.
#[derive(Debug, Deserialize)]
pub(crate) struct RawGameRow {
    schedule_date: Option<String>,
    schedule_season: Option<String>,
    schedule_week: Option<String>,
    schedule_playoff: Option<String>,
    team_home: Option<String>,
    score_home: Option<String>,
    score_away: Option<String>,
    team_away: Option<String>,
    team_favorite_id: Option<String>,
    spread_favorite: Option<String>,
    over_under_line: Option<String>,
    stadium: Option<String>,
    stadium_neutral: Option<String>,
    weather_temperature: Option<String>,
    weather_wind_mph: Option<String>,
    weather_humidity: Option<String>,
    weather_detail: Option<String>,
}

impl RawGameRow {
    /// Parse the text cells into a typed record; `line` is used for errors.
    pub(crate) fn into_record(self, line: u64) -> Result<GameRecord> {
        let season = parse_int(line, "schedule_season", self.schedule_season.as_deref())?
            .ok_or_else(|| malformed(line, "schedule_season", ""))?;

        Ok(GameRecord {
            date: parse_date(line, "schedule_date", self.schedule_date.as_deref())?,
            season,
            week: self.schedule_week.unwrap_or_default(),
            is_playoff: parse_bool(line, "schedule_playoff", self.schedule_playoff.as_deref())?,
            home_team: self.team_home.unwrap_or_default(),
            away_team: self.team_away.unwrap_or_default(),
            home_score: parse_score(line, "score_home", self.score_home.as_deref())?,
            away_score: parse_score(line, "score_away", self.score_away.as_deref())?,
            favorite_team_id: non_empty(self.team_favorite_id),
            spread: parse_float(line, "spread_favorite", self.spread_favorite.as_deref())?,
            total_line: parse_float(line, "over_under_line", self.over_under_line.as_deref())?,
            stadium: self.stadium.unwrap_or_default(),
            is_neutral_site: parse_bool(line, "stadium_neutral", self.stadium_neutral.as_deref())?,
            temperature_f: parse_int(
                line,
                "weather_temperature",
                self.weather_temperature.as_deref(),
            )?,
            wind_mph: parse_int(line, "weather_wind_mph", self.weather_wind_mph.as_deref())?,
            humidity_pct: parse_int(line, "weather_humidity", self.weather_humidity.as_deref())?,
            weather_detail: non_empty(self.weather_detail),
        })
    }
}

/// Flat output row in column order: source columns then derived columns.
#[derive(Debug, Serialize)]
pub(crate) struct FeatureRow<'a> {
    schedule_date: Option<String>,
    schedule_season: i32,
    schedule_week: &'a str,
    schedule_playoff: Option<bool>,
    team_home: &'a str,
    score_home: Option<i32>,
    score_away: Option<i32>,
    team_away: &'a str,
    team_favorite_id: Option<&'a str>,
    spread_favorite: Option<f64>,
    over_under_line: Option<f64>,
    stadium: &'a str,
    stadium_neutral: Option<bool>,
    weather_temperature: Option<i32>,
    weather_wind_mph: Option<i32>,
    weather_humidity: Option<i32>,
    weather_detail: Option<&'a str>,
    team_home_result: u8,
    team_away_result: u8,
    team_home_index: i32,
    team_away_index: i32,
    team_favorite_index: i32,
    spread_covered: u8,
    total_score: Option<i32>,
    over_under_result: u8,
    weather_condition: u8,
    is_neutral_site: u8,
}

impl<'a> From<&'a EnrichedGameRecord> for FeatureRow<'a> {
    fn from(row: &'a EnrichedGameRecord) -> Self {
        let g = &row.game;
        FeatureRow {
            schedule_date: g.date.map(|d| d.format("%Y-%m-%d").to_string()),
            schedule_season: g.season,
            schedule_week: &g.week,
            schedule_playoff: g.is_playoff,
            team_home: &g.home_team,
            score_home: g.home_score,
            score_away: g.away_score,
            team_away: &g.away_team,
            team_favorite_id: g.favorite_team_id.as_deref(),
            spread_favorite: g.spread,
            over_under_line: g.total_line,
            stadium: &g.stadium,
            stadium_neutral: g.is_neutral_site,
            weather_temperature: g.temperature_f,
            weather_wind_mph: g.wind_mph,
            weather_humidity: g.humidity_pct,
            weather_detail: g.weather_detail.as_deref(),
            team_home_result: row.home_result,
            team_away_result: row.away_result,
            team_home_index: row.home_team_index,
            team_away_index: row.away_team_index,
            team_favorite_index: row.favorite_team_index,
            spread_covered: row.spread_covered,
            total_score: row.total_score,
            over_under_result: row.over_under_result,
            weather_condition: row.weather_condition.code(),
            is_neutral_site: row.is_neutral_site,
        }
    }
}

fn malformed(line: u64, field: &str, value: &str) -> FeatureError {
    FeatureError::Malformed {
        line,
        field: field.to_string(),
        value: value.to_string(),
    }
}

fn non_empty(value: Option<String>) -> Option<String> {
    value.filter(|v| !v.trim().is_empty())
}

fn cell(value: Option<&str>) -> Option<&str> {
    value.map(str::trim).filter(|v| !v.is_empty())
}

/// Integer cell; integral decimals such as `24.0` are accepted.
fn parse_int(line: u64, field: &str, value: Option<&str>) -> Result<Option<i32>> {
    let Some(v) = cell(value) else {
        return Ok(None);
    };
    if let Ok(n) = v.parse::<i32>() {
        return Ok(Some(n));
    }
    match v.parse::<f64>() {
        Ok(f) if f.fract() == 0.0 && f >= i32::MIN as f64 && f <= i32::MAX as f64 => {
            Ok(Some(f as i32))
        }
        _ => Err(malformed(line, field, v)),
    }
}

/// Score cell: an integer in `0..=MAX_SCORE`.
fn parse_score(line: u64, field: &str, value: Option<&str>) -> Result<Option<i32>> {
    match parse_int(line, field, value)? {
        Some(score) if !(0..=MAX_SCORE).contains(&score) => {
            Err(malformed(line, field, &score.to_string()))
        }
        score => Ok(score),
    }
}

fn parse_float(line: u64, field: &str, value: Option<&str>) -> Result<Option<f64>> {
    let Some(v) = cell(value) else {
        return Ok(None);
    };
    match v.parse::<f64>() {
        Ok(f) if f.is_finite() => Ok(Some(f)),
        _ => Err(malformed(line, field, v)),
    }
}

fn parse_bool(line: u64, field: &str, value: Option<&str>) -> Result<Option<bool>> {
    let Some(v) = cell(value) else {
        return Ok(None);
    };
    match v.to_ascii_lowercase().as_str() {
        "true" | "t" | "1" | "yes" => Ok(Some(true)),
        "false" | "f" | "0" | "no" => Ok(Some(false)),
        _ => Err(malformed(line, field, v)),
    }
}

fn parse_date(line: u64, field: &str, value: Option<&str>) -> Result<Option<NaiveDate>> {
    let Some(v) = cell(value) else {
        return Ok(None);
    };
    NaiveDate::parse_from_str(v, "%Y-%m-%d")
        .or_else(|_| NaiveDate::parse_from_str(v, "%m/%d/%Y"))
        .map(Some)
        .map_err(|_| malformed(line, field, v))
}
