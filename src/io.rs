//! CSV ingestion and output for the feature table.

use std::fs::File;
use std::io::{Read, Write};
use std::path::Path;

use tracing::{debug, warn};

use crate::error::{FeatureError, Result};
use crate::game::{EnrichedGameRecord, FeatureRow, GameRecord, RawGameRow};

/// Columns every input file must carry.
pub const REQUIRED_COLUMNS: [&str; 17] = [
    "schedule_date",
    "schedule_season",
    "schedule_week",
    "schedule_playoff",
    "team_home",
    "score_home",
    "score_away",
    "team_away",
    "team_favorite_id",
    "spread_favorite",
    "over_under_line",
    "stadium",
    "stadium_neutral",
    "weather_temperature",
    "weather_wind_mph",
    "weather_humidity",
    "weather_detail",
];

/// Result of reading a source table.
#[derive(Debug, Default)]
pub struct Ingested {
    pub records: Vec<GameRecord>,
    /// Rows dropped in lenient mode, with the reason for each.
    pub rejected: Vec<FeatureError>,
}

/// Read games from CSV text with a header row.
///
/// Strict mode stops at the first malformed row. Lenient mode
/// (`skip_malformed`) logs each bad row and carries on. A missing
/// column fails the batch in either mode.
pub fn read_games<R: Read>(rdr: R, skip_malformed: bool) -> Result<Ingested> {
    let mut reader = csv::ReaderBuilder::new()
        .trim(csv::Trim::All)
        .from_reader(rdr);

    let headers = reader
        .headers()
        .map_err(|source| FeatureError::Csv { line: 1, source })?
        .clone();
    if let Some(missing) = REQUIRED_COLUMNS
        .iter()
        .find(|col| !headers.iter().any(|h| h == **col))
    {
        return Err(FeatureError::Malformed {
            line: 1,
            field: "header".to_string(),
            value: missing.to_string(),
        });
    }

    let mut ingested = Ingested::default();
    for result in reader.records() {
        let parsed = match result {
            Ok(record) => {
                let line = record.position().map(|p| p.line()).unwrap_or(0);
                record
                    .deserialize::<RawGameRow>(Some(&headers))
                    .map_err(|source| FeatureError::Csv { line, source })
                    .and_then(|raw| raw.into_record(line))
            }
            Err(source) => {
                let line = source.position().map(|p| p.line()).unwrap_or(0);
                Err(FeatureError::Csv { line, source })
            }
        };

        match parsed {
            Ok(game) => ingested.records.push(game),
            Err(e) if skip_malformed => {
                warn!(line = e.line().unwrap_or(0), error = %e, "skipping malformed row");
                ingested.rejected.push(e);
            }
            Err(e) => return Err(e),
        }
    }

    debug!(
        rows = ingested.records.len(),
        rejected = ingested.rejected.len(),
        "read source table"
    );
    Ok(ingested)
}

pub fn read_games_from_path(path: impl AsRef<Path>, skip_malformed: bool) -> Result<Ingested> {
    let file = File::open(path.as_ref())?;
    read_games(file, skip_malformed)
}

/// Write feature rows as CSV, header first. Returns the number of rows.
pub fn write_features<W: Write>(wtr: W, rows: &[EnrichedGameRecord]) -> Result<usize> {
    let mut writer = csv::Writer::from_writer(wtr);
    for (i, row) in rows.iter().enumerate() {
        writer
            .serialize(FeatureRow::from(row))
            .map_err(|source| FeatureError::Csv {
                line: i as u64 + 2,
                source,
            })?;
    }
    writer.flush()?;
    Ok(rows.len())
}

pub fn write_features_to_path(
    path: impl AsRef<Path>,
    rows: &[EnrichedGameRecord],
) -> Result<usize> {
    let file = File::create(path.as_ref())?;
    write_features(file, rows)
}

#[cfg(test)]
mod tests {
    use super::*;

    const KC_HOU: &str = "2020-09-10,2020,1,FALSE,KC,34,20,HOU,KC,-9.5,53.5,X,FALSE,,,,";

    fn table(rows: &[&str]) -> String {
        let mut data = REQUIRED_COLUMNS.join(",");
        for row in rows {
            data.push('\n');
            data.push_str(row);
        }
        data.push('\n');
        data
    }

    #[test]
    fn test_read_spreadspoke_row() {
        let data = table(&[
            "9/10/2020,2020,1,FALSE,Kansas City Chiefs,34,20,Houston Texans,KC,-9.5,53.5,\
             Arrowhead Stadium,FALSE,,,,",
        ]);
        let ingested = read_games(data.as_bytes(), false).unwrap();
        assert!(ingested.rejected.is_empty());
        let game = &ingested.records[0];
        assert_eq!(game.season, 2020);
        assert_eq!(game.home_score, Some(34));
        assert_eq!(game.spread, Some(-9.5));
        assert_eq!(game.is_playoff, Some(false));
        assert_eq!(game.temperature_f, None);
        assert_eq!(game.weather_detail, None);
    }

    #[test]
    fn test_missing_column_fails_batch() {
        let data = "schedule_date,schedule_season\n2020-09-10,2020\n";
        let err = read_games(data.as_bytes(), true).unwrap_err();
        assert!(matches!(err, FeatureError::Malformed { line: 1, .. }));
    }

    #[test]
    fn test_strict_mode_reports_line() {
        let data = table(&[
            KC_HOU,
            "2020-09-13,2020,1,FALSE,KC,ten,20,HOU,KC,-9.5,53.5,X,FALSE,,,,",
        ]);
        let err = read_games(data.as_bytes(), false).unwrap_err();
        assert_eq!(err.line(), Some(3));
    }

    #[test]
    fn test_lenient_mode_skips_bad_rows() {
        let data = table(&[
            KC_HOU,
            "2020-09-13,2020,1",
            "2020-09-14,2020,1,FALSE,KC,ten,20,HOU,KC,-9.5,53.5,X,FALSE,,,,",
        ]);
        let ingested = read_games(data.as_bytes(), true).unwrap();
        assert_eq!(ingested.records.len(), 1);
        assert_eq!(ingested.rejected.len(), 2);
    }

    #[test]
    fn test_write_header_and_nulls() {
        let game = GameRecord::new(2021, "KC", "BUF");
        let rows = vec![EnrichedGameRecord::from(game)];
        let mut out = Vec::new();
        assert_eq!(write_features(&mut out, &rows).unwrap(), 1);
        let text = String::from_utf8(out).unwrap();
        let mut lines = text.lines();
        let header = lines.next().unwrap();
        assert!(header.starts_with(&REQUIRED_COLUMNS.join(",")));
        assert!(header.ends_with("over_under_result,weather_condition,is_neutral_site"));
        assert_eq!(lines.next().unwrap(), ",2021,,,KC,,,BUF,,,,,,,,,,0,0,-1,-1,-1,0,,0,0,0");
    }
}
