use std::fs;

use nfl_features::io::{read_games, write_features};
use nfl_features::{
    build_features_csv, AliasMap, FeatureBuilder, FeatureError, NullScorePolicy, PipelineConfig,
    TeamCatalog, WeatherCondition,
};

const SOURCE: &str = "\
schedule_date,schedule_season,schedule_week,schedule_playoff,team_home,score_home,score_away,team_away,team_favorite_id,spread_favorite,over_under_line,stadium,stadium_neutral,weather_temperature,weather_wind_mph,weather_humidity,weather_detail
9/8/2019,2019,1,FALSE,Kansas City Chiefs,40,26,Jacksonville Jaguars,KC,-3.5,51.5,Arrowhead Stadium,FALSE,85,10,60,
9/10/2020,2020,1,FALSE,Kansas City Chiefs,34,20,Houston Texans,KC,-9.5,53.5,Arrowhead Stadium,FALSE,65,5,40,
9/13/2020,2020,1,FALSE,Washington Football Team,27,17,Philadelphia Eagles,PHI,-5.5,42.5,FedExField,FALSE,,,,
2/7/2021,2020,Superbowl,TRUE,Tampa Bay Buccaneers,31,9,Kansas City Chiefs,KC,-3.0,56.0,Raymond James Stadium,TRUE,,,,DOME
9/12/2021,2021,1,FALSE,Buffalo Bills,,,Pittsburgh Steelers,,,,Highmark Stadium,FALSE,72,11,55,
";

fn build(config: PipelineConfig) -> Vec<nfl_features::EnrichedGameRecord> {
    let ingested = read_games(SOURCE.as_bytes(), false).unwrap();
    FeatureBuilder::new(config).unwrap().build(&ingested.records)
}

#[test]
fn drops_seasons_before_2020() {
    let rows = build(PipelineConfig::default());
    assert_eq!(rows.len(), 4);
    assert!(rows.iter().all(|r| r.game.season >= 2020));
}

#[test]
fn opening_game_features() {
    let rows = build(PipelineConfig::default());
    let kc = &rows[0];
    assert_eq!((kc.home_result, kc.away_result), (1, 0));
    assert_eq!(kc.home_team_index, 15);
    assert_eq!(kc.away_team_index, 12);
    assert_eq!(kc.favorite_team_index, 15);
    assert_eq!(kc.game.favorite_team_id.as_deref(), Some("Kansas City Chiefs"));
    assert_eq!(kc.spread_covered, 1);
    assert_eq!(kc.total_score, Some(54));
    assert_eq!(kc.over_under_result, 1);
    assert_eq!(kc.weather_condition, WeatherCondition::Good);
}

#[test]
fn renamed_team_needs_aliases() {
    let rows = build(PipelineConfig::default());
    let was = &rows[1];
    assert_eq!(was.home_team_index, -1);
    assert_eq!(was.away_team_index, 25);
    // Away favorite lost, so no cover; missing weather classifies as bad then fills.
    assert_eq!(was.spread_covered, 0);
    assert_eq!(was.weather_condition, WeatherCondition::Bad);
    assert_eq!(was.game.temperature_f, Some(70));
    assert_eq!(was.game.weather_detail.as_deref(), Some("outdoor"));

    let mut config = PipelineConfig::default();
    config.aliases.builtin = true;
    let rows = build(config);
    assert_eq!(rows[1].home_team_index, 31);
}

#[test]
fn neutral_site_playoff_game() {
    let rows = build(PipelineConfig::default());
    let sb = &rows[2];
    assert_eq!(sb.game.week, "Superbowl");
    assert_eq!(sb.game.is_playoff, Some(true));
    assert_eq!(sb.is_neutral_site, 1);
    assert_eq!((sb.home_result, sb.away_result), (1, 0));
    assert_eq!(sb.spread_covered, 0);
    assert_eq!(sb.game.weather_detail.as_deref(), Some("DOME"));
}

#[test]
fn unplayed_game_defaults() {
    let rows = build(PipelineConfig::default());
    let game = &rows[3];
    assert_eq!((game.home_result, game.away_result), (0, 0));
    assert_eq!(game.favorite_team_index, 33);
    assert_eq!(game.total_score, None);
    assert_eq!(game.over_under_result, 0);
    assert_eq!(game.game.spread, Some(0.0));
    assert_eq!(game.game.total_line, Some(0.0));
    assert_eq!(game.weather_condition, WeatherCondition::Moderate);

    let rows = build(PipelineConfig {
        null_scores: NullScorePolicy::Zero,
        ..Default::default()
    });
    assert_eq!(rows[3].total_score, Some(0));
    assert_eq!(rows[3].over_under_result, 0);
}

#[test]
fn output_can_be_read_back() {
    let rows = build(PipelineConfig::default());
    let mut out = Vec::new();
    write_features(&mut out, &rows).unwrap();

    let reread = read_games(out.as_slice(), false).unwrap();
    assert_eq!(reread.records.len(), rows.len());
    for (original, again) in rows.iter().zip(&reread.records) {
        assert_eq!(&original.game, again);
    }

    // Complete rows come out the same on a second pass.
    let again = FeatureBuilder::default().build(&reread.records);
    let first = &rows[0];
    let second = &again[0];
    assert_eq!(first.spread_covered, second.spread_covered);
    assert_eq!(first.favorite_team_index, second.favorite_team_index);
    assert_eq!(first.weather_condition, second.weather_condition);
    assert_eq!(first.total_score, second.total_score);
}

#[test]
fn file_to_file_run() {
    let dir = std::env::temp_dir().join(format!("nfl_features_test_{}", std::process::id()));
    fs::create_dir_all(&dir).unwrap();
    let input = dir.join("scores.csv");
    let output = dir.join("features.csv");
    fs::write(&input, SOURCE).unwrap();

    let report = build_features_csv(&input, &output, &FeatureBuilder::default()).unwrap();
    assert_eq!(report.summary.input_rows, 5);
    assert_eq!(report.summary.output_rows, 4);
    assert!(report.rejected.is_empty());

    let written = fs::read_to_string(&output).unwrap();
    assert_eq!(written.lines().count(), 5);
    let header = written.lines().next().unwrap();
    assert!(header.ends_with(concat!(
        "team_home_result,team_away_result,team_home_index,team_away_index,",
        "team_favorite_index,spread_covered,total_score,over_under_result,",
        "weather_condition,is_neutral_site",
    )));

    fs::remove_dir_all(&dir).unwrap();
}

#[test]
fn alias_file_from_config() {
    let dir = std::env::temp_dir().join(format!("nfl_features_alias_{}", std::process::id()));
    fs::create_dir_all(&dir).unwrap();
    let aliases = dir.join("aliases.csv");
    let contents = "alias,canonical\nWashington Football Team,Washington Commanders\n";
    fs::write(&aliases, contents).unwrap();

    let mut config = PipelineConfig::default();
    config.aliases.file = Some(aliases);
    let rows = build(config);
    assert_eq!(rows[1].home_team_index, 31);

    fs::remove_dir_all(&dir).unwrap();
}

#[test]
fn out_of_range_scores_rejected() {
    let data = format!(
        "{}\n{}\n{}\n",
        SOURCE.lines().next().unwrap(),
        "9/10/2020,2020,1,FALSE,KC,2147483647,-5,HOU,KC,-9.5,53.5,X,FALSE,,,,",
        "9/11/2020,2020,1,FALSE,KC,24,1000,HOU,KC,-9.5,53.5,X,FALSE,,,,",
    );

    let err = read_games(data.as_bytes(), false).unwrap_err();
    assert!(matches!(err, FeatureError::Malformed { line: 2, .. }));

    let ingested = read_games(data.as_bytes(), true).unwrap();
    assert!(ingested.records.is_empty());
    assert_eq!(ingested.rejected.len(), 2);
    assert!(FeatureBuilder::default().build(&ingested.records).is_empty());
}

#[test]
fn bad_alias_target_rejected() {
    let mut map = AliasMap::new();
    let err = map
        .read_from_reader("Oilers,Houston Oilers\n".as_bytes())
        .unwrap_err();
    assert!(matches!(err, FeatureError::Alias { .. }));
    assert!(TeamCatalog::with_aliases(map).aliases().is_empty());
}
