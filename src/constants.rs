/// Version of the team catalog and index table below.
///
/// Bump whenever either table changes; downstream models are trained against
/// a specific index assignment.
pub const CATALOG_VERSION: u32 = 1;

/// Sentinel code for a missing favorite.
pub const UNKNOWN_CODE: &str = "UNK";

/// Canonical name for an unresolvable team.
pub const UNKNOWN_NAME: &str = "Unknown";

/// Code used by the source data for games with no favorite.
pub const PICK_CODE: &str = "PICK";

/// Canonical name for games with no favorite.
pub const PICK_NAME: &str = "Pick 'em";

/// Index returned for any name outside the canonical set.
pub const MISSING_INDEX: i32 = -1;

/// First season kept in the feature table.
pub const MIN_SEASON: i32 = 2020;

/// Largest score accepted at ingestion; anything above is a malformed cell.
pub const MAX_SCORE: i32 = 999;

/// Team code to canonical name.
pub const TEAM_CODES: [(&str, &str); 34] = [
    ("ARI", "Arizona Cardinals"),
    ("ATL", "Atlanta Falcons"),
    ("BAL", "Baltimore Ravens"),
    ("BUF", "Buffalo Bills"),
    ("CAR", "Carolina Panthers"),
    ("CHI", "Chicago Bears"),
    ("CIN", "Cincinnati Bengals"),
    ("CLE", "Cleveland Browns"),
    ("DAL", "Dallas Cowboys"),
    ("DEN", "Denver Broncos"),
    ("DET", "Detroit Lions"),
    ("GB", "Green Bay Packers"),
    ("HOU", "Houston Texans"),
    ("IND", "Indianapolis Colts"),
    ("JAX", "Jacksonville Jaguars"),
    ("KC", "Kansas City Chiefs"),
    ("LAC", "Los Angeles Chargers"),
    ("LAR", "Los Angeles Rams"),
    ("LV", "Las Vegas Raiders"),
    ("MIA", "Miami Dolphins"),
    ("MIN", "Minnesota Vikings"),
    ("NE", "New England Patriots"),
    ("NO", "New Orleans Saints"),
    ("NYG", "New York Giants"),
    ("NYJ", "New York Jets"),
    ("PHI", "Philadelphia Eagles"),
    ("PIT", "Pittsburgh Steelers"),
    ("SEA", "Seattle Seahawks"),
    ("SF", "San Francisco 49ers"),
    ("TB", "Tampa Bay Buccaneers"),
    ("TEN", "Tennessee Titans"),
    ("WAS", "Washington Commanders"),
    (PICK_CODE, PICK_NAME),
    (UNKNOWN_CODE, UNKNOWN_NAME),
];

/// Canonical name to model input index, dense over 0..34.
pub const TEAM_INDEX: [(&str, i32); 34] = [
    ("Arizona Cardinals", 0),
    ("Atlanta Falcons", 1),
    ("Baltimore Ravens", 2),
    ("Buffalo Bills", 3),
    ("Carolina Panthers", 4),
    ("Chicago Bears", 5),
    ("Cincinnati Bengals", 6),
    ("Cleveland Browns", 7),
    ("Dallas Cowboys", 8),
    ("Denver Broncos", 9),
    ("Detroit Lions", 10),
    ("Green Bay Packers", 11),
    ("Houston Texans", 12),
    ("Indianapolis Colts", 13),
    ("Jacksonville Jaguars", 14),
    ("Kansas City Chiefs", 15),
    ("Los Angeles Chargers", 16),
    ("Los Angeles Rams", 17),
    ("Las Vegas Raiders", 18),
    ("Miami Dolphins", 19),
    ("Minnesota Vikings", 20),
    ("New England Patriots", 21),
    ("New Orleans Saints", 22),
    ("New York Giants", 23),
    ("New York Jets", 24),
    ("Philadelphia Eagles", 25),
    ("Pittsburgh Steelers", 26),
    ("San Francisco 49ers", 27),
    ("Seattle Seahawks", 28),
    ("Tampa Bay Buccaneers", 29),
    ("Tennessee Titans", 30),
    ("Washington Commanders", 31),
    (PICK_NAME, 32),
    (UNKNOWN_NAME, 33),
];

/// Relocations, renames and legacy codes seen in the historical data.
///
/// Only consulted when aliases are enabled in the pipeline config.
pub const FRANCHISE_ALIASES: [(&str, &str); 17] = [
    ("OAK", "Las Vegas Raiders"),
    ("LVR", "Las Vegas Raiders"),
    ("Oakland Raiders", "Las Vegas Raiders"),
    ("Los Angeles Raiders", "Las Vegas Raiders"),
    ("SD", "Los Angeles Chargers"),
    ("San Diego Chargers", "Los Angeles Chargers"),
    ("STL", "Los Angeles Rams"),
    ("St. Louis Rams", "Los Angeles Rams"),
    ("WSH", "Washington Commanders"),
    ("Washington Redskins", "Washington Commanders"),
    ("Washington Football Team", "Washington Commanders"),
    ("Houston Oilers", "Tennessee Titans"),
    ("Tennessee Oilers", "Tennessee Titans"),
    ("Baltimore Colts", "Indianapolis Colts"),
    ("St. Louis Cardinals", "Arizona Cardinals"),
    ("Phoenix Cardinals", "Arizona Cardinals"),
    ("Boston Patriots", "New England Patriots"),
];

/// Weather tier bounds: (min temp, max temp, max wind, max humidity).
pub const GOOD_WEATHER: (i32, i32, i32, i32) = (60, 80, 10, 60);
pub const MODERATE_WEATHER: (i32, i32, i32, i32) = (50, 90, 20, 80);

/// Fill values for missing inputs, applied after classification.
pub const DEFAULT_TEMPERATURE_F: i32 = 70;
pub const DEFAULT_WIND_MPH: i32 = 5;
pub const DEFAULT_HUMIDITY_PCT: i32 = 50;
pub const DEFAULT_WEATHER_DETAIL: &str = "outdoor";
pub const DEFAULT_SPREAD: f64 = 0.0;
pub const DEFAULT_TOTAL_LINE: f64 = 0.0;
