use crate::game::EnrichedGameRecord;
use crate::team::TeamCatalog;

/// Resolve the favorite to its canonical name and attach team indices.
///
/// The favorite field is overwritten with the canonical name; home and away
/// keep their source spelling and are only resolved for the index lookup.
pub fn apply(row: &mut EnrichedGameRecord, catalog: &TeamCatalog) {
    let g = &row.game;
    let favorite = catalog.resolve_favorite(g.favorite_team_id.as_deref());
    let home_index = catalog.index_of(catalog.resolve_team(&g.home_team));
    let away_index = catalog.index_of(catalog.resolve_team(&g.away_team));
    let favorite_index = catalog.index_of(favorite);
    let favorite = favorite.to_string();

    row.game.favorite_team_id = Some(favorite);
    row.home_team_index = home_index;
    row.away_team_index = away_index;
    row.favorite_team_index = favorite_index;
}
