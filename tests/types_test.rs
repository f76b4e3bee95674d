//! Integration tests for season handling and record normalization

use nhl_stats::{
    core::{normalize, update_cols, RenameMap},
    season_list, FlatRecord, GameId, GameType, NhlError, Scalar, SeasonBound, SeasonId,
};

#[test]
fn test_season_list_from_start_years() {
    let seasons = season_list(SeasonBound::Year(2010), SeasonBound::Year(2012)).unwrap();
    let codes: Vec<String> = seasons.iter().map(|s| s.to_string()).collect();
    assert_eq!(codes, vec!["20102011", "20112012", "20122013"]);
}

#[test]
fn test_season_list_from_full_ids() {
    let start: SeasonBound = "20152016".parse().unwrap();
    let end: SeasonBound = "20172018".parse().unwrap();
    let seasons = season_list(start, end).unwrap();
    assert_eq!(
        seasons,
        vec![SeasonId::new(2015), SeasonId::new(2016), SeasonId::new(2017)]
    );
}

#[test]
fn test_season_list_edges() {
    let single = season_list(SeasonBound::Year(2019), SeasonBound::Year(2019)).unwrap();
    assert_eq!(single, vec![SeasonId::new(2019)]);

    let reversed = season_list(SeasonBound::Year(2019), SeasonBound::Year(2015)).unwrap();
    assert!(reversed.is_empty());

    let mixed = season_list(SeasonBound::Year(2015), "20182019".parse().unwrap());
    assert!(matches!(mixed, Err(NhlError::MixedSeasonBounds { .. })));
}

#[test]
fn test_invalid_seasons_rejected() {
    for bad in ["19", "2019202", "20192021", "2019-2020", ""] {
        assert!(bad.parse::<SeasonBound>().is_err(), "{bad:?} should not parse");
    }
}

#[test]
fn test_game_id_layout() {
    let game: GameId = "2019030415".parse().unwrap();
    assert_eq!(game.season, SeasonId::new(2019));
    assert_eq!(game.game_type, GameType::Playoffs);
    assert_eq!(game.number.as_u16(), 415);
    assert_eq!(game.to_string(), "2019030415");
}

#[test]
fn test_rename_and_reorder() {
    let mut record = FlatRecord::new();
    record.insert("goals", 10i64);
    record.insert("assists", 5i64);
    record.insert("Player", "Alex Ovechkin");

    let table = normalize("Player Stats", &[record], &RenameMap::standard(), &["Player"]);
    assert_eq!(table.columns, vec!["Player", "Goals", "Assists"]);
    assert_eq!(table.cell(0, "Goals"), Some(&Scalar::Int(10)));
}

#[test]
fn test_update_cols_ignores_missing_first_columns() {
    let columns: Vec<String> = ["Wins", "Team"].iter().map(|s| s.to_string()).collect();
    assert_eq!(
        update_cols(&columns, &["Season", "Team"]),
        vec!["Team".to_string(), "Wins".to_string()]
    );
}
