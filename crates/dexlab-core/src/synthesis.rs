//! Construction of a synthetic record from statistics of the table.

use dexlab_stats::descriptive;

use crate::{
    error::AnalysisError,
    query::{self, TOP_N},
    record::{Column, Record},
    table::Table,
};

/// Name fragment identifying the record whose types are copied.
const TYPE_DONOR: &str = "pikachu";

/// Types whose special attack ceiling is borrowed.
const SP_ATK_TYPES: [&str; 2] = ["Fire", "Dragon"];

/// Builds a new record whose attributes are drawn from `table`.
///
/// * id: one past the largest identifier
/// * types: copied from the first record whose name contains "pikachu"
///   (any case), else from the first record
/// * attack: attack of the fastest record
/// * defense: defense of `strongest`
/// * special attack: highest value among Fire or Dragon records, else the
///   table-wide highest
/// * special defense and speed: medians over the top ten of each column
/// * HP: `average_hp`
///
/// `total` is the sum of the six values above and is not derived from the
/// table's own totals.
pub fn synthesize_record(
    table: &Table,
    name: String,
    strongest: &Record,
    average_hp: f64,
) -> Result<Record, AnalysisError> {
    let first = table.records().first().ok_or(AnalysisError::EmptyTable)?;
    let id = match table.max_id() {
        Some(max_id) => max_id
            .checked_add(1)
            .ok_or(AnalysisError::IdOverflow { max_id })?,
        None => 0,
    };

    let donor = table
        .iter()
        .find(|r| r.name.to_lowercase().contains(TYPE_DONOR))
        .unwrap_or(first);

    let fastest =
        query::max_by_column(table, Column::Speed).ok_or(AnalysisError::NoValues {
            column: Column::Speed,
        })?;
    let attack = fastest.require(Column::Attack)?;
    let defense = strongest.require(Column::Defense)?;
    let sp_atk = special_attack_ceiling(table)?;
    let sp_def = top_n_median(table, Column::SpDef)?;
    let speed = top_n_median(table, Column::Speed)?;
    let hp = average_hp;
    let total = hp + attack + defense + sp_atk + sp_def + speed;

    tracing::debug!(id, %name, donor = %donor.name, fastest = %fastest.name, "synthesized record");

    Ok(Record {
        id,
        name,
        type1: donor.type1.clone(),
        type2: donor.type2.clone(),
        total: Some(total),
        hp: Some(hp),
        attack: Some(attack),
        defense: Some(defense),
        sp_atk: Some(sp_atk),
        sp_def: Some(sp_def),
        speed: Some(speed),
        extra: vec![],
    })
}

fn special_attack_ceiling(table: &Table) -> Result<f64, AnalysisError> {
    let typed = table
        .iter()
        .filter(|r| SP_ATK_TYPES.iter().any(|t| r.has_type(t)))
        .filter_map(|r| r.sp_atk)
        .reduce(f64::max);
    typed
        .or_else(|| table.values(Column::SpAtk).reduce(f64::max))
        .ok_or(AnalysisError::NoValues {
            column: Column::SpAtk,
        })
}

fn top_n_median(table: &Table, column: Column) -> Result<f64, AnalysisError> {
    let values = query::top_n(table, column, TOP_N)
        .into_iter()
        .filter_map(|r| r.value(column))
        .collect::<Vec<_>>();
    descriptive::median(&values).ok_or(AnalysisError::NoValues { column })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_util::{fixture_table, full_record};

    fn bulbasaur() -> Record {
        let stats = [318., 45., 49., 49., 65., 65., 45.];
        full_record(1, "Bulbasaur", "Grass", Some("Poison"), stats)
    }

    #[test]
    fn test_synthesize_from_fixture() {
        let table = fixture_table();
        let strongest = query::strongest(&table).unwrap().clone();
        let record = synthesize_record(&table, "Volt_CLAW".to_owned(), &strongest, 25.0).unwrap();

        assert_eq!(record.id, 151);
        assert_eq!(record.name, "Volt_CLAW");
        // types come from Pikachu
        assert_eq!(record.type1, "Electric");
        assert_eq!(record.type2, None);
        // Mewtwo Mega Y is fastest and strongest
        assert_eq!(record.attack, Some(150.0));
        assert_eq!(record.defense, Some(70.0));
        // Charizard Mega X is the only Fire/Dragon record
        assert_eq!(record.sp_atk, Some(130.0));
        // Sp. Def [65, 85, 50, 120] and Speed [45, 100, 90, 140]
        assert_eq!(record.sp_def, Some(75.0));
        assert_eq!(record.speed, Some(95.0));
        assert_eq!(record.hp, Some(25.0));
        assert_eq!(record.total, Some(25.0 + 150.0 + 70.0 + 130.0 + 75.0 + 95.0));
    }

    #[test]
    fn test_type_donor_falls_back_to_first_record() {
        let table = Table::new(vec![
            bulbasaur(),
            full_record(4, "Charmander", "Fire", None, [309., 39., 52., 43., 60., 50., 65.]),
        ]);
        let strongest = table.records()[0].clone();
        let record = synthesize_record(&table, "Ice".to_owned(), &strongest, 42.0).unwrap();
        assert_eq!(record.type1, "Grass");
        assert_eq!(record.type2.as_deref(), Some("Poison"));
        assert_eq!(record.id, 5);
        assert_eq!(record.attack, Some(52.0));
        assert_eq!(record.defense, Some(49.0));
        assert_eq!(record.sp_atk, Some(60.0));
    }

    #[test]
    fn test_type_donor_match_ignores_case() {
        let table = Table::new(vec![
            bulbasaur(),
            full_record(
                25,
                "PIKACHU_LIBRE",
                "Electric",
                Some("Fighting"),
                [430., 45., 80., 40., 95., 60., 110.],
            ),
        ]);
        let strongest = table.records()[1].clone();
        let record = synthesize_record(&table, "Volt".to_owned(), &strongest, 45.0).unwrap();
        assert_eq!(record.type1, "Electric");
        assert_eq!(record.type2.as_deref(), Some("Fighting"));
    }

    #[test]
    fn test_special_attack_without_fire_or_dragon_uses_table_max() {
        let table = Table::new(vec![
            bulbasaur(),
            full_record(7, "Squirtle", "Water", None, [314., 44., 48., 65., 50., 64., 43.]),
        ]);
        let strongest = table.records()[0].clone();
        let record = synthesize_record(&table, "Water".to_owned(), &strongest, 44.5).unwrap();
        assert_eq!(record.sp_atk, Some(65.0));
    }

    #[test]
    fn test_synthesize_on_empty_table() {
        let table = Table::default();
        let strongest = full_record(1, "A", "Normal", None, [1., 1., 1., 1., 1., 1., 1.]);
        assert!(matches!(
            synthesize_record(&table, "X".to_owned(), &strongest, 1.0),
            Err(AnalysisError::EmptyTable)
        ));
    }

    #[test]
    fn test_largest_id_cannot_be_incremented() {
        let mut record = bulbasaur();
        record.id = u32::MAX;
        let table = Table::new(vec![record.clone()]);
        assert!(matches!(
            synthesize_record(&table, "X".to_owned(), &record, 45.0),
            Err(AnalysisError::IdOverflow { max_id: u32::MAX })
        ));
    }

    #[test]
    fn test_strongest_without_defense_fails() {
        let table = fixture_table();
        let mut strongest = query::strongest(&table).unwrap().clone();
        strongest.defense = None;
        assert!(matches!(
            synthesize_record(&table, "X".to_owned(), &strongest, 25.0),
            Err(AnalysisError::MissingValue {
                column: Column::Defense,
                ..
            })
        ));
    }
}
