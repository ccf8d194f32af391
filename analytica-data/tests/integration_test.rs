//! Integration tests for state loading using the SQLite backend.

use analytica_core::calculations::{analyze_move, estimate_moving_impact};
use analytica_core::{
    FieldWarningReason, ImpactWarning, LetterGrade, MinimumWage, MovingInputs, MovingRequest,
    PoliticalLeaning, StateProvider, Verdict,
};
use analytica_data::{StateRecordLoader, StateRecordLoaderError};
use analytica_db_sqlite::SqliteStateRepository;
use pretty_assertions::assert_eq;
use rust_decimal_macros::dec;
use sqlx::sqlite::SqlitePoolOptions;

const TEST_CSV: &str = include_str!("../test-data/states.csv");
const TEST_JSON: &str = include_str!("../test-data/states.json");

async fn setup_test_db() -> SqliteStateRepository {
    let pool = SqlitePoolOptions::new()
        .max_connections(1)
        .connect("sqlite::memory:")
        .await
        .expect("Failed to create in-memory database");

    let repo = SqliteStateRepository::new_with_pool(pool);
    repo.run_migrations()
        .await
        .expect("Failed to run migrations");

    repo
}

async fn load_csv(repo: &SqliteStateRepository) -> analytica_data::LoadSummary {
    let records = StateRecordLoader::parse_csv(TEST_CSV.as_bytes()).expect("Failed to parse CSV");
    StateRecordLoader::load(repo, records)
        .await
        .expect("Failed to load states")
}

#[tokio::test]
async fn test_load_all_csv_states() {
    let repo = setup_test_db().await;

    let summary = load_csv(&repo).await;

    assert_eq!(summary.loaded, 6);
    let names: Vec<_> = repo
        .list_states()
        .await
        .unwrap()
        .into_iter()
        .map(|s| s.name)
        .collect();
    assert_eq!(
        names,
        vec!["Atlantis", "California", "Florida", "Ohio", "Texas", "Wyoming"]
    );
}

#[tokio::test]
async fn test_load_reports_degraded_fields() {
    let repo = setup_test_db().await;

    let summary = load_csv(&repo).await;

    assert!(summary.warnings.iter().all(|w| w.state == "Atlantis"));
    let fields: Vec<_> = summary.warnings.iter().map(|w| (w.field, w.reason)).collect();
    assert_eq!(
        fields,
        vec![
            ("MedianHomePrice", FieldWarningReason::InvalidNumber),
            ("SalesTax", FieldWarningReason::Missing),
            ("Population", FieldWarningReason::InvalidNumber),
            ("MinimumWage", FieldWarningReason::InvalidNumber),
            ("Abortion", FieldWarningReason::UnrecognizedGrade),
            ("PoliticalLeaning", FieldWarningReason::UnrecognizedLeaning),
        ]
    );

    let atlantis = repo.get_state("Atlantis").await.unwrap();
    assert_eq!(atlantis.median_home_price, dec!(0));
    assert_eq!(atlantis.population, 0);
    assert_eq!(atlantis.minimum_wage, MinimumWage::Amount(dec!(0)));
    assert_eq!(atlantis.abortion, None);
    assert_eq!(atlantis.gun_laws, Some(LetterGrade::F));
    assert_eq!(atlantis.political_leaning, None);
}

#[tokio::test]
async fn test_load_and_retrieve_typed_profile() {
    let repo = setup_test_db().await;
    load_csv(&repo).await;

    let california = repo.get_state("California").await.unwrap();

    assert_eq!(california.income_tax, dec!(13.3));
    assert_eq!(california.sales_tax, dec!(7.25));
    assert_eq!(california.cost_of_living, dec!(151.7));
    assert_eq!(california.population, 39_029_342);
    assert_eq!(california.minimum_wage, MinimumWage::Amount(dec!(16.00)));
    assert_eq!(california.abortion, Some(LetterGrade::APlus));
    assert_eq!(california.political_leaning, Some(PoliticalLeaning::DarkBlue));

    let texas = repo.get_state("Texas").await.unwrap();
    assert_eq!(texas.minimum_wage, MinimumWage::NoStateLaw);
}

#[tokio::test]
async fn test_load_is_idempotent() {
    let repo = setup_test_db().await;
    load_csv(&repo).await;
    let before = repo.list_states().await.unwrap();

    let summary = load_csv(&repo).await;

    assert_eq!(summary.loaded, 6);
    assert_eq!(repo.list_states().await.unwrap(), before);
}

#[tokio::test]
async fn test_json_and_csv_produce_same_profiles() {
    let csv_repo = setup_test_db().await;
    load_csv(&csv_repo).await;

    let json_repo = setup_test_db().await;
    let records = StateRecordLoader::parse_json(TEST_JSON.as_bytes()).expect("Failed to parse JSON");
    let summary = StateRecordLoader::load(&json_repo, records)
        .await
        .expect("Failed to load states");

    assert_eq!(summary.loaded, 2);
    assert!(summary.warnings.is_empty());
    for name in ["California", "Texas"] {
        assert_eq!(
            json_repo.get_state(name).await.unwrap(),
            csv_repo.get_state(name).await.unwrap()
        );
    }
}

#[tokio::test]
async fn test_loaded_states_reproduce_reference_estimate() {
    let repo = setup_test_db().await;
    load_csv(&repo).await;
    let states = repo.list_states().await.unwrap();

    let analysis = analyze_move(
        &states,
        &MovingRequest {
            from_state: "California".to_string(),
            to_state: "Texas".to_string(),
            inputs: MovingInputs::default(),
            preferences: Default::default(),
        },
    )
    .unwrap();

    let rounded = analysis.estimate.breakdown.rounded();
    assert_eq!(rounded.income_tax, dec!(7261.80));
    assert_eq!(rounded.sales_tax, dec!(420.00));
    assert_eq!(rounded.property_tax, dec!(-1780.00));
    assert_eq!(rounded.cost_of_living, dec!(33334.21));
    assert_eq!(rounded.total, dec!(39236.01));
    assert_eq!(analysis.verdicts.minimum_wage, Verdict::Neutral);
    assert_eq!(analysis.verdicts.political_leaning, Verdict::Better);
}

#[tokio::test]
async fn test_zero_cost_of_living_origin_warns() {
    let repo = setup_test_db().await;
    load_csv(&repo).await;
    let atlantis = repo.get_state("Atlantis").await.unwrap();
    let ohio = repo.get_state("Ohio").await.unwrap();

    let estimate = estimate_moving_impact(&atlantis, &ohio, &MovingInputs::default()).unwrap();

    assert_eq!(estimate.breakdown.cost_of_living, dec!(0));
    assert_eq!(
        estimate.warnings,
        vec![ImpactWarning::ZeroCostOfLivingIndex {
            state: "Atlantis".to_string()
        }]
    );
}

#[tokio::test]
async fn test_load_without_migrations_fails() {
    let pool = SqlitePoolOptions::new()
        .max_connections(1)
        .connect("sqlite::memory:")
        .await
        .expect("Failed to create in-memory database");
    let repo = SqliteStateRepository::new_with_pool(pool);
    let records = StateRecordLoader::parse_csv(TEST_CSV.as_bytes()).expect("Failed to parse CSV");

    let err = StateRecordLoader::load(&repo, records)
        .await
        .expect_err("Should fail without the state_profile table");

    assert!(matches!(err, StateRecordLoaderError::Provider(_)));
}
