//! Cross-backend query tests
//!
//! Every query runs against the SQLite and memory backends over the same
//! dataset; both must return the same ids, and those ids must be right.

use std::collections::BTreeSet;
use std::sync::Arc;

use super::filters::{Column, FilterError, FilterSpec, build_predicate};
use super::memory::MemoryStore;
use super::sqlite::SqliteService;
use super::traits::CarRepository;
use super::types::NewCar;

struct Backends {
    sqlite: Arc<SqliteService>,
    memory: Arc<MemoryStore>,
}

#[allow(clippy::too_many_arguments)]
fn car(
    brand: &str,
    model: &str,
    accel: Option<f64>,
    fast_charge: Option<i64>,
    rapid_charge: Option<&str>,
    power_train: &str,
    seats: i64,
    price: Option<i64>,
) -> NewCar {
    NewCar {
        brand: Some(brand.to_string()),
        model: Some(model.to_string()),
        accel_sec: accel,
        top_speed_kmh: Some(180),
        range_km: Some(400),
        efficiency_whkm: Some(170),
        fast_charge_kmh: fast_charge,
        rapid_charge: rapid_charge.map(str::to_string),
        power_train: Some(power_train.to_string()),
        plug_type: Some("Type 2 CCS".to_string()),
        body_style: Some("SUV".to_string()),
        segment: Some("C".to_string()),
        seats: Some(seats),
        price_euro: price,
        date: Some("8/24/2016".to_string()),
    }
}

fn dataset() -> Vec<NewCar> {
    vec![
        car("Tesla", "Model 3", Some(4.6), Some(940), Some("Yes"), "AWD", 5, Some(55480)),
        car("Kia", "e-Niro 64kWh", Some(7.9), Some(380), Some("Yes"), "FWD", 5, Some(35000)),
        car("Tesla", "Model Y", Some(5.1), Some(930), Some(""), "AWD", 7, Some(58620)),
        car("Renault", "Zoe R135", Some(9.5), None, None, "FWD", 5, Some(31184)),
        car("Audi", "e_tron 55", Some(5.7), Some(600), Some("Yes"), "AWD", 5, Some(79445)),
        car("Tesla", "Roadster", Some(2.1), Some(920), Some("Yes"), "AWD", 4, None),
        car("Smart", "EQ fortwo", Some(11.6), None, Some("No"), "RWD", 2, Some(21387)),
        car("Porsche", "Taycan 4S", Some(4.0), Some(1100), Some("Yes"), "AWD", 4, Some(50000)),
        car("tesla", "Cybertruck", Some(5.0), None, Some("Yes"), "AWD", 6, Some(50000)),
    ]
}

async fn backends() -> Backends {
    backends_with(&dataset()).await
}

async fn backends_with(cars: &[NewCar]) -> Backends {
    let sqlite = Arc::new(SqliteService::in_memory().await.unwrap());
    let memory = Arc::new(MemoryStore::new());
    sqlite.insert_cars(cars).await.unwrap();
    memory.insert_cars(cars).await.unwrap();
    Backends { sqlite, memory }
}

impl Backends {
    /// Ids matching the query; panics if the backends disagree
    async fn ids(&self, search: Option<&str>, filters: &[FilterSpec]) -> Vec<i64> {
        let predicate = build_predicate(search, filters).unwrap();
        let sqlite: Vec<i64> = self
            .sqlite
            .list_cars(&predicate)
            .await
            .unwrap()
            .iter()
            .map(|r| r.id)
            .collect();
        let memory: Vec<i64> = self
            .memory
            .list_cars(&predicate)
            .await
            .unwrap()
            .iter()
            .map(|r| r.id)
            .collect();
        assert_eq!(
            sqlite, memory,
            "backends disagree for search={search:?} filters={filters:?}"
        );
        sqlite
    }

    async fn ids_for(&self, column: &str, operator: &str, value: Option<&str>) -> Vec<i64> {
        self.ids(None, &[FilterSpec::new(column, operator, value)])
            .await
    }
}

fn all_ids() -> Vec<i64> {
    (1..=dataset().len() as i64).collect()
}

#[tokio::test]
async fn empty_query_returns_everything_in_id_order() {
    let b = backends().await;
    assert_eq!(b.ids(None, &[]).await, all_ids());
    assert_eq!(b.ids(Some("  "), &[]).await, all_ids());
}

#[tokio::test]
async fn price_less_than_example() {
    let b = backends().await;
    assert_eq!(
        b.ids_for("price_euro", "lessThan", Some("40000")).await,
        vec![2, 4, 7]
    );
}

#[tokio::test]
async fn search_matches_brand_case_insensitively() {
    let b = backends().await;
    assert_eq!(b.ids(Some("Tesla"), &[]).await, vec![1, 3, 6, 9]);
}

#[tokio::test]
async fn search_combined_with_filter() {
    let b = backends().await;
    let filters = [FilterSpec::new("seats", "greaterThanOrEqual", Some("5"))];
    assert_eq!(b.ids(Some("AWD"), &filters).await, vec![1, 3, 5, 9]);
}

#[tokio::test]
async fn rapid_charge_is_empty_example() {
    let b = backends().await;
    assert_eq!(
        b.ids_for("rapid_charge", "isEmpty", None).await,
        vec![3, 4]
    );
}

#[tokio::test]
async fn equals_is_exact() {
    let b = backends().await;
    assert_eq!(b.ids_for("brand", "equals", Some("Tesla")).await, vec![1, 3, 6]);
    assert_eq!(b.ids_for("brand", "equals", Some("Tes")).await, Vec::<i64>::new());
    assert_eq!(b.ids_for("seats", "equals", Some("5")).await, vec![1, 2, 4, 5]);
    assert_eq!(b.ids_for("seats", "equals", Some("five")).await, Vec::<i64>::new());
    assert_eq!(b.ids_for("id", "equals", Some("8")).await, vec![8]);
}

#[tokio::test]
async fn contains_is_superset_of_equals() {
    let b = backends().await;
    for column in ["brand", "model", "power_train", "rapid_charge"] {
        for value in ["Tesla", "AWD", "Yes", "Model 3", ""] {
            let equals: BTreeSet<i64> = b
                .ids_for(column, "equals", Some(value))
                .await
                .into_iter()
                .collect();
            let contains: BTreeSet<i64> = b
                .ids_for(column, "contains", Some(value))
                .await
                .into_iter()
                .collect();
            assert!(
                equals.is_subset(&contains),
                "{column} contains {value:?} must include equals"
            );
        }
    }
}

#[tokio::test]
async fn empty_checks_partition_every_column() {
    let b = backends().await;
    let all: BTreeSet<i64> = all_ids().into_iter().collect();
    for column in Column::ALL {
        let empty: BTreeSet<i64> = b
            .ids_for(column.as_str(), "isEmpty", None)
            .await
            .into_iter()
            .collect();
        let not_empty: BTreeSet<i64> = b
            .ids_for(column.as_str(), "isNotEmpty", None)
            .await
            .into_iter()
            .collect();
        assert!(empty.is_disjoint(&not_empty), "{column} overlaps");
        let union: BTreeSet<i64> = empty.union(&not_empty).copied().collect();
        assert_eq!(union, all, "{column} does not cover the dataset");
    }
}

#[tokio::test]
async fn strict_comparison_is_subset_of_inclusive() {
    let b = backends().await;
    let pairs = [
        ("lessThan", "lessThanOrEqual"),
        ("greaterThan", "greaterThanOrEqual"),
    ];
    for (strict, inclusive) in pairs {
        for value in ["50000", "0", "79445", "1e9"] {
            let a: BTreeSet<i64> = b
                .ids_for("price_euro", strict, Some(value))
                .await
                .into_iter()
                .collect();
            let bb: BTreeSet<i64> = b
                .ids_for("price_euro", inclusive, Some(value))
                .await
                .into_iter()
                .collect();
            assert!(a.is_subset(&bb), "{strict} {value} not within {inclusive}");
        }
    }
    assert_eq!(
        b.ids_for("price_euro", "lessThanOrEqual", Some("50000")).await,
        vec![2, 4, 7, 8, 9]
    );
}

#[tokio::test]
async fn null_never_satisfies_comparisons() {
    let b = backends().await;
    assert_eq!(
        b.ids_for("price_euro", "greaterThanOrEqual", Some("0")).await,
        vec![1, 2, 3, 4, 5, 7, 8, 9]
    );
    assert_eq!(
        b.ids_for("fast_charge_kmh", "lessThan", Some("100000")).await,
        vec![1, 2, 3, 5, 6, 8]
    );
}

#[tokio::test]
async fn decimal_comparisons_on_real_column() {
    let b = backends().await;
    assert_eq!(
        b.ids_for("accel_sec", "lessThanOrEqual", Some("5.0")).await,
        vec![1, 6, 8, 9]
    );
    assert_eq!(
        b.ids_for("accel_sec", "equals", Some("5")).await,
        vec![9]
    );
}

#[tokio::test]
async fn like_operators_agree_on_text_and_numbers() {
    let b = backends().await;
    assert_eq!(b.ids_for("model", "startsWith", Some("model")).await, vec![1, 3]);
    assert_eq!(b.ids_for("model", "endsWith", Some("S")).await, vec![8]);
    assert_eq!(b.ids_for("model", "contains", Some("e_t")).await, vec![5]);
    assert_eq!(b.ids_for("model", "contains", Some("%")).await, Vec::<i64>::new());
    assert_eq!(b.ids_for("price_euro", "startsWith", Some("50")).await, vec![8, 9]);
    assert_eq!(b.ids_for("accel_sec", "endsWith", Some(".0")).await, vec![8, 9]);
}

#[tokio::test]
async fn numeric_comparison_on_text_column() {
    let b = backends().await;
    assert_eq!(b.ids_for("date", "greaterThan", Some("7")).await, all_ids());
    assert_eq!(b.ids_for("brand", "greaterThan", Some("0")).await, Vec::<i64>::new());
}

/// Rows whose values sit on the edges of SQLite's number conversions
fn conversion_edge_dataset() -> Vec<NewCar> {
    let edge = |date: &str, accel: f64, price: Option<i64>| NewCar {
        date: Some(date.to_string()),
        accel_sec: Some(accel),
        price_euro: price,
        ..Default::default()
    };
    vec![
        edge("1e400", 1e-7, Some(9_007_199_254_740_993)),
        edge("\u{a0}5", 1e16, Some(9_007_199_254_740_992)),
        edge("\t6/1/2020", 0.1 + 0.2, Some(1)),
        edge("\u{2003}9", 5.0, None),
    ]
}

#[tokio::test]
async fn text_to_number_follows_sqlite_cast() {
    let b = backends_with(&conversion_edge_dataset()).await;
    assert_eq!(b.ids_for("date", "greaterThan", Some("4")).await, vec![1, 3]);
    assert_eq!(
        b.ids_for("date", "greaterThanOrEqual", Some("0")).await,
        vec![1, 2, 3, 4]
    );
    assert_eq!(b.ids_for("date", "lessThan", Some("1")).await, vec![2, 4]);
}

#[tokio::test]
async fn like_on_reals_follows_sqlite_rendering() {
    let b = backends_with(&conversion_edge_dataset()).await;
    assert_eq!(b.ids_for("accel_sec", "contains", Some("e")).await, vec![1, 2]);
    assert_eq!(b.ids_for("accel_sec", "endsWith", Some("e-07")).await, vec![1]);
    assert_eq!(b.ids_for("accel_sec", "startsWith", Some("1.0e+")).await, vec![2]);
    assert_eq!(b.ids_for("accel_sec", "endsWith", Some("0.3")).await, vec![3]);
    assert_eq!(b.ids_for("accel_sec", "endsWith", Some(".0")).await, vec![4]);
}

#[tokio::test]
async fn large_integers_compare_exactly() {
    let b = backends_with(&conversion_edge_dataset()).await;
    assert_eq!(
        b.ids_for("price_euro", "equals", Some("9007199254740992")).await,
        vec![2]
    );
    assert_eq!(
        b.ids_for("price_euro", "greaterThan", Some("9007199254740992")).await,
        vec![1]
    );
    assert_eq!(
        b.ids_for("price_euro", "lessThanOrEqual", Some("9007199254740992")).await,
        vec![2, 3]
    );
    assert_eq!(b.ids_for("price_euro", "equals", Some("1.5")).await, Vec::<i64>::new());
}

#[tokio::test]
async fn unknown_operator_is_skipped() {
    let b = backends().await;
    let filters = [
        FilterSpec::new("brand", "regex", Some(".*")),
        FilterSpec::new("seats", "lessThan", Some("5")),
    ];
    assert_eq!(b.ids(None, &filters).await, vec![6, 7, 8]);
}

#[test]
fn unknown_column_rejects_whole_request() {
    let filters = [
        FilterSpec::new("seats", "lessThan", Some("5")),
        FilterSpec::new("price", "lessThan", Some("5")),
    ];
    assert_eq!(
        build_predicate(None, &filters),
        Err(FilterError::UnknownColumn("price".to_string()))
    );
}
