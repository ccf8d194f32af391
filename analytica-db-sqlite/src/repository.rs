use analytica_core::{
    LetterGrade, MinimumWage, NO_STATE_LAW, PoliticalLeaning, ProviderError, StateProfile,
    StateProvider, StateRepository, parse_minimum_wage,
};
use async_trait::async_trait;
use sqlx::Row;
use sqlx::sqlite::{SqlitePool, SqliteRow};

use crate::decimal::{get_decimal, get_optional_text};

const SELECT_COLUMNS: &str = "SELECT name, median_home_price, capital_gains_tax, income_tax,
        sales_tax, property_taxes, cost_of_living, k12_school_performance,
        higher_ed_school_performance, forested_land, violent_crimes, population,
        minimum_wage, abortion, gun_laws, political_leaning
     FROM state_profile";

pub struct SqliteStateRepository {
    pool: SqlitePool,
}

impl SqliteStateRepository {
    pub async fn new(database_url: &str) -> Result<Self, ProviderError> {
        let pool = SqlitePool::connect(database_url)
            .await
            .map_err(|e| ProviderError::Connection(e.to_string()))?;
        Ok(Self { pool })
    }

    pub fn new_with_pool(pool: SqlitePool) -> Self {
        Self { pool }
    }

    pub async fn run_migrations(&self) -> Result<(), ProviderError> {
        sqlx::migrate!("./migrations")
            .run(&self.pool)
            .await
            .map_err(|e| ProviderError::Database(e.to_string()))?;
        Ok(())
    }

    pub fn pool(&self) -> &SqlitePool {
        &self.pool
    }
}

fn row_to_state_profile(row: &SqliteRow) -> Result<StateProfile, ProviderError> {
    let name: String = row
        .try_get("name")
        .map_err(|e| ProviderError::Database(e.to_string()))?;

    let population: i64 = row
        .try_get("population")
        .map_err(|e| ProviderError::Database(e.to_string()))?;
    let population = u64::try_from(population)
        .map_err(|_| ProviderError::Decode(format!("Invalid population for {}: {}", name, population)))?;

    let minimum_wage: String = row
        .try_get("minimum_wage")
        .map_err(|e| ProviderError::Database(e.to_string()))?;
    let minimum_wage = parse_minimum_wage(&minimum_wage).map_err(|reason| {
        ProviderError::Decode(format!("Invalid minimum wage for {}: '{}' ({})", name, minimum_wage, reason))
    })?;

    Ok(StateProfile {
        median_home_price: get_decimal(row, "median_home_price")?,
        capital_gains_tax: get_decimal(row, "capital_gains_tax")?,
        income_tax: get_decimal(row, "income_tax")?,
        sales_tax: get_decimal(row, "sales_tax")?,
        property_taxes: get_decimal(row, "property_taxes")?,
        cost_of_living: get_decimal(row, "cost_of_living")?,
        k12_school_performance: get_decimal(row, "k12_school_performance")?,
        higher_ed_school_performance: get_decimal(row, "higher_ed_school_performance")?,
        forested_land: get_decimal(row, "forested_land")?,
        violent_crimes: get_decimal(row, "violent_crimes")?,
        population,
        minimum_wage,
        abortion: get_label(row, "abortion", LetterGrade::parse)?,
        gun_laws: get_label(row, "gun_laws", LetterGrade::parse)?,
        political_leaning: get_label(row, "political_leaning", PoliticalLeaning::parse)?,
        name,
    })
}

/// Reads a nullable label column. NULL is an unrecognized value; a stored
/// label that no longer parses is a decode error.
fn get_label<T>(
    row: &SqliteRow,
    column: &str,
    parse: fn(&str) -> Option<T>,
) -> Result<Option<T>, ProviderError> {
    match get_optional_text(row, column)? {
        None => Ok(None),
        Some(label) => parse(&label)
            .map(Some)
            .ok_or_else(|| ProviderError::Decode(format!("Invalid {} label: {}", column, label))),
    }
}

fn minimum_wage_label(wage: MinimumWage) -> String {
    match wage {
        MinimumWage::Amount(amount) => amount.to_string(),
        MinimumWage::NoStateLaw => NO_STATE_LAW.to_string(),
    }
}

#[async_trait]
impl StateProvider for SqliteStateRepository {
    async fn list_states(&self) -> Result<Vec<StateProfile>, ProviderError> {
        let rows = sqlx::query(&format!("{} ORDER BY name", SELECT_COLUMNS))
            .fetch_all(&self.pool)
            .await
            .map_err(|e| ProviderError::Database(e.to_string()))?;

        rows.iter().map(row_to_state_profile).collect()
    }

    async fn get_state(
        &self,
        name: &str,
    ) -> Result<StateProfile, ProviderError> {
        let row = sqlx::query(&format!("{} WHERE name = ?", SELECT_COLUMNS))
            .bind(name)
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| ProviderError::Database(e.to_string()))?
            .ok_or(ProviderError::NotFound)?;

        row_to_state_profile(&row)
    }
}

#[async_trait]
impl StateRepository for SqliteStateRepository {
    async fn upsert_state(
        &self,
        state: &StateProfile,
    ) -> Result<(), ProviderError> {
        let population = i64::try_from(state.population).map_err(|_| {
            ProviderError::Database(format!("Population out of range for {}: {}", state.name, state.population))
        })?;

        sqlx::query(
            "INSERT INTO state_profile (
                name, median_home_price, capital_gains_tax, income_tax, sales_tax,
                property_taxes, cost_of_living, k12_school_performance,
                higher_ed_school_performance, forested_land, violent_crimes, population,
                minimum_wage, abortion, gun_laws, political_leaning
            ) VALUES (?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?)
            ON CONFLICT(name) DO UPDATE SET
                median_home_price = excluded.median_home_price,
                capital_gains_tax = excluded.capital_gains_tax,
                income_tax = excluded.income_tax,
                sales_tax = excluded.sales_tax,
                property_taxes = excluded.property_taxes,
                cost_of_living = excluded.cost_of_living,
                k12_school_performance = excluded.k12_school_performance,
                higher_ed_school_performance = excluded.higher_ed_school_performance,
                forested_land = excluded.forested_land,
                violent_crimes = excluded.violent_crimes,
                population = excluded.population,
                minimum_wage = excluded.minimum_wage,
                abortion = excluded.abortion,
                gun_laws = excluded.gun_laws,
                political_leaning = excluded.political_leaning",
        )
        .bind(state.name.as_str())
        .bind(state.median_home_price.to_string())
        .bind(state.capital_gains_tax.to_string())
        .bind(state.income_tax.to_string())
        .bind(state.sales_tax.to_string())
        .bind(state.property_taxes.to_string())
        .bind(state.cost_of_living.to_string())
        .bind(state.k12_school_performance.to_string())
        .bind(state.higher_ed_school_performance.to_string())
        .bind(state.forested_land.to_string())
        .bind(state.violent_crimes.to_string())
        .bind(population)
        .bind(minimum_wage_label(state.minimum_wage))
        .bind(state.abortion.map(|g| g.as_str()))
        .bind(state.gun_laws.map(|g| g.as_str()))
        .bind(state.political_leaning.map(|l| l.as_str()))
        .execute(&self.pool)
        .await
        .map_err(|e| ProviderError::Database(e.to_string()))?;

        tracing::debug!(state = %state.name, "upserted state profile");
        Ok(())
    }

    async fn delete_state(
        &self,
        name: &str,
    ) -> Result<(), ProviderError> {
        let result = sqlx::query("DELETE FROM state_profile WHERE name = ?")
            .bind(name)
            .execute(&self.pool)
            .await
            .map_err(|e| ProviderError::Database(e.to_string()))?;

        if result.rows_affected() == 0 {
            return Err(ProviderError::NotFound);
        }

        Ok(())
    }
}
