use analytica_core::calculations::{MovingAnalysis, MovingImpactError, analyze_move, compare_metrics};
use analytica_core::{
    MetricComparison, MovingInputs, MovingPreferences, MovingRequest, ProviderError,
    ProviderRegistry, StateProfile, StateProvider, default_state_pair, find_state,
};
use analytica_data::HttpProviderFactory;
use analytica_db_sqlite::SqliteProviderFactory;
use thiserror::Error;
use tracing::{debug, info};

#[derive(Debug, Error)]
pub enum AppError {
    #[error("no states available from the provider")]
    NoStates,

    #[error(transparent)]
    Provider(#[from] ProviderError),

    #[error(transparent)]
    Impact(#[from] MovingImpactError),
}

/// Registry with every backend the binary ships: `sqlite` and `http`.
pub fn build_registry() -> ProviderRegistry {
    let mut registry = ProviderRegistry::new();
    registry.register(Box::new(SqliteProviderFactory));
    registry.register(Box::new(HttpProviderFactory));
    registry
}

/// Origin and destination names, falling back to the default pair for
/// whichever side was not given.
pub fn resolve_state_pair(
    states: &[StateProfile],
    from: Option<&str>,
    to: Option<&str>,
) -> Result<(String, String), AppError> {
    let (from, to) = match (from, to) {
        (Some(from), Some(to)) => (from, to),
        _ => {
            let (default_from, default_to) =
                default_state_pair(states).ok_or(AppError::NoStates)?;
            (from.unwrap_or(default_from), to.unwrap_or(default_to))
        }
    };
    debug!(from, to, "resolved state pair");
    Ok((from.to_string(), to.to_string()))
}

/// Fetches all states and analyzes the move between them.
pub async fn run_estimate(
    provider: &dyn StateProvider,
    from: Option<&str>,
    to: Option<&str>,
    inputs: MovingInputs,
    preferences: MovingPreferences,
) -> Result<MovingAnalysis, AppError> {
    let states = provider.list_states().await?;
    info!(count = states.len(), "fetched states");

    let (from_state, to_state) = resolve_state_pair(&states, from, to)?;
    let request = MovingRequest {
        from_state,
        to_state,
        inputs,
        preferences,
    };

    Ok(analyze_move(&states, &request)?)
}

/// Metric table for two states without any financial inputs.
pub async fn run_compare(
    provider: &dyn StateProvider,
    from: Option<&str>,
    to: Option<&str>,
) -> Result<(String, String, Vec<MetricComparison>), AppError> {
    let states = provider.list_states().await?;
    let (from_name, to_name) = resolve_state_pair(&states, from, to)?;

    let lookup = |name: &str| {
        find_state(&states, name).ok_or_else(|| MovingImpactError::MissingState(name.to_string()))
    };
    let metrics = compare_metrics(lookup(&from_name)?, lookup(&to_name)?);

    Ok((from_name, to_name, metrics))
}

pub async fn run_list(provider: &dyn StateProvider) -> Result<Vec<StateProfile>, AppError> {
    Ok(provider.list_states().await?)
}
