use std::collections::HashMap;
use std::sync::Arc;

use async_trait::async_trait;
use tokio::sync::Mutex;

use aeris_core::source::AirQualitySource;
use aeris_types::{AerisError, Measurement, MeasurementQuery, Parameter, SourceKey, Station};

/// Instruction for how a method should behave for a given input.
#[derive(Clone)]
pub enum MockBehavior<T> {
    /// Return the provided value immediately.
    Return(T),
    /// Fail immediately with the provided error.
    Fail(AerisError),
    /// Hang indefinitely (simulate a timeout).
    Hang,
}

#[derive(Default)]
struct InternalState {
    stations_rule: Option<MockBehavior<Vec<Station>>>,
    parameter_rules: HashMap<String, MockBehavior<Vec<Parameter>>>,
    measurement_rules: HashMap<(String, String), MockBehavior<Vec<Measurement>>>,
    measurement_requests: Vec<(String, String)>,
}

/// Controller handle used by tests to drive the dynamic mock from the outside.
pub struct DynamicMockController {
    state: Arc<Mutex<InternalState>>,
}

impl DynamicMockController {
    /// Set the behavior for `stations` calls.
    pub async fn set_stations_behavior(&self, behavior: MockBehavior<Vec<Station>>) {
        let mut guard = self.state.lock().await;
        guard.stations_rule = Some(behavior);
    }

    /// Set the behavior for `parameters` calls for a specific station.
    pub async fn set_parameters_behavior(
        &self,
        station_id: impl Into<String>,
        behavior: MockBehavior<Vec<Parameter>>,
    ) {
        let mut guard = self.state.lock().await;
        guard.parameter_rules.insert(station_id.into(), behavior);
    }

    /// Set the behavior for `measurements` calls for a station/parameter pair.
    pub async fn set_measurements_behavior(
        &self,
        station_id: impl Into<String>,
        parameter_id: impl Into<String>,
        behavior: MockBehavior<Vec<Measurement>>,
    ) {
        let mut guard = self.state.lock().await;
        guard
            .measurement_rules
            .insert((station_id.into(), parameter_id.into()), behavior);
    }

    /// Return a copy of the measurement request log.
    pub async fn get_measurement_requests(&self) -> Vec<(String, String)> {
        let guard = self.state.lock().await;
        guard.measurement_requests.clone()
    }

    /// Clear all configured behaviors and request logs.
    pub async fn clear_all_behaviors(&self) {
        let mut guard = self.state.lock().await;
        guard.stations_rule = None;
        guard.parameter_rules.clear();
        guard.measurement_rules.clear();
        guard.measurement_requests.clear();
    }
}

/// A source that defers all behavior to an external controller.
pub struct DynamicMockSource {
    key: SourceKey,
    state: Arc<Mutex<InternalState>>,
}

impl DynamicMockSource {
    /// Create a new dynamic mock source and its controller.
    #[must_use]
    pub fn new_with_controller(
        key: SourceKey,
    ) -> (Arc<dyn AirQualitySource>, DynamicMockController) {
        let state = Arc::new(Mutex::new(InternalState::default()));
        let controller = DynamicMockController {
            state: Arc::clone(&state),
        };
        let me = Arc::new(Self { key, state });
        (me as Arc<dyn AirQualitySource>, controller)
    }
}

#[async_trait]
impl AirQualitySource for DynamicMockSource {
    fn key(&self) -> SourceKey {
        self.key
    }

    async fn stations(&self) -> Result<Vec<Station>, AerisError> {
        // Acquire behavior snapshot without holding the lock across await points
        let behavior = {
            let guard = self.state.lock().await;
            guard.stations_rule.clone()
        };

        match behavior {
            Some(MockBehavior::Return(v)) => Ok(v),
            Some(MockBehavior::Fail(e)) => Err(e),
            Some(MockBehavior::Hang) => {
                std::future::pending::<()>().await;
                unreachable!()
            }
            None => Ok(vec![]),
        }
    }

    async fn parameters(&self, station_id: &str) -> Result<Vec<Parameter>, AerisError> {
        let behavior = {
            let guard = self.state.lock().await;
            guard.parameter_rules.get(station_id).cloned()
        };

        match behavior {
            Some(MockBehavior::Return(v)) => Ok(v),
            Some(MockBehavior::Fail(e)) => Err(e),
            Some(MockBehavior::Hang) => {
                std::future::pending::<()>().await;
                unreachable!()
            }
            None => Ok(vec![]),
        }
    }

    async fn measurements(
        &self,
        station_id: &str,
        parameter_id: &str,
        _query: &MeasurementQuery,
    ) -> Result<Vec<Measurement>, AerisError> {
        let behavior = {
            let mut guard = self.state.lock().await;
            guard
                .measurement_requests
                .push((station_id.to_string(), parameter_id.to_string()));
            guard
                .measurement_rules
                .get(&(station_id.to_string(), parameter_id.to_string()))
                .cloned()
        };

        match behavior {
            Some(MockBehavior::Return(v)) => Ok(v),
            Some(MockBehavior::Fail(e)) => Err(e),
            Some(MockBehavior::Hang) => {
                std::future::pending::<()>().await;
                unreachable!()
            }
            None => Ok(vec![]),
        }
    }
}
