//! Mapping raw endpoint availability signals to display labels.

use mesa_registry::{CircuitState, EndpointHealth};

/// Display label for an endpoint's health, derived from the raw signal.
///
/// This is a tag, not styled text; padding and color are attached by the
/// report builder.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HealthLabel {
    Ok,
    Trying,
    Failed,
}

impl HealthLabel {
    /// Fixed-width badge text for table cells.
    pub fn tag(self) -> &'static str {
        match self {
            HealthLabel::Ok => "   OK   ",
            HealthLabel::Trying => " TRYING ",
            HealthLabel::Failed => " FAILED ",
        }
    }
}

/// Total mapping over the five sanctioned signals: a boolean flag or one of
/// the three circuit-breaker states. The closed input type makes any other
/// value unrepresentable.
pub fn label(state: EndpointHealth) -> HealthLabel {
    match state {
        EndpointHealth::Flag(true) | EndpointHealth::Circuit(CircuitState::Closed) => {
            HealthLabel::Ok
        }
        EndpointHealth::Circuit(CircuitState::HalfOpen) => HealthLabel::Trying,
        EndpointHealth::Flag(false) | EndpointHealth::Circuit(CircuitState::Open) => {
            HealthLabel::Failed
        }
    }
}
