//! # mesa-registry
//!
//! Data model for a broker's action registry, plus snapshot-backed sources.
//!
//! A broker exposes remotely invokable operations ("actions") under
//! dot-namespaced names such as `users.create`. Every action is served by one
//! or more endpoints (node-level instances), each reporting either a plain
//! availability flag or a circuit-breaker state. This crate owns the read-only
//! snapshot types and the [`Registry`] query trait consumed by the report
//! layer; it performs no network I/O itself.

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use serde_json::Value;

pub mod error;
pub mod snapshot;

pub use error::SnapshotError;
pub use snapshot::{RegistrySnapshot, SnapshotRegistry};

/// Circuit-breaker state reported by a fault-tolerance layer for one endpoint.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum CircuitState {
    /// Healthy, calls flow through.
    Closed,
    /// Probationary retry after a failure window.
    HalfOpen,
    /// Failing, calls are short-circuited.
    Open,
}

/// Raw availability signal for an endpoint.
///
/// Brokers that do not run a circuit breaker report a plain boolean; brokers
/// that do report one of the three [`CircuitState`] values.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum EndpointHealth {
    Flag(bool),
    Circuit(CircuitState),
}

/// One node-level instance capable of serving an action.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EndpointRecord {
    #[serde(rename = "nodeID")]
    pub node_id: String,
    pub state: EndpointHealth,
}

/// Named-schema reference form of a parameter declaration.
///
/// The `name` value embeds a schema definition using the legacy `{| ... |}`
/// bracket convention; display layers rewrite those delimiters to plain
/// braces before formatting.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SchemaReference {
    pub name: String,
}

/// Parameter schema attached to an action.
///
/// A mapping that carries a string `name` field is the named-schema reference
/// form; any other mapping is a plain field-constraint map whose declaration
/// order is the display order.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ParameterSchema {
    Reference(SchemaReference),
    Fields(IndexMap<String, Value>),
}

/// Immutable descriptor of a registered action, owned by the broker.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ActionDescriptor {
    pub name: String,
    /// Whether results are served from the action cache.
    #[serde(default)]
    pub cache: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub params: Option<ParameterSchema>,
    /// Human description of the response shape.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub response: Option<String>,
    #[serde(default, rename = "authRequired")]
    pub auth_required: bool,
    /// Permission names required to call the action, in declaration order.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub permissions: Option<Vec<String>>,
}

/// One row of registry output: an action name with its aggregate endpoint
/// status. `action` is absent when the action is known only by name but its
/// descriptor could not be resolved locally. `endpoints` is present only when
/// the per-node breakdown was requested.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RegistryItem {
    pub name: String,
    /// Number of known endpoints.
    #[serde(default)]
    pub count: u32,
    /// Aggregate availability across endpoints.
    #[serde(default)]
    pub available: bool,
    /// Whether the local node serves this action.
    #[serde(default, rename = "hasLocal")]
    pub has_local: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub action: Option<ActionDescriptor>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub endpoints: Option<Vec<EndpointRecord>>,
}

/// Selection flags for a registry query.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ActionQuery {
    /// Keep only actions served by the local node.
    pub only_local: bool,
    /// Exclude unavailable/offline actions.
    pub only_available: bool,
    /// Exclude actions in the broker's reserved internal namespace.
    pub skip_internal: bool,
    /// Also return the per-node endpoint breakdown.
    pub with_endpoints: bool,
}

/// A point-in-time, read-only view of the broker's action registry.
///
/// `action_list` is synchronous and non-failing: an empty snapshot is a
/// valid, empty result. Item order is not guaranteed; consumers re-sort.
pub trait Registry {
    /// Identity of the node this registry view belongs to.
    fn node_id(&self) -> &str;

    /// All known actions matching the query flags.
    fn action_list(&self, query: &ActionQuery) -> Vec<RegistryItem>;
}

/// Service prefix of a dotted action name: the substring before the first `.`.
pub fn service_prefix(name: &str) -> &str {
    name.split_once('.').map(|(service, _)| service).unwrap_or(name)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn service_prefix_splits_on_first_dot() {
        assert_eq!(service_prefix("users.create"), "users");
        assert_eq!(service_prefix("v1.users.create"), "v1");
        assert_eq!(service_prefix("plain"), "plain");
    }

    #[test]
    fn endpoint_health_accepts_flags_and_circuit_states() {
        let flag: EndpointHealth = serde_json::from_value(json!(true)).unwrap();
        assert_eq!(flag, EndpointHealth::Flag(true));

        let closed: EndpointHealth = serde_json::from_value(json!("CLOSED")).unwrap();
        assert_eq!(closed, EndpointHealth::Circuit(CircuitState::Closed));

        let half: EndpointHealth = serde_json::from_value(json!("HALF_OPEN")).unwrap();
        assert_eq!(half, EndpointHealth::Circuit(CircuitState::HalfOpen));

        let open: EndpointHealth = serde_json::from_value(json!("OPEN")).unwrap();
        assert_eq!(open, EndpointHealth::Circuit(CircuitState::Open));
    }

    #[test]
    fn parameter_schema_with_name_field_is_a_reference() {
        let schema: ParameterSchema =
            serde_json::from_value(json!({ "name": "{|id: \"string\"|}" })).unwrap();
        assert!(matches!(schema, ParameterSchema::Reference(_)));
    }

    #[test]
    fn parameter_schema_without_name_keeps_declaration_order() {
        let schema: ParameterSchema =
            serde_json::from_value(json!({ "id": "string", "age": "number", "city": "string" }))
                .unwrap();
        match schema {
            ParameterSchema::Fields(fields) => {
                let keys: Vec<_> = fields.keys().map(String::as_str).collect();
                assert_eq!(keys, ["id", "age", "city"]);
            }
            ParameterSchema::Reference(_) => panic!("expected plain field map"),
        }
    }

    #[test]
    fn declaration_order_survives_document_deserialization() {
        // same path SnapshotRegistry::load takes: straight from document text
        let schema: ParameterSchema =
            serde_json::from_str(r#"{ "id": "string", "age": "number", "city": "string" }"#)
                .unwrap();
        match schema {
            ParameterSchema::Fields(fields) => {
                let keys: Vec<_> = fields.keys().map(String::as_str).collect();
                assert_eq!(keys, ["id", "age", "city"]);
            }
            ParameterSchema::Reference(_) => panic!("expected plain field map"),
        }
    }

    #[test]
    fn registry_item_tolerates_missing_optional_fields() {
        let item: RegistryItem =
            serde_json::from_value(json!({ "name": "users.create" })).unwrap();
        assert_eq!(item.name, "users.create");
        assert_eq!(item.count, 0);
        assert!(!item.available);
        assert!(item.action.is_none());
        assert!(item.endpoints.is_none());
    }
}
