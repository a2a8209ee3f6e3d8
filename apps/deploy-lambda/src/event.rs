use db_deploy::DeployError;
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// Custom-resource lifecycle event, as delivered by the deployment
/// provider framework.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct DeploymentEvent {
    #[serde(default)]
    pub request_type: String,
    #[serde(default)]
    pub resource_properties: Map<String, Value>,
}

/// Untyped resource-property bag with typed per-key extraction.
pub struct ResourceProperties {
    map: Map<String, Value>,
}

impl ResourceProperties {
    pub fn new(map: Map<String, Value>) -> Self {
        Self { map }
    }

    /// Decodes the property under `key` to the requested type. Absent keys
    /// yield `Ok(None)`; present but undecodable values are an error naming
    /// the key.
    pub fn property<T: DeserializeOwned>(&self, key: &str) -> Result<Option<T>, DeployError> {
        match self.map.get(key) {
            Some(value) => serde_json::from_value(value.clone())
                .map(Some)
                .map_err(|e| DeployError::property(key, e)),
            None => Ok(None),
        }
    }

    pub fn require<T: DeserializeOwned>(&self, key: &str) -> Result<T, DeployError> {
        self.property(key)?
            .ok_or_else(|| DeployError::missing_property(key))
    }

    /// A required string property; an empty value counts as missing.
    pub fn require_string(&self, key: &str) -> Result<String, DeployError> {
        let value: String = self.require(key)?;
        if value.is_empty() {
            return Err(DeployError::missing_property(key));
        }
        Ok(value)
    }

    /// An optional boolean property. The provider framework stringifies
    /// scalar property values, so "true"/"false" are accepted as well.
    pub fn bool_property(&self, key: &str) -> Result<Option<bool>, DeployError> {
        match self.map.get(key) {
            Some(Value::Bool(flag)) => Ok(Some(*flag)),
            Some(Value::String(text)) => text
                .parse::<bool>()
                .map(Some)
                .map_err(|e| DeployError::property(key, e)),
            Some(other) => Err(DeployError::property(
                key,
                format!("expected a boolean, got: {other}"),
            )),
            None => Ok(None),
        }
    }
}

#[cfg(test)]
mod tests {
    use db_deploy::HostInfo;
    use serde_json::json;

    use super::{DeploymentEvent, ResourceProperties};

    fn properties(value: serde_json::Value) -> ResourceProperties {
        match value {
            serde_json::Value::Object(map) => ResourceProperties::new(map),
            _ => unreachable!(),
        }
    }

    #[test]
    fn event_deserializes_pascal_case_payload() {
        let event: DeploymentEvent = serde_json::from_value(json!({
            "RequestType": "Create",
            "ResourceProperties": {
                "region": "eu-west-1",
                "rdsHost": { "hostname": "db.example.com", "port": 3306 },
                "rdsAdminSecretArn": "arn:aws:secretsmanager:eu-west-1:123456789012:secret:admin",
                "rdsAppSecretArn": "arn:aws:secretsmanager:eu-west-1:123456789012:secret:app"
            }
        }))
        .unwrap();

        assert_eq!(event.request_type, "Create");
        assert_eq!(event.resource_properties.len(), 4);
    }

    #[test]
    fn absent_property_is_none() {
        let props = properties(json!({}));
        assert!(props.property::<String>("region").unwrap().is_none());
    }

    #[test]
    fn require_reports_missing_key() {
        let props = properties(json!({}));
        let err = props.require::<String>("region").unwrap_err();
        assert_eq!(
            err.to_string(),
            "Missing required resource property: 'region'"
        );
    }

    #[test]
    fn require_string_rejects_empty_value() {
        let props = properties(json!({ "region": "" }));
        let err = props.require_string("region").unwrap_err();
        assert_eq!(
            err.to_string(),
            "Missing required resource property: 'region'"
        );
    }

    #[test]
    fn typed_property_decodes_nested_object() {
        let props = properties(json!({
            "rdsHost": { "hostname": "db.example.com", "port": "3306" }
        }));
        let host: HostInfo = props.require("rdsHost").unwrap();
        assert_eq!(host.hostname, "db.example.com");
        assert_eq!(host.port, 3306);
    }

    #[test]
    fn undecodable_property_names_the_key() {
        let props = properties(json!({ "rdsHost": 42 }));
        let err = props.require::<HostInfo>("rdsHost").unwrap_err();
        assert_eq!(err.to_string(), "Failed to decode resource property 'rdsHost'");
    }

    #[test]
    fn bool_property_accepts_bool_and_string_forms() {
        let props = properties(json!({ "a": true, "b": "false" }));
        assert_eq!(props.bool_property("a").unwrap(), Some(true));
        assert_eq!(props.bool_property("b").unwrap(), Some(false));
        assert_eq!(props.bool_property("missing").unwrap(), None);
    }
}
