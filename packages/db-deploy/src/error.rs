use std::error::Error as StdError;

use thiserror::Error;

pub type BoxError = Box<dyn StdError + Send + Sync + 'static>;

/// Central error type for the deployment workflow.
///
/// Lower-level failures (driver errors, decode errors) are wrapped with a
/// descriptive message and kept as the `source` so callers can report the
/// full cause chain.
#[derive(Debug, Error)]
pub enum DeployError {
    #[error("Missing required field: '{field}'")]
    MissingField { field: &'static str },

    #[error("Missing required resource property: '{key}'")]
    MissingProperty { key: String },

    #[error("Failed to decode resource property '{key}'")]
    Property { key: String, #[source] source: BoxError },

    #[error("Failed to resolve secret '{secret_id}'")]
    SecretResolution {
        secret_id: String,
        #[source]
        source: BoxError,
    },

    #[error("An error occurred while trying to execute the database initialization script")]
    Initialization(#[source] BoxError),

    #[error("An error occurred while trying to execute the migration scripts")]
    Migration(#[source] BoxError),

    #[error("An error occurred while processing the resource '{request_type}' event")]
    EventProcessing {
        request_type: String,
        #[source]
        source: Box<DeployError>,
    },

    #[error("Unexpected request type '{request_type}'")]
    UnexpectedRequestType { request_type: String },
}

impl DeployError {
    pub fn missing_field(field: &'static str) -> Self {
        Self::MissingField { field }
    }

    pub fn missing_property(key: impl Into<String>) -> Self {
        Self::MissingProperty { key: key.into() }
    }

    pub fn property(key: impl Into<String>, source: impl Into<BoxError>) -> Self {
        Self::Property {
            key: key.into(),
            source: source.into(),
        }
    }

    pub fn secret_resolution(secret_id: impl Into<String>, source: impl Into<BoxError>) -> Self {
        Self::SecretResolution {
            secret_id: secret_id.into(),
            source: source.into(),
        }
    }

    pub fn initialization(source: impl Into<BoxError>) -> Self {
        Self::Initialization(source.into())
    }

    pub fn migration(source: impl Into<BoxError>) -> Self {
        Self::Migration(source.into())
    }

    pub fn event_processing(request_type: impl Into<String>, source: DeployError) -> Self {
        Self::EventProcessing {
            request_type: request_type.into(),
            source: Box::new(source),
        }
    }

    pub fn unexpected_request_type(request_type: impl Into<String>) -> Self {
        Self::UnexpectedRequestType {
            request_type: request_type.into(),
        }
    }
}

/// Flatten an error and its `source()` chain into an ordered list of
/// messages, outermost first.
pub fn error_chain_messages(err: &(dyn StdError + 'static)) -> Vec<String> {
    let mut messages = Vec::new();
    let mut current = Some(err);
    while let Some(e) = current {
        messages.push(e.to_string());
        current = e.source();
    }
    messages
}

#[cfg(test)]
mod tests {
    use super::{error_chain_messages, DeployError};

    #[test]
    fn missing_field_names_the_field() {
        let err = DeployError::missing_field("hostname");
        assert_eq!(err.to_string(), "Missing required field: 'hostname'");
    }

    #[test]
    fn chain_is_flattened_outermost_first() {
        let inner = DeployError::missing_field("port");
        let wrapped =
            DeployError::event_processing("Update", DeployError::initialization(inner));

        let messages = error_chain_messages(&wrapped);
        assert_eq!(
            messages,
            vec![
                "An error occurred while processing the resource 'Update' event".to_string(),
                "An error occurred while trying to execute the database initialization script"
                    .to_string(),
                "Missing required field: 'port'".to_string(),
            ]
        );
    }

    #[test]
    fn unexpected_request_type_names_the_type() {
        let err = DeployError::unexpected_request_type("Replace");
        assert_eq!(err.to_string(), "Unexpected request type 'Replace'");
        assert!(error_chain_messages(&err).len() == 1);
    }
}
