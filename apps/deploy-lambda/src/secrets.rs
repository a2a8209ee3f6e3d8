use aws_config::{BehaviorVersion, Region};
use aws_sdk_secretsmanager::Client;
use db_deploy::DeployError;
use serde::de::DeserializeOwned;

/// Secrets Manager client bound to the deployment region, using the default
/// credential chain of the hosting runtime.
pub async fn client(region: &str) -> Client {
    let config = aws_config::defaults(BehaviorVersion::latest())
        .region(Region::new(region.to_string()))
        .load()
        .await;
    Client::new(&config)
}

/// Fetches a secret by id/ARN and decodes its JSON string payload into the
/// requested credential type.
pub async fn fetch_secret<T: DeserializeOwned>(
    client: &Client,
    secret_id: &str,
) -> Result<T, DeployError> {
    let response = client
        .get_secret_value()
        .secret_id(secret_id)
        .send()
        .await
        .map_err(|e| DeployError::secret_resolution(secret_id, e))?;

    let payload = response
        .secret_string()
        .ok_or_else(|| DeployError::secret_resolution(secret_id, "secret has no string payload"))?;

    serde_json::from_str(payload).map_err(|e| DeployError::secret_resolution(secret_id, e))
}
