mod event;
mod secrets;

use db_deploy::{error_chain_messages, AdminSecret, AppSecret, DbMigrator, DeployError, HostInfo};
use event::{DeploymentEvent, ResourceProperties};
use lambda_runtime::{run, service_fn, Error, LambdaEvent};
use tracing::{debug, error, info};

#[tokio::main]
async fn main() -> Result<(), Error> {
    // CloudWatch adds its own timestamps; isDebug gates the debug-level
    // statements per invocation, so the filter stays wide open.
    tracing_subscriber::fmt()
        .json()
        .without_time()
        .with_target(false)
        .with_max_level(tracing::Level::DEBUG)
        .init();

    run(service_fn(handle)).await
}

async fn handle(event: LambdaEvent<DeploymentEvent>) -> Result<String, Error> {
    let (event, _context) = event.into_parts();

    match dispatch(event).await {
        Ok(status) => Ok(status.to_string()),
        Err(e) => {
            let report = failure_report(&e);
            error!("{report}");
            Err(report.into())
        }
    }
}

async fn dispatch(event: DeploymentEvent) -> Result<&'static str, DeployError> {
    let properties = ResourceProperties::new(event.resource_properties.clone());
    let is_debug = properties.bool_property("isDebug")?.unwrap_or(false);

    if is_debug {
        if let Ok(json) = serde_json::to_string(&event) {
            debug!("{json}");
        }
    }

    match event.request_type.as_str() {
        "Create" | "Update" => {
            migrate(&properties, is_debug)
                .await
                .map_err(|e| DeployError::event_processing(&event.request_type, e))?;
            info!("{} resource completed successfully", event.request_type);
            Ok("Task - OK")
        }
        // Schema and data are left in place when the resource goes away.
        "Delete" => Ok("Task - NoOp"),
        other => Err(DeployError::unexpected_request_type(other)),
    }
}

async fn migrate(properties: &ResourceProperties, is_debug: bool) -> Result<(), DeployError> {
    info!("Running database schema migration...");

    let region = properties.require_string("region")?;

    let host_info: HostInfo = properties.require("rdsHost")?;
    host_info.validate()?;

    let admin_secret_arn = properties.require_string("rdsAdminSecretArn")?;
    let app_secret_arn = properties.require_string("rdsAppSecretArn")?;

    let client = secrets::client(&region).await;

    let admin_secret: AdminSecret = secrets::fetch_secret(&client, &admin_secret_arn).await?;
    admin_secret.validate()?;

    let app_secret: AppSecret = secrets::fetch_secret(&client, &app_secret_arn).await?;
    app_secret.validate()?;

    if is_debug {
        debug!("admin secret: {admin_secret:?}");
        debug!("app secret: {app_secret:?}");
    }

    let migrator = DbMigrator::new(host_info, admin_secret, app_secret, is_debug)?;
    migrator.run_initialization_script().await?;
    migrator.run_migration_scripts().await?;

    Ok(())
}

fn failure_report(err: &DeployError) -> String {
    format!(
        "Database deployment failed due to the following errors:\n  - {}",
        error_chain_messages(err).join("\n  - ")
    )
}
