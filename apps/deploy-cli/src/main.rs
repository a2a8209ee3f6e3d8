use clap::Parser;
use db_deploy::{error_chain_messages, AdminSecret, AppSecret, DbMigrator, DeployError, HostInfo};
use tracing::{debug, info};

#[derive(Parser)]
#[command(name = "deploy-db")]
#[command(about = "Provisions an application database and applies schema migrations")]
struct Args {
    /// The database host name (Required)
    #[arg(long = "host_name")]
    host_name: String,

    /// The database host port
    #[arg(long = "host_port", default_value_t = 3306)]
    host_port: u16,

    /// The admin user name (Required)
    #[arg(long = "admin_user_name")]
    admin_user_name: String,

    /// The admin user password (Required)
    #[arg(long = "admin_user_password")]
    admin_user_password: String,

    /// The application database name (Required)
    #[arg(long = "db_name")]
    db_name: String,

    /// The application database user name (Required)
    #[arg(long = "app_user_name")]
    app_user_name: String,

    /// The application database user password (Required)
    #[arg(long = "app_user_password")]
    app_user_password: String,

    /// Controls the output verbosity
    #[arg(short = 'd', long)]
    debug: bool,
}

#[tokio::main]
async fn main() {
    let args = Args::parse();

    tracing_subscriber::fmt()
        .with_writer(std::io::stdout)
        .without_time()
        .with_target(false)
        .with_env_filter(if args.debug {
            "debug,sqlx=info"
        } else {
            "info,sqlx=warn"
        })
        .init();

    if let Err(e) = run(args).await {
        for message in error_chain_messages(&e) {
            eprintln!("Error: {message}");
        }
        std::process::exit(1);
    }
}

async fn run(args: Args) -> Result<(), DeployError> {
    let host_info = HostInfo::new(&args.host_name, args.host_port)?;
    let admin_secret = AdminSecret::new(
        &args.host_name,
        args.host_port,
        &args.admin_user_name,
        &args.admin_user_password,
    )?;
    let app_secret = AppSecret::new(&args.db_name, &args.app_user_name, &args.app_user_password)?;

    if args.debug {
        debug!("admin secret: {admin_secret:?}");
        debug!("app secret: {app_secret:?}");
    }

    let migrator = DbMigrator::new(host_info, admin_secret, app_secret, args.debug)?;
    migrator.run_initialization_script().await?;
    migrator.run_migration_scripts().await?;

    info!("Database deployment completed successfully");
    Ok(())
}
