use anyhow::Context;
use tracing::{info, warn};

use userstore::{
    config::AppConfig,
    db,
    users::{PgUserRepository, UserRepository},
};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    let env_filter = std::env::var("RUST_LOG")
        .unwrap_or_else(|_| "userstore=debug,sqlx=warn".to_string());
    let json_logs = std::env::var("LOG_FORMAT")
        .map(|v| v == "json")
        .unwrap_or(false);

    if json_logs {
        tracing_subscriber::fmt()
            .with_env_filter(env_filter)
            .with_target(false)
            .json()
            .init();
    } else {
        tracing_subscriber::fmt().with_env_filter(env_filter).init();
    }

    let config = AppConfig::from_env().context("load config")?;
    let pool = db::connect(&config).await?;

    if let Err(e) = sqlx::migrate!("./migrations").run(&pool).await {
        warn!(error = %e, "migration failed; continuing");
    }

    let repo = PgUserRepository::new(pool);

    let user = repo.create("John Doe", "johndoe@example.com").await?;
    info!(user = %serde_json::to_string_pretty(&user)?, "created");

    let rows = repo.update_email(user.id, "newemail@example.com").await?;
    info!(user_id = %user.id, rows, "updated");

    let fetched = repo.get_by_id(user.id).await?;
    info!(user = %serde_json::to_string_pretty(&fetched)?, "fetched");

    repo.delete(user.id).await?;
    match repo.get_by_id(user.id).await {
        Err(e) if e.is_not_found() => info!(user_id = %user.id, "deleted"),
        Err(e) => return Err(e.into()),
        Ok(_) => warn!(user_id = %user.id, "user still visible after delete"),
    }

    Ok(())
}
