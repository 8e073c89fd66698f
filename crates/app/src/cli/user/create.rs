use clap::Args;
use serde_json::Value;
use storefront_app::{
    database::{self, Db},
    domain::users::{PgUsersService, UsersService},
};

#[derive(Debug, Args)]
pub(crate) struct CreateUserArgs {
    /// Initial profile as a JSON object
    #[arg(long, default_value = "{}")]
    profile: String,

    /// PostgreSQL connection string
    #[arg(long, env = "DATABASE_URL", hide_env_values = true)]
    database_url: String,
}

pub(crate) async fn run(args: CreateUserArgs) -> Result<(), String> {
    let Value::Object(profile) = serde_json::from_str::<Value>(&args.profile)
        .map_err(|error| format!("profile is not valid JSON: {error}"))?
    else {
        return Err("profile must be a JSON object".to_string());
    };

    let pool = database::connect(&args.database_url)
        .await
        .map_err(|error| format!("failed to connect to database: {error}"))?;

    let service = PgUsersService::new(Db::new(pool));

    let user = service
        .create_user(profile)
        .await
        .map_err(|error| format!("failed to create user: {error}"))?;

    println!("user_uuid: {}", user.uuid);

    Ok(())
}
