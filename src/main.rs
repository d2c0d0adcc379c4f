use anyhow::{Context, Result};
use clap::Parser;
use django_auth_client::auth::Auth;
use django_auth_client::client::{ApiClient, FetchOptions};
use django_auth_client::config::loader::{load_config, validate};
use django_auth_client::config::ClientConfig;
use django_auth_client::utils::logging::{self, LogLevel};
use tracing::info;

/// Demo CLI: log in against a backend and fetch a path through the
/// authenticated wrapper.
#[derive(Parser, Debug)]
#[command(name = "django-auth-client", version)]
struct Args {
    /// YAML config file; flags below override nothing once this is set
    #[arg(long, env = "DJANGO_API_CONFIG")]
    config: Option<String>,

    /// Backend base URL, e.g. https://api.example.com
    #[arg(long, env = "DJANGO_API_BASE_URL")]
    base_url: Option<String>,

    #[arg(long, env = "DJANGO_API_USERNAME")]
    username: Option<String>,

    #[arg(long, env = "DJANGO_API_PASSWORD")]
    password: Option<String>,

    /// Treat --username as an email address
    #[arg(long, default_value_t = false)]
    email: bool,

    #[arg(long, default_value = "/api/token/")]
    login_path: String,

    /// Path to fetch after (optional) login
    #[arg(long, default_value = "/api/users/me/")]
    path: String,

    #[arg(long, value_enum)]
    log_level: Option<LogLevel>,
}

#[tokio::main]
async fn main() -> Result<()> {
    let args = Args::parse();

    // 1. Resolve config: file wins, otherwise build from flags.
    // Both paths go through the same validation.
    let config = match &args.config {
        Some(path) => load_config(path)?,
        None => {
            let config = ClientConfig::new(
                args.base_url
                    .clone()
                    .context("either --config or --base-url is required")?,
            );
            validate(&config)?;
            config
        }
    };

    logging::run(&config, args.log_level);

    // 2. Build the client and optionally log in
    let client = ApiClient::new(config);
    if let (Some(username), Some(password)) = (&args.username, &args.password) {
        let auth = Auth::new(client.clone());
        let user = auth
            .login(username, password, args.email, &args.login_path)
            .await?;
        info!(user = %user.username, "logged in");
    }

    // 3. Fetch the requested path and print the body
    let value = client.fetch(&args.path, FetchOptions::get()).await?;
    println!("{}", serde_json::to_string_pretty(&value)?);
    Ok(())
}
