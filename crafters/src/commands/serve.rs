use crafters_config::Config;
use crafters_email_contracts::EmailService;
use tracing::{info, warn};

use crate::{email, environment};

pub async fn serve(config: Config) -> anyhow::Result<()> {
    let email = email::connect(&config.email)?;
    match &email {
        Some(email) => {
            info!("Checking email transport");
            if let Err(err) = email.ping().await {
                warn!("Email transport is not reachable: {err:#}");
            }
        }
        None => warn!("No email transport is configured, submissions will be answered with 503"),
    }

    let server = environment::build(&config, email)?;
    server.serve().await
}
