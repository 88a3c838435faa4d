//! Process configuration from the environment.

use std::env;

/// Runtime configuration. Read once at startup; nothing else touches the
/// environment.
#[derive(Debug, Clone)]
pub struct Config {
    /// Address the HTTP listener binds to.
    pub listen_addr: String,

    /// Shared secret for token signing/verification.
    pub jwt_secret: String,

    /// Payment processor API key. When absent the app runs against the
    /// in-process fake gateway.
    pub stripe_secret_key: Option<String>,
}

impl Config {
    pub fn from_env() -> Self {
        let port = env::var("PORT")
            .ok()
            .and_then(|p| p.parse::<u16>().ok())
            .unwrap_or(5000);

        let jwt_secret = env::var("JWT_SECRET").unwrap_or_else(|_| {
            tracing::warn!("JWT_SECRET not set; using insecure dev default");
            "dev-secret".to_string()
        });

        let stripe_secret_key = env::var("STRIPE_SECRET_KEY").ok().filter(|k| !k.is_empty());

        Self {
            listen_addr: format!("0.0.0.0:{port}"),
            jwt_secret,
            stripe_secret_key,
        }
    }
}
