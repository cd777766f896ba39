use std::env;

#[derive(Debug, Clone)]
pub struct JwtConfig {
    pub secret_key: String,
    pub issuer: String,
    /// Access token lifetime in seconds.
    pub access_token_expiry: i64,
    /// Refresh token lifetime in seconds. Also bounds the blacklist TTL.
    pub refresh_token_expiry: i64,
}

impl JwtConfig {
    fn expiry_from_env(key: &str, default_secs: i64) -> i64 {
        match env::var(key) {
            Ok(raw) => raw
                .parse::<i64>()
                .unwrap_or_else(|_| panic!("Invalid {} value", key)),
            Err(_) => default_secs,
        }
    }

    /// Loads the token configuration from the environment. Misconfiguration
    /// is fatal at startup rather than a runtime surprise.
    pub fn from_env() -> Self {
        dotenvy::dotenv().ok();

        let secret_key = env::var("JWT_SECRET").expect("JWT_SECRET must be set");
        assert!(
            secret_key.len() >= 32,
            "JWT_SECRET must be at least 32 characters long for HS256"
        );

        // Defaults: 30 minute access tokens, 7 day refresh tokens.
        let access_token_expiry = Self::expiry_from_env("JWT_ACCESS_EXPIRY", 1800);
        let refresh_token_expiry = Self::expiry_from_env("JWT_REFRESH_EXPIRY", 604_800);

        assert!(
            (1..=86_400).contains(&access_token_expiry),
            "JWT_ACCESS_EXPIRY must be between 1 and 86400 seconds"
        );
        assert!(
            refresh_token_expiry > access_token_expiry,
            "JWT_REFRESH_EXPIRY must be greater than JWT_ACCESS_EXPIRY"
        );

        Self {
            secret_key,
            issuer: env::var("JWT_ISSUER").unwrap_or_else(|_| "Showcase".to_string()),
            access_token_expiry,
            refresh_token_expiry,
        }
    }
}
