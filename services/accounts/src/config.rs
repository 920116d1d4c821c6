/// Accounts service configuration loaded from environment variables.
#[derive(Debug)]
pub struct AccountsConfig {
    /// PostgreSQL connection URL.
    pub database_url: String,
    /// HMAC secret for signing session tokens.
    pub jwt_secret: String,
    /// Transactional mail API endpoint.
    pub mail_api_url: String,
    /// Key sent to the mail API in the `api-key` header.
    pub mail_api_key: String,
    /// Sender address on outgoing mail.
    pub mail_from_email: String,
    /// Sender display name (default "Aurum"). Env var: `MAIL_FROM_NAME`.
    pub mail_from_name: String,
    /// TCP port to listen on (default 8080). Env var: `ACCOUNTS_PORT`.
    pub accounts_port: u16,
    /// bcrypt cost factor (default 10). Env var: `BCRYPT_COST`.
    pub bcrypt_cost: u32,
}

impl AccountsConfig {
    pub fn from_env() -> Self {
        Self {
            database_url: std::env::var("DATABASE_URL").expect("DATABASE_URL"),
            jwt_secret: std::env::var("JWT_SECRET").expect("JWT_SECRET"),
            mail_api_url: std::env::var("MAIL_API_URL").expect("MAIL_API_URL"),
            mail_api_key: std::env::var("MAIL_API_KEY").expect("MAIL_API_KEY"),
            mail_from_email: std::env::var("MAIL_FROM_EMAIL").expect("MAIL_FROM_EMAIL"),
            mail_from_name: std::env::var("MAIL_FROM_NAME").unwrap_or_else(|_| "Aurum".to_owned()),
            accounts_port: std::env::var("ACCOUNTS_PORT")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(8080),
            bcrypt_cost: std::env::var("BCRYPT_COST")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(10),
        }
    }
}
