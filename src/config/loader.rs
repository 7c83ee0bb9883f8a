//! Configuration loading from the environment.
//!
//! Every key has a documented default; a missing or unparseable value is
//! substituted silently and never blocks startup.

use crate::config::schema::AppConfig;

impl AppConfig {
    /// Build the configuration snapshot from the process environment.
    ///
    /// Reads a `.env` file first when one exists, then resolves each key
    /// against the real environment.
    pub fn from_env() -> Self {
        dotenv::dotenv().ok();
        Self::load_with(|key| std::env::var(key).ok())
    }

    /// Build the configuration from an arbitrary key resolver.
    ///
    /// An empty value is treated the same as an absent one, matching how
    /// operators unset variables by blanking them.
    pub fn load_with<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let defaults = Self::default();

        Self {
            port: get_parsed(&lookup, "PORT", defaults.port),
            environment: get(&lookup, "ENVIRONMENT", defaults.environment),
            database_url: get_optional(&lookup, "DATABASE_URL"),
            supabase_url: get(&lookup, "SUPABASE_URL", defaults.supabase_url),
            supabase_anon_key: get(&lookup, "SUPABASE_ANON_KEY", defaults.supabase_anon_key),
            jwt_secret: get(&lookup, "JWT_SECRET", defaults.jwt_secret),
            jwt_expiry_hours: get_parsed(&lookup, "JWT_EXPIRY_HOURS", defaults.jwt_expiry_hours),
            refresh_expiry_hours: get_parsed(
                &lookup,
                "REFRESH_EXPIRY_HOURS",
                defaults.refresh_expiry_hours,
            ),
            razorpay_key_id: get(&lookup, "RAZORPAY_KEY_ID", defaults.razorpay_key_id),
            razorpay_key_secret: get(&lookup, "RAZORPAY_KEY_SECRET", defaults.razorpay_key_secret),
            razorpay_webhook_secret: get(
                &lookup,
                "RAZORPAY_WEBHOOK_SECRET",
                defaults.razorpay_webhook_secret,
            ),
            fcm_server_key: get(&lookup, "FCM_SERVER_KEY", defaults.fcm_server_key),
            msg91_auth_key: get(&lookup, "MSG91_AUTH_KEY", defaults.msg91_auth_key),
            msg91_sender_id: get(&lookup, "MSG91_SENDER_ID", defaults.msg91_sender_id),
            msg91_flow_id: get(&lookup, "MSG91_FLOW_ID", defaults.msg91_flow_id),
            shutdown_grace_secs: get_parsed(
                &lookup,
                "SHUTDOWN_GRACE_SECS",
                defaults.shutdown_grace_secs,
            ),
        }
    }
}

fn get<F>(lookup: &F, key: &str, default: String) -> String
where
    F: Fn(&str) -> Option<String>,
{
    get_optional(lookup, key).unwrap_or(default)
}

fn get_optional<F>(lookup: &F, key: &str) -> Option<String>
where
    F: Fn(&str) -> Option<String>,
{
    lookup(key).filter(|value| !value.is_empty())
}

fn get_parsed<F, T>(lookup: &F, key: &str, default: T) -> T
where
    F: Fn(&str) -> Option<String>,
    T: std::str::FromStr,
{
    get_optional(lookup, key)
        .and_then(|value| value.parse().ok())
        .unwrap_or(default)
}
