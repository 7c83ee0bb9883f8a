//! Configuration schema definitions.
//!
//! One immutable snapshot of every environment-derived setting the service
//! consumes. The third-party credential blocks (JWT, Razorpay, FCM, MSG91)
//! are loaded so that future handlers can take them from here, but no
//! implemented handler reads them yet.

/// Root configuration for the API server.
#[derive(Debug, Clone)]
pub struct AppConfig {
    /// TCP port the listener binds to.
    pub port: u16,

    /// Deployment environment name ("development", "production", ...).
    pub environment: String,

    /// Postgres connection string. `None` disables every
    /// datastore-dependent check; the server still starts.
    pub database_url: Option<String>,

    /// Supabase project URL.
    pub supabase_url: String,

    /// Supabase anonymous API key.
    pub supabase_anon_key: String,

    /// Secret used to sign access tokens.
    pub jwt_secret: String,

    /// Access token lifetime in hours.
    pub jwt_expiry_hours: i64,

    /// Refresh token lifetime in hours.
    pub refresh_expiry_hours: i64,

    /// Razorpay API key id.
    pub razorpay_key_id: String,

    /// Razorpay API key secret.
    pub razorpay_key_secret: String,

    /// Razorpay webhook signing secret.
    pub razorpay_webhook_secret: String,

    /// Firebase Cloud Messaging server key.
    pub fcm_server_key: String,

    /// MSG91 auth key (SMS).
    pub msg91_auth_key: String,

    /// MSG91 sender id.
    pub msg91_sender_id: String,

    /// MSG91 flow id.
    pub msg91_flow_id: String,

    /// Upper bound in seconds on draining in-flight requests at shutdown.
    pub shutdown_grace_secs: u64,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            port: 8080,
            environment: "development".to_string(),
            database_url: None,
            supabase_url: String::new(),
            supabase_anon_key: String::new(),
            jwt_secret: String::new(),
            jwt_expiry_hours: 1,
            refresh_expiry_hours: 168,
            razorpay_key_id: String::new(),
            razorpay_key_secret: String::new(),
            razorpay_webhook_secret: String::new(),
            fcm_server_key: String::new(),
            msg91_auth_key: String::new(),
            msg91_sender_id: String::new(),
            msg91_flow_id: String::new(),
            shutdown_grace_secs: 10,
        }
    }
}
