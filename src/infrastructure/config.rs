use dotenvy::dotenv;
use std::env;

/// Where the original page relied on a dev-server proxy to rewrite `/api`,
/// the client talks to the record service directly; this is the full base
/// URL including the service prefix.
const DEFAULT_API_URL: &str = "http://localhost:45000/api/Record";

#[derive(Clone)]
pub struct Config {
    pub api_base_url: String,
}

impl Config {
    pub fn from_env() -> Self {
        dotenv().ok();

        Self {
            api_base_url: env::var("EMPREC_API_URL")
                .unwrap_or_else(|_| DEFAULT_API_URL.to_string()),
        }
    }
}
