use std::env;

use crate::model::account::PlayerIdentity;

const DEFAULT_GAME_NAME: &str = "nilejr";
const DEFAULT_TAG_LINE: &str = "NA1";
const DEFAULT_REGION: &str = "americas";
const DEFAULT_PLATFORM: &str = "na1";
const DEFAULT_PROXY_BASE_URL: &str = "http://localhost:4000/api";

/// Startup configuration, read once. A missing RIOT_API_KEY only fails
/// the direct API check, so it stays optional here.
pub struct Config {
    pub api_key: Option<String>,
    pub game_name: String,
    pub tag_line: String,
    pub region: String,
    pub platform: String,
    pub proxy_base_url: String,
}

impl Config {
    pub fn load() -> Self {
        // Real environment wins over .env entries
        dotenvy::dotenv().ok();

        Self {
            api_key: env::var("RIOT_API_KEY").ok().filter(|key| !key.is_empty()),
            game_name: env_or("CHECK_GAME_NAME", DEFAULT_GAME_NAME),
            tag_line: env_or("CHECK_TAG_LINE", DEFAULT_TAG_LINE),
            region: env_or("CHECK_REGION", DEFAULT_REGION),
            platform: env_or("CHECK_PLATFORM", DEFAULT_PLATFORM),
            proxy_base_url: env_or("PROXY_BASE_URL", DEFAULT_PROXY_BASE_URL),
        }
    }

    pub fn identity(&self) -> PlayerIdentity {
        PlayerIdentity {
            game_name: self.game_name.clone(),
            tag_line: self.tag_line.clone(),
        }
    }
}

fn env_or(name: &str, default: &str) -> String {
    env::var(name)
        .ok()
        .filter(|value| !value.is_empty())
        .unwrap_or_else(|| default.to_string())
}
