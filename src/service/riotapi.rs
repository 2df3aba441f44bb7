use reqwest::blocking::Client;

use super::http::{self, ApiResponse, ClientInitError, RequestError, REQUEST_TIMEOUT};

const API_TOKEN_HEADER: &str = "X-Riot-Token";

/// Riot routes account-v1 through a regional host and summoner-v4 through
/// a platform host, so both bases are carried.
pub struct Routing {
    regional_base: String,
    platform_base: String,
}

impl Routing {
    pub fn new(region: &str, platform: &str) -> Self {
        Self {
            regional_base: format!("https://{}.api.riotgames.com", region),
            platform_base: format!("https://{}.api.riotgames.com", platform),
        }
    }

    #[cfg(test)]
    pub fn with_bases(regional_base: String, platform_base: String) -> Self {
        Self {
            regional_base,
            platform_base,
        }
    }

    pub fn account_by_riot_id(&self, game_name: &str, tag_line: &str) -> String {
        format!(
            "{}/riot/account/v1/accounts/by-riot-id/{}/{}",
            self.regional_base, game_name, tag_line
        )
    }

    pub fn summoner_by_puuid(&self, puuid: &str) -> String {
        format!(
            "{}/lol/summoner/v4/summoners/by-puuid/{}",
            self.platform_base, puuid
        )
    }
}

pub struct ApiClient {
    client: Client,
    api_key: String,
}

impl ApiClient {
    pub fn new(api_key: String) -> Result<Self, ClientInitError> {
        Ok(Self {
            client: http::build_client()?,
            api_key,
        })
    }

    pub fn get(&self, url: &str) -> Result<ApiResponse, RequestError> {
        let request = self.client.get(url).header(API_TOKEN_HEADER, &self.api_key);
        http::execute(request, REQUEST_TIMEOUT)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn account_url_uses_regional_host() {
        let routing = Routing::new("americas", "na1");
        assert_eq!(
            routing.account_by_riot_id("nilejr", "NA1"),
            "https://americas.api.riotgames.com/riot/account/v1/accounts/by-riot-id/nilejr/NA1"
        );
    }

    #[test]
    fn summoner_url_uses_platform_host() {
        let routing = Routing::new("americas", "na1");
        assert_eq!(
            routing.summoner_by_puuid("abc-123"),
            "https://na1.api.riotgames.com/lol/summoner/v4/summoners/by-puuid/abc-123"
        );
    }
}
