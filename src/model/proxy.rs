use super::account::RiotAccount;

/// Payload of the proxy's /debug endpoint.
#[derive(Debug, Clone)]
pub struct DebugInfo {
    pub has_api_key: bool,
    pub api_key_length: u32,
}

/// Payload of the proxy's /profile endpoint.
#[derive(Debug, Clone)]
pub struct ProfileData {
    pub account: RiotAccount,
    pub summoner_level: u32,
    pub profile_icon_id: u32,
}
