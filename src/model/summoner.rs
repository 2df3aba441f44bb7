#[derive(Debug, Clone)]
pub struct SummonerProfile {
    pub id: String,
    pub account_id: String,
    pub level: u32,
    pub profile_icon_id: u32,
}
