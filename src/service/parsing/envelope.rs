use json::JsonValue;

use crate::model::proxy::{DebugInfo, ProfileData};

use super::{account::parse_account, ParsingError};

/// Proxy responses are wrapped in `{ "success": bool, "data": {...} }`.
pub fn envelope_success(json: &JsonValue) -> Result<bool, ParsingError> {
    if let JsonValue::Object(obj) = json {
        return obj["success"]
            .as_bool()
            .ok_or(ParsingError::InvalidField("success".into()));
    }

    Err(ParsingError::InvalidField("root".into()))
}

pub fn parse_debug_info(json: &JsonValue) -> Result<DebugInfo, ParsingError> {
    if let JsonValue::Object(obj) = json {
        let has_api_key = obj["hasApiKey"]
            .as_bool()
            .ok_or(ParsingError::InvalidField("hasApiKey".into()))?;
        let api_key_length = obj["apiKeyLength"]
            .as_u32()
            .ok_or(ParsingError::InvalidField("apiKeyLength".into()))?;

        return Ok(DebugInfo {
            has_api_key,
            api_key_length,
        });
    }

    Err(ParsingError::InvalidField("root".into()))
}

/// Profile data nests the raw account payload next to the summoner payload;
/// only the fields the check reports are required from the summoner side.
pub fn parse_profile(json: &JsonValue) -> Result<ProfileData, ParsingError> {
    if let JsonValue::Object(obj) = json {
        let account = parse_account(&obj["account"])?;

        let summoner = &obj["summoner"];
        let summoner_level = summoner["summonerLevel"]
            .as_u32()
            .ok_or(ParsingError::InvalidField("summonerLevel".into()))?;
        let profile_icon_id = summoner["profileIconId"]
            .as_u32()
            .ok_or(ParsingError::InvalidField("profileIconId".into()))?;

        return Ok(ProfileData {
            account,
            summoner_level,
            profile_icon_id,
        });
    }

    Err(ParsingError::InvalidField("root".into()))
}
