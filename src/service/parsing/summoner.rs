use json::JsonValue;

use crate::model::summoner::SummonerProfile;

use super::ParsingError;

pub fn parse_summoner(json: &JsonValue) -> Result<SummonerProfile, ParsingError> {
    if let JsonValue::Object(obj) = json {
        let id = obj["id"].as_str().ok_or(ParsingError::InvalidField("id".into()))?;
        let account_id = obj["accountId"]
            .as_str()
            .ok_or(ParsingError::InvalidField("accountId".into()))?;
        let level = obj["summonerLevel"]
            .as_u32()
            .ok_or(ParsingError::InvalidField("summonerLevel".into()))?;
        let profile_icon_id = obj["profileIconId"]
            .as_u32()
            .ok_or(ParsingError::InvalidField("profileIconId".into()))?;

        return Ok(SummonerProfile {
            id: id.to_string(),
            account_id: account_id.to_string(),
            level,
            profile_icon_id,
        });
    }

    Err(ParsingError::InvalidField("root".into()))
}
