use json::JsonValue;

use crate::model::account::RiotAccount;

use super::ParsingError;

pub fn parse_account(json: &JsonValue) -> Result<RiotAccount, ParsingError> {
    if let JsonValue::Object(obj) = json {
        let puuid = obj["puuid"]
            .as_str()
            .ok_or(ParsingError::InvalidField("puuid".into()))?;
        let game_name = obj["gameName"].as_str().map(str::to_string);
        let tag_line = obj["tagLine"].as_str().map(str::to_string);

        return Ok(RiotAccount {
            puuid: puuid.to_string(),
            game_name,
            tag_line,
        });
    }

    Err(ParsingError::InvalidField("root".into()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_full_account() {
        let payload = json::parse(r#"{"puuid":"abc-123","gameName":"nilejr","tagLine":"NA1"}"#).unwrap();
        let account = parse_account(&payload).unwrap();

        assert_eq!(account.puuid, "abc-123");
        assert_eq!(account.game_name_or_default(), "nilejr");
        assert_eq!(account.tag_line_or_default(), "NA1");
    }

    #[test]
    fn absent_name_and_tag_default_to_na() {
        let payload = json::parse(r#"{"puuid":"abc-123"}"#).unwrap();
        let account = parse_account(&payload).unwrap();

        assert_eq!(account.game_name_or_default(), "N/A");
        assert_eq!(account.tag_line_or_default(), "N/A");
    }

    #[test]
    fn missing_puuid_is_rejected() {
        let payload = json::parse(r#"{"gameName":"nilejr"}"#).unwrap();
        let error = parse_account(&payload).unwrap_err();

        assert!(matches!(error, ParsingError::InvalidField(field) if field == "puuid"));
    }
}
