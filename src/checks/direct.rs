use crate::model::account::{PlayerIdentity, RiotAccount};
use crate::model::summoner::SummonerProfile;
use crate::service::http::RequestError;
use crate::service::parsing::{account::parse_account, summoner::parse_summoner, ParsingError};
use crate::service::riotapi::{ApiClient, Routing};

use super::report;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CheckStep {
    AccountLookup,
    SummonerLookup,
}

#[derive(Debug)]
pub enum DirectOutcome {
    Passed(SummonerProfile),
    KeyRejected,
    AccountNotFound,
    UnexpectedStatus {
        step: CheckStep,
        status: u16,
        body: String,
    },
    RequestFailed {
        step: CheckStep,
        error: RequestError,
    },
    MalformedPayload {
        step: CheckStep,
        error: ParsingError,
    },
}

impl DirectOutcome {
    pub fn passed(&self) -> bool {
        matches!(self, DirectOutcome::Passed(_))
    }
}

/// Validates the API key directly against the Riot API: resolve the account
/// by Riot ID first, then fetch the summoner behind the returned PUUID.
pub struct DirectCheck<'a> {
    api: &'a ApiClient,
    routing: &'a Routing,
}

impl<'a> DirectCheck<'a> {
    pub fn new(api: &'a ApiClient, routing: &'a Routing) -> Self {
        Self { api, routing }
    }

    pub fn run(&self, identity: &PlayerIdentity) -> DirectOutcome {
        report::step(&format!("Resolving account for {}", identity));

        let url = self.routing.account_by_riot_id(&identity.game_name, &identity.tag_line);
        let response = match self.api.get(&url) {
            Ok(response) => response,
            Err(error) => {
                report::fail(&format!("{}", error));
                return DirectOutcome::RequestFailed {
                    step: CheckStep::AccountLookup,
                    error,
                };
            }
        };

        match response.status {
            200 => {}
            403 => {
                report::fail("API key is invalid or expired (403 Forbidden)");
                report::hint("Check your key at https://developer.riotgames.com/");
                return DirectOutcome::KeyRejected;
            }
            404 => {
                report::fail(&format!("No account found for {}", identity));
                return DirectOutcome::AccountNotFound;
            }
            status => {
                report::fail(&format!("Unexpected error: {}", status));
                report::hint(&response.body);
                return DirectOutcome::UnexpectedStatus {
                    step: CheckStep::AccountLookup,
                    status,
                    body: response.body,
                };
            }
        }

        let account = match decode_account(&response.body) {
            Ok(account) => account,
            Err(error) => {
                report::fail(&format!("Malformed account payload: {}", error));
                return DirectOutcome::MalformedPayload {
                    step: CheckStep::AccountLookup,
                    error,
                };
            }
        };

        report::pass("Account data retrieved");
        report::field("PUUID", &account.puuid);
        report::field("Game Name", account.game_name_or_default());
        report::field("Tag Line", account.tag_line_or_default());

        report::step("Fetching summoner data by PUUID");

        let url = self.routing.summoner_by_puuid(&account.puuid);
        let response = match self.api.get(&url) {
            Ok(response) => response,
            Err(error) => {
                report::fail(&format!("{}", error));
                return DirectOutcome::RequestFailed {
                    step: CheckStep::SummonerLookup,
                    error,
                };
            }
        };

        if response.status != 200 {
            report::fail(&format!("Failed to get summoner data: {}", response.status));
            report::hint(&response.body);
            return DirectOutcome::UnexpectedStatus {
                step: CheckStep::SummonerLookup,
                status: response.status,
                body: response.body,
            };
        }

        let summoner = match decode_summoner(&response.body) {
            Ok(summoner) => summoner,
            Err(error) => {
                report::fail(&format!("Malformed summoner payload: {}", error));
                return DirectOutcome::MalformedPayload {
                    step: CheckStep::SummonerLookup,
                    error,
                };
            }
        };

        report::pass("Summoner data retrieved");
        report::field("Summoner ID", &summoner.id);
        report::field("Account ID", &summoner.account_id);
        report::field("Summoner Level", summoner.level);
        report::field("Profile Icon ID", summoner.profile_icon_id);

        DirectOutcome::Passed(summoner)
    }
}

fn decode_account(body: &str) -> Result<RiotAccount, ParsingError> {
    let payload = json::parse(body)?;
    parse_account(&payload)
}

fn decode_summoner(body: &str) -> Result<SummonerProfile, ParsingError> {
    let payload = json::parse(body)?;
    parse_summoner(&payload)
}

#[cfg(test)]
mod tests {
    use httpmock::prelude::*;

    use super::*;

    const ACCOUNT_BODY: &str = r#"{"puuid":"abc-123","gameName":"nilejr","tagLine":"NA1"}"#;
    const SUMMONER_BODY: &str =
        r#"{"id":"s-1","accountId":"a-1","puuid":"abc-123","summonerLevel":311,"profileIconId":4655}"#;

    fn harness(server: &MockServer) -> (ApiClient, Routing) {
        let api = ApiClient::new("RGAPI-test-key".to_string()).unwrap();
        let routing = Routing::with_bases(server.base_url(), server.base_url());
        (api, routing)
    }

    fn identity() -> PlayerIdentity {
        PlayerIdentity {
            game_name: "nilejr".to_string(),
            tag_line: "NA1".to_string(),
        }
    }

    #[test]
    fn passes_on_two_successful_lookups() {
        let server = MockServer::start();
        let account = server.mock(|when, then| {
            when.method(GET)
                .path("/riot/account/v1/accounts/by-riot-id/nilejr/NA1")
                .header("X-Riot-Token", "RGAPI-test-key");
            then.status(200).body(ACCOUNT_BODY);
        });
        let summoner = server.mock(|when, then| {
            when.method(GET)
                .path("/lol/summoner/v4/summoners/by-puuid/abc-123")
                .header("X-Riot-Token", "RGAPI-test-key");
            then.status(200).body(SUMMONER_BODY);
        });

        let (api, routing) = harness(&server);
        let outcome = DirectCheck::new(&api, &routing).run(&identity());

        assert!(outcome.passed());
        account.assert();
        summoner.assert();
    }

    #[test]
    fn rejected_key_skips_summoner_lookup() {
        let server = MockServer::start();
        let account = server.mock(|when, then| {
            when.method(GET)
                .path("/riot/account/v1/accounts/by-riot-id/nilejr/NA1");
            then.status(403).body(r#"{"status":{"status_code":403}}"#);
        });
        let summoner = server.mock(|when, then| {
            when.method(GET)
                .path("/lol/summoner/v4/summoners/by-puuid/abc-123");
            then.status(200).body(SUMMONER_BODY);
        });

        let (api, routing) = harness(&server);
        let outcome = DirectCheck::new(&api, &routing).run(&identity());

        assert!(matches!(outcome, DirectOutcome::KeyRejected));
        account.assert();
        assert_eq!(summoner.hits(), 0);
    }

    #[test]
    fn unknown_identity_skips_summoner_lookup() {
        let server = MockServer::start();
        server.mock(|when, then| {
            when.method(GET)
                .path("/riot/account/v1/accounts/by-riot-id/nilejr/NA1");
            then.status(404).body(r#"{"status":{"status_code":404}}"#);
        });
        let summoner = server.mock(|when, then| {
            when.method(GET)
                .path("/lol/summoner/v4/summoners/by-puuid/abc-123");
            then.status(200).body(SUMMONER_BODY);
        });

        let (api, routing) = harness(&server);
        let outcome = DirectCheck::new(&api, &routing).run(&identity());

        assert!(matches!(outcome, DirectOutcome::AccountNotFound));
        assert_eq!(summoner.hits(), 0);
    }

    #[test]
    fn summoner_failure_carries_status_code() {
        let server = MockServer::start();
        server.mock(|when, then| {
            when.method(GET)
                .path("/riot/account/v1/accounts/by-riot-id/nilejr/NA1");
            then.status(200).body(ACCOUNT_BODY);
        });
        server.mock(|when, then| {
            when.method(GET)
                .path("/lol/summoner/v4/summoners/by-puuid/abc-123");
            then.status(500).body("internal error");
        });

        let (api, routing) = harness(&server);
        let outcome = DirectCheck::new(&api, &routing).run(&identity());

        match outcome {
            DirectOutcome::UnexpectedStatus { step, status, body } => {
                assert_eq!(step, CheckStep::SummonerLookup);
                assert_eq!(status, 500);
                assert_eq!(body, "internal error");
            }
            other => panic!("Expected UnexpectedStatus, got {:?}", other),
        }
    }

    #[test]
    fn account_without_puuid_short_circuits() {
        let server = MockServer::start();
        server.mock(|when, then| {
            when.method(GET)
                .path("/riot/account/v1/accounts/by-riot-id/nilejr/NA1");
            then.status(200).body(r#"{"gameName":"nilejr"}"#);
        });
        let summoner = server.mock(|when, then| {
            when.method(GET)
                .path("/lol/summoner/v4/summoners/by-puuid/abc-123");
            then.status(200).body(SUMMONER_BODY);
        });

        let (api, routing) = harness(&server);
        let outcome = DirectCheck::new(&api, &routing).run(&identity());

        assert!(matches!(
            outcome,
            DirectOutcome::MalformedPayload {
                step: CheckStep::AccountLookup,
                ..
            }
        ));
        assert_eq!(summoner.hits(), 0);
    }

    #[test]
    fn unreachable_host_reports_request_failure() {
        // Nothing listens on port 1, the connection is refused immediately
        let api = ApiClient::new("RGAPI-test-key".to_string()).unwrap();
        let routing = Routing::with_bases(
            "http://127.0.0.1:1".to_string(),
            "http://127.0.0.1:1".to_string(),
        );

        let outcome = DirectCheck::new(&api, &routing).run(&identity());

        assert!(matches!(
            outcome,
            DirectOutcome::RequestFailed {
                step: CheckStep::AccountLookup,
                ..
            }
        ));
    }
}
