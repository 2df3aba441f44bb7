use json::JsonValue;

use crate::model::account::{PlayerIdentity, RiotAccount};
use crate::model::proxy::{DebugInfo, ProfileData};
use crate::service::http::RequestError;
use crate::service::parsing::{
    account::parse_account,
    envelope::{envelope_success, parse_debug_info, parse_profile},
    ParsingError,
};
use crate::service::proxy::ProxyClient;

use super::report;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ProxyStep {
    Debug,
    Account,
    Profile,
}

#[derive(Debug)]
pub enum ProxyOutcome {
    Passed,
    Unreachable,
    StepFailed(ProxyStep),
}

impl ProxyOutcome {
    pub fn passed(&self) -> bool {
        matches!(self, ProxyOutcome::Passed)
    }
}

/// Best-effort re-validation through the local proxy server. Each step only
/// runs if the previous one succeeded.
pub struct ProxyCheck<'a> {
    proxy: &'a ProxyClient,
}

impl<'a> ProxyCheck<'a> {
    pub fn new(proxy: &'a ProxyClient) -> Self {
        Self { proxy }
    }

    pub fn run(&self, platform: &str, identity: &PlayerIdentity) -> ProxyOutcome {
        report::step("Probing local proxy server");

        let response = match self.proxy.debug() {
            Ok(response) => response,
            Err(error) => return transport_failure(ProxyStep::Debug, error),
        };
        if response.status != 200 {
            report::fail(&format!("Proxy server not responding: {}", response.status));
            return ProxyOutcome::StepFailed(ProxyStep::Debug);
        }
        match decode_debug(&response.body) {
            Ok(info) => {
                report::pass("Proxy server is running");
                report::field("Has API Key", info.has_api_key);
                report::field("API Key Length", info.api_key_length);
            }
            Err(error) => {
                report::fail(&format!("Malformed debug payload: {}", error));
                return ProxyOutcome::StepFailed(ProxyStep::Debug);
            }
        }

        report::step("Checking proxy account endpoint");

        let response = match self.proxy.account(platform, &identity.game_name, &identity.tag_line) {
            Ok(response) => response,
            Err(error) => return transport_failure(ProxyStep::Account, error),
        };
        if response.status != 200 {
            report::fail(&format!("Account endpoint failed: {}", response.status));
            report::hint(&response.body);
            return ProxyOutcome::StepFailed(ProxyStep::Account);
        }
        match decode_account_envelope(&response.body) {
            Ok(Some(account)) => {
                report::pass("Account endpoint working");
                report::field("PUUID", &account.puuid);
                report::field("Game Name", account.game_name_or_default());
                report::field("Tag Line", account.tag_line_or_default());
            }
            Ok(None) => {
                report::fail("Account endpoint reported a failure");
                return ProxyOutcome::StepFailed(ProxyStep::Account);
            }
            Err(error) => {
                report::fail(&format!("Malformed account envelope: {}", error));
                return ProxyOutcome::StepFailed(ProxyStep::Account);
            }
        }

        report::step("Checking proxy profile endpoint");

        let response = match self.proxy.profile(platform, &identity.game_name, &identity.tag_line) {
            Ok(response) => response,
            Err(error) => return transport_failure(ProxyStep::Profile, error),
        };
        if response.status != 200 {
            report::fail(&format!("Profile endpoint failed: {}", response.status));
            report::hint(&response.body);
            return ProxyOutcome::StepFailed(ProxyStep::Profile);
        }
        match decode_profile_envelope(&response.body) {
            Ok(Some(profile)) => {
                report::pass("Complete profile endpoint working");
                report::field("Account PUUID", &profile.account.puuid);
                report::field("Summoner Level", profile.summoner_level);
                report::field("Profile Icon ID", profile.profile_icon_id);
            }
            Ok(None) => {
                report::fail("Profile endpoint reported a failure");
                return ProxyOutcome::StepFailed(ProxyStep::Profile);
            }
            Err(error) => {
                report::fail(&format!("Malformed profile envelope: {}", error));
                return ProxyOutcome::StepFailed(ProxyStep::Profile);
            }
        }

        ProxyOutcome::Passed
    }
}

fn transport_failure(step: ProxyStep, error: RequestError) -> ProxyOutcome {
    if error.is_connection_failure() {
        report::fail("Cannot connect to the local proxy server");
        report::hint("Make sure the proxy server is running on the configured base address");
        ProxyOutcome::Unreachable
    } else {
        report::fail(&format!("{}", error));
        ProxyOutcome::StepFailed(step)
    }
}

fn decode_debug(body: &str) -> Result<DebugInfo, ParsingError> {
    let payload = json::parse(body)?;
    parse_debug_info(&payload)
}

/// Ok(None) means the envelope parsed but carried `success: false`.
fn decode_account_envelope(body: &str) -> Result<Option<RiotAccount>, ParsingError> {
    let payload = json::parse(body)?;
    if !envelope_success(&payload)? {
        return Ok(None);
    }
    Ok(Some(parse_account(data(&payload))?))
}

fn decode_profile_envelope(body: &str) -> Result<Option<ProfileData>, ParsingError> {
    let payload = json::parse(body)?;
    if !envelope_success(&payload)? {
        return Ok(None);
    }
    Ok(Some(parse_profile(data(&payload))?))
}

fn data(payload: &JsonValue) -> &JsonValue {
    &payload["data"]
}
