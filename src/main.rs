use chrono::Local;

use crate::checks::direct::{DirectCheck, DirectOutcome};
use crate::checks::proxy::{ProxyCheck, ProxyOutcome};
use crate::checks::report;
use crate::model::account::PlayerIdentity;
use crate::service::config::Config;
use crate::service::proxy::ProxyClient;
use crate::service::riotapi::{ApiClient, Routing};

mod checks;
mod model;
mod service;

fn main() {
    let config = Config::load();
    let identity = config.identity();

    report::banner(&format!(
        "Riot API key check - {}",
        Local::now().format("%Y-%m-%d %H:%M:%S")
    ));

    let direct = run_direct_check(&config, &identity);
    let proxy = run_proxy_check(&config, &identity);

    report::banner("Summary");
    match &direct {
        Some(outcome) if outcome.passed() => {
            report::pass("Direct API check passed, the key is working")
        }
        _ => report::fail("Direct API check failed, check your key and configuration"),
    }
    match &proxy {
        Some(outcome) if outcome.passed() => report::pass("Local proxy check passed"),
        Some(ProxyOutcome::Unreachable) => report::fail("Local proxy server is not reachable"),
        _ => report::fail("Local proxy check failed"),
    }
}

fn run_direct_check(config: &Config, identity: &PlayerIdentity) -> Option<DirectOutcome> {
    let api_key = match &config.api_key {
        Some(key) => key.clone(),
        None => {
            report::fail("RIOT_API_KEY not found in the environment");
            report::hint("Set it in a .env file next to the binary or export it");
            return None;
        }
    };
    report::pass(&format!("API key found (length: {})", api_key.len()));

    let api = match ApiClient::new(api_key) {
        Ok(api) => api,
        Err(error) => {
            report::fail(&format!("{}", error));
            return None;
        }
    };
    let routing = Routing::new(&config.region, &config.platform);

    Some(DirectCheck::new(&api, &routing).run(identity))
}

fn run_proxy_check(config: &Config, identity: &PlayerIdentity) -> Option<ProxyOutcome> {
    let proxy = match ProxyClient::new(&config.proxy_base_url) {
        Ok(proxy) => proxy,
        Err(error) => {
            report::fail(&format!("{}", error));
            return None;
        }
    };

    Some(ProxyCheck::new(&proxy).run(&config.platform, identity))
}
