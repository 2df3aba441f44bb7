pub mod config;
pub mod http;
pub mod parsing;
pub mod proxy;
pub mod riotapi;
