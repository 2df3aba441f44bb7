use std::fmt;

pub mod account;
pub mod envelope;
pub mod summoner;

#[derive(Debug)]
pub enum ParsingError {
    InvalidJson(json::Error),
    InvalidField(String),
}

impl fmt::Display for ParsingError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            ParsingError::InvalidJson(err) => write!(f, "Response is not valid JSON: {}", err),
            ParsingError::InvalidField(field) => write!(f, "Missing or invalid field '{}'", field),
        }
    }
}

impl From<json::Error> for ParsingError {
    fn from(error: json::Error) -> Self {
        Self::InvalidJson(error)
    }
}
