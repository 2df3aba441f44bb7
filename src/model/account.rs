use std::fmt;

/// Riot ID the checks resolve, e.g. "nilejr#NA1".
#[derive(Debug, Clone)]
pub struct PlayerIdentity {
    pub game_name: String,
    pub tag_line: String,
}

impl fmt::Display for PlayerIdentity {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}#{}", self.game_name, self.tag_line)
    }
}

#[derive(Debug, Clone)]
pub struct RiotAccount {
    pub puuid: String,
    pub game_name: Option<String>,
    pub tag_line: Option<String>,
}

impl RiotAccount {
    pub fn game_name_or_default(&self) -> &str {
        self.game_name.as_deref().unwrap_or("N/A")
    }

    pub fn tag_line_or_default(&self) -> &str {
        self.tag_line.as_deref().unwrap_or("N/A")
    }
}
