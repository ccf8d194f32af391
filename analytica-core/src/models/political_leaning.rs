use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum PoliticalLeaning {
    #[serde(rename = "Dark Blue")]
    DarkBlue,
    #[serde(rename = "Blue")]
    Blue,
    #[serde(rename = "Light Blue")]
    LightBlue,
    #[serde(rename = "Purple")]
    Purple,
    #[serde(rename = "Light Red")]
    LightRed,
    #[serde(rename = "Red")]
    Red,
    #[serde(rename = "Dark Red")]
    DarkRed,
}

impl PoliticalLeaning {
    pub fn all() -> &'static [PoliticalLeaning] {
        &[
            Self::DarkBlue,
            Self::Blue,
            Self::LightBlue,
            Self::Purple,
            Self::LightRed,
            Self::Red,
            Self::DarkRed,
        ]
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::DarkBlue => "Dark Blue",
            Self::Blue => "Blue",
            Self::LightBlue => "Light Blue",
            Self::Purple => "Purple",
            Self::LightRed => "Light Red",
            Self::Red => "Red",
            Self::DarkRed => "Dark Red",
        }
    }

    pub fn parse(s: &str) -> Option<Self> {
        Self::all().iter().copied().find(|leaning| leaning.as_str() == s)
    }

    /// A leaning counts as red when its label contains "Red".
    pub fn is_red(&self) -> bool {
        self.as_str().contains("Red")
    }
}
