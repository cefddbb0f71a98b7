use serde::{Deserialize, Serialize};

/// Requested summary size. Travels as the integer `option` (1..=4).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(into = "u8", try_from = "u8")]
pub enum SummaryLength {
    #[default]
    Short,
    Medium,
    Long,
    /// Exact word count chosen by the user.
    Custom,
}

impl SummaryLength {
    pub const ALL: [SummaryLength; 4] = [
        SummaryLength::Short,
        SummaryLength::Medium,
        SummaryLength::Long,
        SummaryLength::Custom,
    ];

    pub fn option(self) -> u8 {
        match self {
            SummaryLength::Short => 1,
            SummaryLength::Medium => 2,
            SummaryLength::Long => 3,
            SummaryLength::Custom => 4,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            SummaryLength::Short => "Short",
            SummaryLength::Medium => "Medium",
            SummaryLength::Long => "Long",
            SummaryLength::Custom => "Custom",
        }
    }
}

impl From<SummaryLength> for u8 {
    fn from(length: SummaryLength) -> Self {
        length.option()
    }
}

impl TryFrom<u8> for SummaryLength {
    type Error = String;

    fn try_from(option: u8) -> Result<Self, Self::Error> {
        SummaryLength::ALL
            .into_iter()
            .find(|l| l.option() == option)
            .ok_or_else(|| format!("unknown summary option {}", option))
    }
}

/// Body of `POST /process_video`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProcessVideoRequest {
    pub url: String,
    pub option: SummaryLength,
    pub word_length: u32,
    pub check_grammar: bool,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProcessVideoResponse {
    pub summary: String,
}
