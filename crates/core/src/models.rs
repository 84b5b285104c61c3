use serde::{Deserialize, Serialize};

/// How a search string is sent to the remote API.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub enum QueryMode {
    ByIdentifier,
    ByName,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct ReviewRecord {
    pub course: Option<String>,
    pub comment: Option<String>,
    pub would_take_again: Option<bool>,
    pub difficulty_rating: Option<f64>,
    pub helpful_rating: Option<f64>,
    pub clarity_rating: Option<f64>,
    pub date: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct ProfessorRecord {
    pub id: String,
    pub legacy_id: Option<i64>,
    pub first_name: String,
    pub last_name: String,
    pub department: Option<String>,
    pub school_name: Option<String>,
    pub avg_rating: Option<f64>,
    pub avg_difficulty: Option<f64>,
    /// Raw value from the API; `-1` means not available.
    pub would_take_again_percent: Option<f64>,
    pub num_ratings: u32,
    pub reviews: Vec<ReviewRecord>,
}

pub const WOULD_TAKE_AGAIN_UNAVAILABLE: f64 = -1.0;

impl ProfessorRecord {
    pub fn full_name(&self) -> String {
        format!("{} {}", self.first_name, self.last_name)
            .trim()
            .to_string()
    }

    pub fn would_take_again(&self) -> Option<f64> {
        self.would_take_again_percent
            .filter(|percent| *percent != WOULD_TAKE_AGAIN_UNAVAILABLE)
    }
}
