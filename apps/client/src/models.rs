use serde::{Deserialize, Serialize};

/// Body of `POST /api/analyze`.
#[derive(Debug, Serialize)]
pub struct AnalysisRequest<'a> {
    pub text: &'a str,
}

/// A single category with its predicted probability (0.0 – 1.0).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MatchEntry {
    pub category: String,
    pub probability: f64,
}

/// Classification returned by the gateway. `top_matches` keeps the producer's order.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AnalysisResult {
    pub predicted_category: String,
    pub top_matches: Vec<MatchEntry>,
}

/// Error body of every non-2xx gateway response.
#[derive(Debug, Deserialize)]
pub struct ErrorBody {
    #[serde(default)]
    pub error: Option<String>,
}
