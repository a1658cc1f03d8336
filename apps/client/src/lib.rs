//! Resume Analyzer client.
//!
//! Holds what the user entered, talks to the gateway, and turns a classification into
//! something a terminal can show. The binary in `main.rs` is a thin shell over this.

pub mod api;
pub mod models;
pub mod render;
pub mod state;
pub mod upload;

pub use api::{AnalyzeApi, ApiError, GatewayClient};
pub use models::{AnalysisResult, MatchEntry};
pub use state::{AnalyzerState, Phase};
pub use upload::{DropRejection, DroppedFile};
