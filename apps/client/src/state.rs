//! Analyzer state: what the user entered plus where the current request stands.
//!
//! The request lifecycle is a single tagged `Phase`, so a result and a loading indicator can
//! never be shown together. `submit` borrows the state mutably, which serializes submissions.

use tracing::{info, warn};

use crate::api::AnalyzeApi;
use crate::models::AnalysisResult;
use crate::upload::{accept_drop, placeholder_text, DropRejection, DroppedFile};

pub const EMPTY_INPUT_MESSAGE: &str = "Please enter resume text or upload a file";

#[derive(Debug, Clone, Default, PartialEq)]
pub enum Phase {
    #[default]
    Idle,
    Loading,
    Succeeded(AnalysisResult),
    Failed(String),
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct AnalyzerState {
    text: String,
    file: Option<DroppedFile>,
    phase: Phase,
}

impl AnalyzerState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn set_text(&mut self, text: impl Into<String>) {
        self.text = text.into();
    }

    pub fn file(&self) -> Option<&DroppedFile> {
        self.file.as_ref()
    }

    pub fn phase(&self) -> &Phase {
        &self.phase
    }

    pub fn is_loading(&self) -> bool {
        matches!(self.phase, Phase::Loading)
    }

    pub fn result(&self) -> Option<&AnalysisResult> {
        match &self.phase {
            Phase::Succeeded(result) => Some(result),
            _ => None,
        }
    }

    pub fn error(&self) -> Option<&str> {
        match &self.phase {
            Phase::Failed(message) => Some(message),
            _ => None,
        }
    }

    /// Whether the submit control is enabled.
    pub fn can_submit(&self) -> bool {
        !self.is_loading() && !self.text.trim().is_empty()
    }

    /// Takes a drop of files. On success the file is kept and `text` is replaced by a
    /// placeholder naming it; a rejected drop changes nothing.
    pub fn drop_files(&mut self, files: Vec<DroppedFile>) -> Result<(), DropRejection> {
        let file = accept_drop(files)?;
        self.text = placeholder_text(&file.name);
        self.file = Some(file);
        Ok(())
    }

    /// Runs one analysis. Blank text fails locally without calling `api`.
    pub async fn submit<A>(&mut self, api: &A) -> &Phase
    where
        A: AnalyzeApi + ?Sized,
    {
        self.submit_observed(api, |_| {}).await
    }

    /// `submit`, reporting each phase change to `observe` as it happens. A UI drives its
    /// progress indicator from the `Loading` report and clears it on the next one.
    pub async fn submit_observed<A, F>(&mut self, api: &A, mut observe: F) -> &Phase
    where
        A: AnalyzeApi + ?Sized,
        F: FnMut(&Phase),
    {
        if self.text.trim().is_empty() {
            self.phase = Phase::Failed(EMPTY_INPUT_MESSAGE.to_string());
            observe(&self.phase);
            return &self.phase;
        }

        let guard = LoadingGuard::engage(&mut self.phase);
        observe(&*guard.phase);
        let outcome = match api.analyze(&self.text).await {
            Ok(result) => {
                info!("Resume classified as {}", result.predicted_category);
                Phase::Succeeded(result)
            }
            Err(e) => {
                warn!("Analysis failed: {e:?}");
                Phase::Failed(e.to_string())
            }
        };
        guard.settle(outcome);
        observe(&self.phase);

        &self.phase
    }

    /// Back to the initial state, whatever the current one is.
    pub fn reset(&mut self) {
        *self = Self::default();
    }
}

/// Holds the phase at `Loading` for the duration of a request. If the request future is
/// dropped before settling, the phase falls back to `Idle`.
struct LoadingGuard<'a> {
    phase: &'a mut Phase,
}

impl<'a> LoadingGuard<'a> {
    fn engage(phase: &'a mut Phase) -> Self {
        *phase = Phase::Loading;
        Self { phase }
    }

    fn settle(mut self, outcome: Phase) {
        *self.phase = outcome;
    }
}

impl Drop for LoadingGuard<'_> {
    fn drop(&mut self) {
        if matches!(self.phase, Phase::Loading) {
            *self.phase = Phase::Idle;
        }
    }
}
