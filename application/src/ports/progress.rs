//! Progress notification port
//!
//! Lets the presentation layer show activity while the interview waits on
//! the evaluation service or the report renderer.

use coach_domain::Model;

/// Callback for progress updates during an interview
pub trait EvaluationProgress: Send + Sync {
    /// Called right before the evaluation request is sent
    fn on_evaluation_start(&self, model: &Model, question_number: usize, total: usize);

    /// Called when the evaluation request finished
    fn on_evaluation_complete(&self, success: bool);

    /// Called when report rendering starts
    fn on_report_start(&self, _blocks: usize) {}

    /// Called when report rendering finished
    fn on_report_complete(&self, _success: bool) {}
}

/// No-op progress notifier for when progress reporting is not needed
pub struct NoProgress;

impl EvaluationProgress for NoProgress {
    fn on_evaluation_start(&self, _model: &Model, _question_number: usize, _total: usize) {}
    fn on_evaluation_complete(&self, _success: bool) {}
}
