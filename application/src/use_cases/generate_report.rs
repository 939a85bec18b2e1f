//! Generate Report use case
//!
//! Compiles a completed session into a [`ReportDocument`] and renders it.
//! Rendering is CPU-bound, so it runs on the blocking pool.

use crate::ports::conversation_logger::{
    ConversationEvent, ConversationLogger, NoConversationLogger,
};
use crate::ports::progress::{EvaluationProgress, NoProgress};
use crate::ports::report_renderer::{RenderError, ReportRenderer};
use chrono::NaiveDate;
use coach_domain::{InterviewSession, InterviewState, ReportDocument, report_filename};
use std::sync::Arc;
use thiserror::Error;
use tracing::{info, warn};

#[derive(Error, Debug)]
pub enum GenerateReportError {
    #[error("The report is available once every question is answered (session is {0})")]
    NotCompleted(InterviewState),

    #[error("Report rendering failed: {0}")]
    Render(#[from] RenderError),

    #[error("Report rendering task failed: {0}")]
    Task(String),
}

/// A rendered report, ready to be offered for download
#[derive(Debug, Clone)]
pub struct GeneratedReport {
    /// Suggested file name
    pub filename: String,
    pub mime_type: &'static str,
    pub bytes: Vec<u8>,
    /// Number of question blocks in the report
    pub blocks: usize,
}

/// Use case for rendering the final report
pub struct GenerateReportUseCase<R: ReportRenderer + 'static> {
    renderer: Arc<R>,
    conversation_logger: Arc<dyn ConversationLogger>,
}

impl<R: ReportRenderer + 'static> GenerateReportUseCase<R> {
    pub fn new(renderer: Arc<R>) -> Self {
        Self {
            renderer,
            conversation_logger: Arc::new(NoConversationLogger),
        }
    }

    pub fn with_conversation_logger(mut self, logger: Arc<dyn ConversationLogger>) -> Self {
        self.conversation_logger = logger;
        self
    }

    /// Execute the use case with default (no-op) progress
    pub async fn execute(
        &self,
        session: &InterviewSession,
        date: NaiveDate,
    ) -> Result<GeneratedReport, GenerateReportError> {
        self.execute_with_progress(session, date, &NoProgress).await
    }

    /// Render the report for a completed session.
    ///
    /// The session is only read; a failure leaves nothing behind.
    pub async fn execute_with_progress(
        &self,
        session: &InterviewSession,
        date: NaiveDate,
        progress: &dyn EvaluationProgress,
    ) -> Result<GeneratedReport, GenerateReportError> {
        if !session.is_completed() {
            return Err(GenerateReportError::NotCompleted(session.state()));
        }

        let document = ReportDocument::from_session(session, date);
        let blocks = document.blocks.len();
        info!("Rendering report with {} question blocks", blocks);
        progress.on_report_start(blocks);

        let renderer = Arc::clone(&self.renderer);
        let result = tokio::task::spawn_blocking(move || renderer.render(&document))
            .await
            .map_err(|e| GenerateReportError::Task(e.to_string()))
            .and_then(|rendered| rendered.map_err(GenerateReportError::from));
        progress.on_report_complete(result.is_ok());

        let bytes = match result {
            Ok(bytes) => bytes,
            Err(e) => {
                warn!("Report rendering failed: {}", e);
                return Err(e);
            }
        };

        let filename = report_filename(session.domain());
        self.conversation_logger.log(ConversationEvent::new(
            "report_generated",
            serde_json::json!({
                "filename": filename,
                "bytes": bytes.len(),
                "blocks": blocks,
            }),
        ));

        Ok(GeneratedReport {
            filename,
            mime_type: self.renderer.mime_type(),
            bytes,
            blocks,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use coach_domain::{Answer, InterviewDomain};
    use std::sync::Mutex;

    /// Renders the document as plain text so tests can inspect it.
    struct TextRenderer {
        rendered: Mutex<Vec<ReportDocument>>,
    }

    impl TextRenderer {
        fn new() -> Self {
            Self {
                rendered: Mutex::new(Vec::new()),
            }
        }
    }

    impl ReportRenderer for TextRenderer {
        fn mime_type(&self) -> &'static str {
            "text/plain"
        }

        fn render(&self, document: &ReportDocument) -> Result<Vec<u8>, RenderError> {
            self.rendered.lock().unwrap().push(document.clone());
            let mut out = format!("{}\n", document.cover.title);
            for block in &document.blocks {
                out.push_str(&format!("{}\n{}\n{}\n", block.heading(), block.answer, block.evaluation));
            }
            Ok(out.into_bytes())
        }
    }

    struct FailingRenderer;

    impl ReportRenderer for FailingRenderer {
        fn mime_type(&self) -> &'static str {
            "application/pdf"
        }

        fn render(&self, _document: &ReportDocument) -> Result<Vec<u8>, RenderError> {
            Err(RenderError::UnrenderableCharacter {
                ch: '\u{7}',
                field: "feedback".to_string(),
            })
        }
    }

    fn date() -> NaiveDate {
        NaiveDate::from_ymd_opt(2025, 1, 15).unwrap()
    }

    fn completed_session(domain: InterviewDomain, evaluation: &str) -> InterviewSession {
        let mut session = InterviewSession::new(domain);
        while !session.is_completed() {
            session
                .record_answer(Answer::try_new("My answer").unwrap(), evaluation)
                .unwrap();
            session.advance().unwrap();
        }
        session
    }

    #[tokio::test]
    async fn test_report_requires_completed_session() {
        let use_case = GenerateReportUseCase::new(Arc::new(TextRenderer::new()));
        let session = InterviewSession::new(InterviewDomain::Marketing);

        let err = use_case.execute(&session, date()).await.unwrap_err();
        assert!(matches!(
            err,
            GenerateReportError::NotCompleted(InterviewState::AwaitingAnswer)
        ));
    }

    #[tokio::test]
    async fn test_report_for_completed_marketing_session() {
        let renderer = Arc::new(TextRenderer::new());
        let use_case = GenerateReportUseCase::new(Arc::clone(&renderer));
        let session = completed_session(InterviewDomain::Marketing, "OK feedback");

        let report = use_case.execute(&session, date()).await.unwrap();
        assert_eq!(report.filename, "interview_report_Marketing.pdf");
        assert_eq!(report.mime_type, "text/plain");
        assert_eq!(report.blocks, 3);

        let text = String::from_utf8(report.bytes).unwrap();
        assert_eq!(text.matches("OK feedback").count(), 3);

        let rendered = renderer.rendered.lock().unwrap();
        assert_eq!(rendered.len(), 1);
        assert_eq!(rendered[0].cover.date, "January 15, 2025");
        let numbers: Vec<usize> = rendered[0].blocks.iter().map(|b| b.number).collect();
        assert_eq!(numbers, vec![1, 2, 3]);
    }

    #[tokio::test]
    async fn test_render_failure_is_reported() {
        let use_case = GenerateReportUseCase::new(Arc::new(FailingRenderer));
        let session = completed_session(InterviewDomain::DataScience, "fine");

        let err = use_case.execute(&session, date()).await.unwrap_err();
        assert!(matches!(err, GenerateReportError::Render(_)));
        // the session itself is untouched
        assert_eq!(session.answers().len(), 3);
        assert!(session.is_completed());
    }
}
