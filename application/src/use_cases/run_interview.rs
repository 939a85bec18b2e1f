//! Run Interview use case
//!
//! Drives one interview session: answer submission, evaluation through the
//! LLM gateway, advancing, and restarting with another domain.

use crate::ports::conversation_logger::{
    ConversationEvent, ConversationLogger, NoConversationLogger,
};
use crate::ports::llm_gateway::{GatewayError, LlmGateway};
use crate::ports::progress::{EvaluationProgress, NoProgress};
use coach_domain::{
    Answer, AnswerRecord, InterviewDomain, InterviewSession, InterviewState, Model,
    PromptTemplate, SessionError, SessionView, single_line, truncate,
};
use std::sync::Arc;
use thiserror::Error;
use tracing::{debug, info, warn};

/// Errors returned by [`InterviewController::submit`].
///
/// In both cases the session is left exactly as it was.
#[derive(Error, Debug)]
pub enum SubmitError {
    #[error("{0}")]
    Rejected(#[from] SessionError),

    #[error("Evaluation failed: {0}")]
    Evaluation(#[from] GatewayError),
}

impl SubmitError {
    /// Whether this is a user input problem rather than a service failure
    pub fn is_warning(&self) -> bool {
        matches!(self, SubmitError::Rejected(SessionError::EmptyAnswer))
    }
}

/// Controller for one interview session
///
/// Owns the [`InterviewSession`]; every mutation goes through here.
pub struct InterviewController<G: LlmGateway + 'static> {
    gateway: Arc<G>,
    model: Model,
    session: InterviewSession,
    conversation_logger: Arc<dyn ConversationLogger>,
}

impl<G: LlmGateway + 'static> InterviewController<G> {
    pub fn new(gateway: Arc<G>, model: Model, domain: InterviewDomain) -> Self {
        Self {
            gateway,
            model,
            session: InterviewSession::new(domain),
            conversation_logger: Arc::new(NoConversationLogger),
        }
    }

    pub fn with_candidate_name(mut self, name: impl Into<String>) -> Self {
        self.session.set_candidate_name(name);
        self
    }

    pub fn with_conversation_logger(mut self, logger: Arc<dyn ConversationLogger>) -> Self {
        self.conversation_logger = logger;
        self
    }

    pub fn session(&self) -> &InterviewSession {
        &self.session
    }

    pub fn model(&self) -> &Model {
        &self.model
    }

    /// Projection of the current state for rendering
    pub fn view(&self) -> SessionView {
        SessionView::project(&self.session)
    }

    pub fn set_candidate_name(&mut self, name: impl Into<String>) {
        self.session.set_candidate_name(name);
    }

    /// Restart the session with `domain`, discarding all answers.
    pub fn select_domain(&mut self, domain: InterviewDomain) {
        info!(
            "Restarting interview with domain {} ({} answers discarded)",
            domain,
            self.session.answers().len()
        );
        self.session.restart(domain);
    }

    /// Submit with default (no-op) progress
    pub async fn submit(&mut self, answer_text: &str) -> Result<&AnswerRecord, SubmitError> {
        self.submit_with_progress(answer_text, &NoProgress).await
    }

    /// Submit an answer for the current question and record its evaluation.
    ///
    /// Sends exactly one request; on failure nothing is recorded and the
    /// same answer can be submitted again.
    pub async fn submit_with_progress(
        &mut self,
        answer_text: &str,
        progress: &dyn EvaluationProgress,
    ) -> Result<&AnswerRecord, SubmitError> {
        self.session.ensure_can_submit()?;
        let answer = Answer::try_new(answer_text).ok_or(SessionError::EmptyAnswer)?;

        let domain = self.session.domain();
        let question = self.session.current_question();
        let number = self.session.question_index() + 1;
        let total = self.session.question_count();
        let prompt = PromptTemplate::evaluation_prompt(domain, question, answer.content());

        info!("Requesting evaluation for question {}/{}", number, total);
        self.conversation_logger.log(ConversationEvent::new(
            "evaluation_request",
            serde_json::json!({
                "model": self.model.to_string(),
                "domain": domain.name(),
                "question_number": number,
                "question": question,
                "prompt": prompt,
            }),
        ));

        progress.on_evaluation_start(&self.model, number, total);
        let result = self.evaluate(&prompt).await;
        progress.on_evaluation_complete(result.is_ok());

        let evaluation = match result {
            Ok(evaluation) => evaluation,
            Err(e) => {
                warn!("Evaluation for question {} failed: {}", number, e);
                self.conversation_logger.log(ConversationEvent::new(
                    "evaluation_error",
                    serde_json::json!({
                        "question_number": number,
                        "error": e.to_string(),
                    }),
                ));
                return Err(e.into());
            }
        };

        debug!(
            "Evaluation received ({} bytes): {}",
            evaluation.len(),
            truncate(&single_line(&evaluation), 120)
        );
        self.conversation_logger.log(ConversationEvent::new(
            "evaluation_response",
            serde_json::json!({
                "question_number": number,
                "bytes": evaluation.len(),
                "text": evaluation,
            }),
        ));

        Ok(self.session.record_answer(answer, evaluation)?)
    }

    /// Move to the next question, or complete after the last one.
    pub fn advance(&mut self) -> Result<InterviewState, SessionError> {
        let state = self.session.advance()?;
        match state {
            InterviewState::Completed => info!(
                "Interview completed with {} answers",
                self.session.answers().len()
            ),
            _ => debug!(
                "Advanced to question {}/{}",
                self.session.question_index() + 1,
                self.session.question_count()
            ),
        }
        Ok(state)
    }

    async fn evaluate(&self, prompt: &str) -> Result<String, GatewayError> {
        let session = self.gateway.create_session(&self.model).await?;
        session.send(prompt).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ports::llm_gateway::LlmSession;
    use async_trait::async_trait;
    use std::collections::VecDeque;
    use std::sync::Mutex;
    use std::sync::atomic::{AtomicUsize, Ordering};

    /// Replies with scripted results in order; records every prompt.
    struct ScriptedGateway {
        replies: Mutex<VecDeque<Result<String, GatewayError>>>,
        prompts: Arc<Mutex<Vec<String>>>,
    }

    impl ScriptedGateway {
        fn new(replies: Vec<Result<String, GatewayError>>) -> Self {
            Self {
                replies: Mutex::new(replies.into()),
                prompts: Arc::new(Mutex::new(Vec::new())),
            }
        }

        fn always(text: &str, times: usize) -> Self {
            Self::new((0..times).map(|_| Ok(text.to_string())).collect())
        }

        fn prompt_count(&self) -> usize {
            self.prompts.lock().unwrap().len()
        }
    }

    struct ScriptedSession {
        model: Model,
        reply: Mutex<Option<Result<String, GatewayError>>>,
        prompts: Arc<Mutex<Vec<String>>>,
    }

    #[async_trait]
    impl LlmSession for ScriptedSession {
        fn model(&self) -> &Model {
            &self.model
        }

        async fn send(&self, content: &str) -> Result<String, GatewayError> {
            self.prompts.lock().unwrap().push(content.to_string());
            self.reply
                .lock()
                .unwrap()
                .take()
                .unwrap_or_else(|| Err(GatewayError::Other("No more responses".to_string())))
        }
    }

    #[async_trait]
    impl LlmGateway for ScriptedGateway {
        async fn create_session(
            &self,
            model: &Model,
        ) -> Result<Box<dyn LlmSession>, GatewayError> {
            let reply = self.replies.lock().unwrap().pop_front();
            Ok(Box::new(ScriptedSession {
                model: model.clone(),
                reply: Mutex::new(reply),
                prompts: Arc::clone(&self.prompts),
            }))
        }

        async fn available_models(&self) -> Result<Vec<Model>, GatewayError> {
            Ok(vec![Model::default()])
        }
    }

    #[derive(Default)]
    struct CountingProgress {
        started: AtomicUsize,
        succeeded: AtomicUsize,
        failed: AtomicUsize,
    }

    impl EvaluationProgress for CountingProgress {
        fn on_evaluation_start(&self, _model: &Model, _question_number: usize, _total: usize) {
            self.started.fetch_add(1, Ordering::SeqCst);
        }

        fn on_evaluation_complete(&self, success: bool) {
            if success {
                self.succeeded.fetch_add(1, Ordering::SeqCst);
            } else {
                self.failed.fetch_add(1, Ordering::SeqCst);
            }
        }
    }

    fn controller(gateway: ScriptedGateway) -> InterviewController<ScriptedGateway> {
        InterviewController::new(
            Arc::new(gateway),
            Model::default(),
            InterviewDomain::Marketing,
        )
    }

    #[tokio::test]
    async fn test_empty_answer_is_rejected_without_calling_service() {
        let gateway = Arc::new(ScriptedGateway::always("unused", 1));
        let mut controller = InterviewController::new(
            Arc::clone(&gateway),
            Model::default(),
            InterviewDomain::Marketing,
        );

        for text in ["", "   ", "\n\t"] {
            let err = controller.submit(text).await.unwrap_err();
            assert!(err.is_warning());
            assert_eq!(err.to_string(), "Please provide an answer before submitting.");
        }

        assert_eq!(gateway.prompt_count(), 0);
        assert!(controller.session().answers().is_empty());
        assert_eq!(controller.session().state(), InterviewState::AwaitingAnswer);
    }

    #[tokio::test]
    async fn test_successful_submission_records_answer() {
        let mut controller = controller(ScriptedGateway::always("Nice answer", 1));
        let progress = CountingProgress::default();

        let record = controller
            .submit_with_progress("I love marketing", &progress)
            .await
            .unwrap();
        assert_eq!(record.question(), "Tell me about yourself.");
        assert_eq!(record.answer(), "I love marketing");
        assert_eq!(record.evaluation(), "Nice answer");

        assert_eq!(controller.session().answers().len(), 1);
        assert_eq!(controller.session().state(), InterviewState::AwaitingAdvance);
        assert_eq!(progress.started.load(Ordering::SeqCst), 1);
        assert_eq!(progress.succeeded.load(Ordering::SeqCst), 1);
    }

    #[tokio::test]
    async fn test_prompt_embeds_domain_question_and_answer() {
        let gateway = Arc::new(ScriptedGateway::always("ok", 1));
        let mut controller = InterviewController::new(
            Arc::clone(&gateway),
            Model::default(),
            InterviewDomain::Marketing,
        );

        controller.submit("My verbatim answer").await.unwrap();

        let prompts = gateway.prompts.lock().unwrap();
        assert_eq!(prompts.len(), 1);
        assert!(prompts[0].contains("Interview Domain: Marketing"));
        assert!(prompts[0].contains("Interview Question: Tell me about yourself."));
        assert!(prompts[0].contains("\"My verbatim answer\""));
    }

    #[tokio::test]
    async fn test_failed_evaluation_leaves_session_unchanged() {
        let mut controller = controller(ScriptedGateway::new(vec![
            Err(GatewayError::Unauthorized("API key not valid".to_string())),
            Ok("Recovered".to_string()),
        ]));
        let progress = CountingProgress::default();

        let err = controller
            .submit_with_progress("An answer", &progress)
            .await
            .unwrap_err();
        assert!(!err.is_warning());
        assert!(err.to_string().contains("API key not valid"));
        assert!(controller.session().answers().is_empty());
        assert_eq!(controller.session().state(), InterviewState::AwaitingAnswer);
        assert_eq!(progress.failed.load(Ordering::SeqCst), 1);

        // the same submission can be retried
        let record = controller.submit("An answer").await.unwrap();
        assert_eq!(record.evaluation(), "Recovered");
        assert_eq!(controller.session().answers().len(), 1);
    }

    #[tokio::test]
    async fn test_submit_while_awaiting_advance_is_rejected() {
        let gateway = Arc::new(ScriptedGateway::always("ok", 2));
        let mut controller = InterviewController::new(
            Arc::clone(&gateway),
            Model::default(),
            InterviewDomain::Marketing,
        );
        controller.submit("first").await.unwrap();

        let err = controller.submit("second").await.unwrap_err();
        assert!(matches!(
            err,
            SubmitError::Rejected(SessionError::InvalidTransition { .. })
        ));
        assert_eq!(gateway.prompt_count(), 1);
        assert_eq!(controller.session().answers().len(), 1);
    }

    #[tokio::test]
    async fn test_advance_only_after_answer() {
        let mut controller = controller(ScriptedGateway::always("ok", 1));
        assert!(controller.advance().is_err());

        controller.submit("answer").await.unwrap();
        assert_eq!(controller.advance().unwrap(), InterviewState::AwaitingAnswer);
        assert_eq!(controller.session().question_index(), 1);
    }

    #[tokio::test]
    async fn test_full_marketing_interview() {
        let mut controller = controller(ScriptedGateway::always("OK feedback", 3));

        for i in 0..3 {
            controller.submit(&format!("Answer {}", i + 1)).await.unwrap();
            controller.advance().unwrap();
        }

        let session = controller.session();
        assert_eq!(session.state(), InterviewState::Completed);
        assert_eq!(session.answers().len(), 3);
        assert!(session.answers().iter().all(|r| r.evaluation() == "OK feedback"));

        // no further question changes
        assert!(controller.advance().is_err());
        assert!(controller.submit("extra").await.is_err());
        assert_eq!(controller.session().answers().len(), 3);
    }

    #[tokio::test]
    async fn test_select_domain_restarts() {
        let mut controller =
            controller(ScriptedGateway::always("ok", 1)).with_candidate_name("Ada");
        controller.submit("answer").await.unwrap();

        controller.select_domain(InterviewDomain::HumanResources);
        let session = controller.session();
        assert_eq!(session.domain(), InterviewDomain::HumanResources);
        assert_eq!(session.question_index(), 0);
        assert!(session.answers().is_empty());
        assert_eq!(session.state(), InterviewState::AwaitingAnswer);
        assert_eq!(session.candidate_name(), "Ada");
    }

    #[tokio::test]
    async fn test_view_follows_transitions() {
        let mut controller = controller(ScriptedGateway::always("Feedback text", 1));
        assert!(matches!(controller.view(), SessionView::AwaitingAnswer { number: 1, .. }));

        controller.submit("answer").await.unwrap();
        match controller.view() {
            SessionView::AwaitingAdvance { evaluation, .. } => {
                assert_eq!(evaluation, "Feedback text")
            }
            other => panic!("unexpected view: {:?}", other),
        }
    }

    struct RecordingLogger {
        events: Mutex<Vec<&'static str>>,
    }

    impl ConversationLogger for RecordingLogger {
        fn log(&self, event: ConversationEvent) {
            self.events.lock().unwrap().push(event.event_type);
        }
    }

    #[tokio::test]
    async fn test_transcript_events() {
        let logger = Arc::new(RecordingLogger {
            events: Mutex::new(Vec::new()),
        });
        let mut controller = controller(ScriptedGateway::new(vec![
            Err(GatewayError::Timeout),
            Ok("ok".to_string()),
        ]))
        .with_conversation_logger(logger.clone());

        let _ = controller.submit("answer").await;
        controller.submit("answer").await.unwrap();

        assert_eq!(
            *logger.events.lock().unwrap(),
            vec![
                "evaluation_request",
                "evaluation_error",
                "evaluation_request",
                "evaluation_response",
            ]
        );
    }
}
