//! REPL (Read-Eval-Print Loop) for the interview

use crate::interview::commands::{AnswerBuffer, ReplCommand, ReplInput};
use crate::output::console::ConsoleFormatter;
use crate::progress::reporter::{ProgressReporter, SimpleProgress};
use coach_application::{
    EvaluationProgress, GenerateReportError, GenerateReportUseCase, InterviewController,
    LlmGateway, NoProgress, ReportRenderer,
};
use coach_domain::{InterviewDomain, SessionView};
use reedline::{DefaultPrompt, DefaultPromptSegment, FileBackedHistory, Reedline, Signal};
use std::io::IsTerminal;
use std::path::{Path, PathBuf};
use tracing::{info, warn};

const HISTORY_SIZE: usize = 500;

/// Interactive interview REPL
pub struct InterviewRepl<G: LlmGateway + 'static, R: ReportRenderer + 'static> {
    controller: InterviewController<G>,
    reports: GenerateReportUseCase<R>,
    output_dir: PathBuf,
    show_progress: bool,
    history_file: Option<PathBuf>,
}

impl<G: LlmGateway + 'static, R: ReportRenderer + 'static> InterviewRepl<G, R> {
    pub fn new(
        controller: InterviewController<G>,
        reports: GenerateReportUseCase<R>,
        output_dir: impl Into<PathBuf>,
    ) -> Self {
        Self {
            controller,
            reports,
            output_dir: output_dir.into(),
            show_progress: true,
            history_file: None,
        }
    }

    /// Set whether to show progress
    pub fn with_progress(mut self, show: bool) -> Self {
        self.show_progress = show;
        self
    }

    /// Persist line history to `path`
    pub fn with_history_file(mut self, path: Option<PathBuf>) -> Self {
        self.history_file = path;
        self
    }

    pub fn controller(&self) -> &InterviewController<G> {
        &self.controller
    }

    /// Run the interactive REPL until `/quit` or Ctrl-D
    pub async fn run(&mut self) -> std::io::Result<()> {
        let mut editor = self.editor();
        let mut buffer = AnswerBuffer::new();

        println!("{}", ConsoleFormatter::welcome(self.controller.model()));
        self.show_view();

        loop {
            let prompt = self.prompt(buffer.is_continuing());

            match editor.read_line(&prompt) {
                Ok(Signal::Success(line)) => {
                    if !buffer.is_continuing() {
                        match ReplInput::parse(&line) {
                            ReplInput::Empty => continue,
                            ReplInput::Command(command) => {
                                if self.handle_command(command).await {
                                    break;
                                }
                                continue;
                            }
                            ReplInput::Answer(_) => {}
                        }
                    }
                    if let Some(answer) = buffer.push_line(&line) {
                        self.submit(&answer).await;
                    }
                }
                Ok(Signal::CtrlD) => {
                    println!("Bye!");
                    break;
                }
                Ok(_) => {
                    buffer.clear();
                    println!("^C");
                }
                Err(e) => {
                    eprintln!("{}", ConsoleFormatter::error(&e.to_string()));
                    return Err(e);
                }
            }
        }

        Ok(())
    }

    fn editor(&self) -> Reedline {
        let editor = Reedline::create();
        let Some(path) = &self.history_file else {
            return editor;
        };

        if let Some(parent) = path.parent()
            && let Err(e) = std::fs::create_dir_all(parent)
        {
            warn!("Cannot create history directory {}: {}", parent.display(), e);
        }
        match FileBackedHistory::with_file(HISTORY_SIZE, path.clone()) {
            Ok(history) => editor.with_history(Box::new(history)),
            Err(e) => {
                warn!("History disabled ({}): {}", path.display(), e);
                editor
            }
        }
    }

    fn prompt(&self, continuing: bool) -> DefaultPrompt {
        let label = if continuing {
            "...".to_string()
        } else {
            match self.controller.view() {
                SessionView::AwaitingAnswer { number, total, .. } => {
                    format!("Q{}/{}", number, total)
                }
                SessionView::AwaitingAdvance { .. } => "next".to_string(),
                SessionView::Completed { .. } => "done".to_string(),
            }
        };
        DefaultPrompt::new(
            DefaultPromptSegment::Basic(label),
            DefaultPromptSegment::Empty,
        )
    }

    fn progress(&self) -> Box<dyn EvaluationProgress> {
        if !self.show_progress {
            Box::new(NoProgress)
        } else if std::io::stderr().is_terminal() {
            Box::new(ProgressReporter::new())
        } else {
            Box::new(SimpleProgress)
        }
    }

    fn show_view(&self) {
        println!("{}", ConsoleFormatter::format_view(&self.controller.view()));
    }

    async fn submit(&mut self, answer: &str) {
        let progress = self.progress();
        let result = self
            .controller
            .submit_with_progress(answer, progress.as_ref())
            .await
            .map(|_| ());

        match result {
            Ok(()) => self.show_view(),
            Err(e) if e.is_warning() => println!("{}", ConsoleFormatter::warning(&e.to_string())),
            Err(e) => eprintln!("{}", ConsoleFormatter::error(&e.to_string())),
        }
    }

    /// Handle a slash command. Returns true if the REPL should exit.
    async fn handle_command(&mut self, command: ReplCommand) -> bool {
        match command {
            ReplCommand::Next => match self.controller.advance() {
                Ok(_) => self.show_view(),
                Err(e) => println!("{}", ConsoleFormatter::warning(&e.to_string())),
            },
            ReplCommand::Report => self.write_report().await,
            ReplCommand::Domain(Some(name)) => match name.parse::<InterviewDomain>() {
                Ok(domain) => {
                    self.controller.select_domain(domain);
                    self.show_view();
                }
                Err(e) => {
                    eprintln!("{}", ConsoleFormatter::error(&e.to_string()));
                    println!("{}", ConsoleFormatter::format_domains(None));
                }
            },
            ReplCommand::Domain(None) | ReplCommand::Domains => {
                let current = self.controller.session().domain();
                println!("{}", ConsoleFormatter::format_domains(Some(current)));
            }
            ReplCommand::Name(name) => {
                self.controller.set_candidate_name(name);
                match self.controller.session().candidate_name() {
                    "" => println!("Candidate name cleared"),
                    name => println!("Candidate name set to {}", name),
                }
            }
            ReplCommand::Question => self.show_view(),
            ReplCommand::Status => println!(
                "{}",
                ConsoleFormatter::format_status(self.controller.session(), self.controller.model())
            ),
            ReplCommand::Help => println!("{}", ConsoleFormatter::help()),
            ReplCommand::Quit => {
                println!("Bye!");
                return true;
            }
            ReplCommand::Unknown(name) => {
                println!("Unknown command: {}", name);
                println!("Type /help for available commands");
            }
        }
        false
    }

    async fn write_report(&self) {
        let progress = self.progress();
        let date = chrono::Local::now().date_naive();

        let report = match self
            .reports
            .execute_with_progress(self.controller.session(), date, progress.as_ref())
            .await
        {
            Ok(report) => report,
            Err(e @ GenerateReportError::NotCompleted(_)) => {
                println!("{}", ConsoleFormatter::warning(&e.to_string()));
                return;
            }
            Err(e) => {
                eprintln!("{}", ConsoleFormatter::error(&e.to_string()));
                return;
            }
        };

        match save_report(&self.output_dir, &report.filename, &report.bytes) {
            Ok(path) => {
                info!("Report written to {} ({})", path.display(), report.mime_type);
                println!("{}", ConsoleFormatter::report_saved(&path, report.blocks));
            }
            Err(e) => eprintln!(
                "{}",
                ConsoleFormatter::error(&format!(
                    "Could not write {} to {}: {}",
                    report.filename,
                    self.output_dir.display(),
                    e
                ))
            ),
        }
    }
}

/// Write report bytes to `dir/filename`, creating `dir` if needed.
pub fn save_report(dir: &Path, filename: &str, bytes: &[u8]) -> std::io::Result<PathBuf> {
    std::fs::create_dir_all(dir)?;
    let path = dir.join(filename);
    std::fs::write(&path, bytes)?;
    Ok(path)
}
