//! Console output formatter for the interview REPL

use colored::Colorize;
use coach_domain::{InterviewDomain, InterviewSession, Model, SessionView};
use std::path::Path;

/// Formats session views and messages for terminal display
pub struct ConsoleFormatter;

impl ConsoleFormatter {
    /// Banner shown when the REPL starts
    pub fn welcome(model: &Model) -> String {
        let mut output = String::new();
        output.push('\n');
        output.push_str(&Self::header("AI Interview Coach"));
        output.push('\n');
        output.push_str(&format!("{} {}\n", "Model:".cyan().bold(), model));
        output.push_str(&format!(
            "{}\n",
            "Type your answer and press Enter. /help lists commands.".dimmed()
        ));
        output
    }

    /// Render the current state of the session
    pub fn format_view(view: &SessionView) -> String {
        match view {
            SessionView::AwaitingAnswer {
                domain,
                number,
                total,
                question,
            } => format!(
                "\n{}\n{}\n\n{}\n",
                format!("── {} · Question {} of {} ──", domain, number, total)
                    .cyan()
                    .bold(),
                question.bold(),
                "Your answer:".dimmed()
            ),
            SessionView::AwaitingAdvance {
                number,
                total,
                evaluation,
                is_last,
                ..
            } => {
                let next = if *is_last {
                    "/next to finish the interview"
                } else {
                    "/next for the next question"
                };
                format!(
                    "\n{}\n{}\n\n{}\n",
                    format!("── Evaluation {}/{} ──", number, total).yellow().bold(),
                    evaluation,
                    next.dimmed()
                )
            }
            SessionView::Completed { domain, answered } => format!(
                "\n{}\n{} questions answered in {}.\n{}\n",
                "Interview completed!".green().bold(),
                answered,
                domain,
                "/report writes the PDF report, /domain <name> starts over.".dimmed()
            ),
        }
    }

    /// List every domain, marking the current one
    pub fn format_domains(current: Option<InterviewDomain>) -> String {
        let mut output = format!("{}\n", "Interview domains:".cyan().bold());
        for domain in InterviewDomain::ALL {
            let marker = if Some(domain) == current { "*" } else { " " };
            output.push_str(&format!(
                " {} {} ({} questions)\n",
                marker,
                domain,
                domain.question_count()
            ));
        }
        output
    }

    pub fn format_status(session: &InterviewSession, model: &Model) -> String {
        let candidate = match session.candidate_name() {
            "" => "(not set)".dimmed().to_string(),
            name => name.to_string(),
        };
        let mut output = format!("{}\n", "Session status:".cyan().bold());
        output.push_str(&format!("  Candidate: {}\n", candidate));
        output.push_str(&format!("  Domain:    {}\n", session.domain()));
        output.push_str(&format!(
            "  Answered:  {}/{}\n",
            session.answers().len(),
            session.question_count()
        ));
        output.push_str(&format!("  State:     {}\n", session.state()));
        output.push_str(&format!("  Model:     {}\n", model));
        output
    }

    pub fn help() -> String {
        let mut output = format!("\n{}\n", "Commands:".cyan().bold());
        for (command, description) in [
            ("<text>", "Submit an answer (end a line with \\ to continue it)"),
            ("/next, /n", "Go to the next question"),
            ("/report, /r", "Write the PDF report (after the last question)"),
            ("/domain <name>", "Restart with another domain"),
            ("/domains", "List interview domains"),
            ("/name <text>", "Set the candidate name for the report"),
            ("/question", "Show the current question again"),
            ("/status", "Show session status"),
            ("/help, /h, /?", "Show this help"),
            ("/quit, /exit, /q", "Exit"),
        ] {
            output.push_str(&format!("  {:<18} {}\n", command, description));
        }
        output
    }

    pub fn report_saved(path: &Path, answers: usize) -> String {
        format!(
            "{} {} ({} answers)",
            "Report saved to".green().bold(),
            path.display(),
            answers
        )
    }

    pub fn warning(message: &str) -> String {
        format!("{} {}", "Warning:".yellow().bold(), message)
    }

    pub fn error(message: &str) -> String {
        format!("{} {}", "Error:".red().bold(), message)
    }

    fn header(title: &str) -> String {
        let line = "=".repeat(50);
        format!("{}\n{:^50}\n{}", line.cyan(), title.bold(), line.cyan())
    }

    /// Indent a multi-line string
    pub fn indent(text: &str, prefix: &str) -> String {
        text.lines()
            .map(|line| format!("{}{}", prefix, line))
            .collect::<Vec<_>>()
            .join("\n")
    }
}
