//! Progress reporting while waiting on evaluations and report rendering

use coach_application::ports::progress::EvaluationProgress;
use coach_domain::Model;
use colored::Colorize;
use indicatif::{ProgressBar, ProgressStyle};
use std::sync::Mutex;
use std::time::Duration;

/// Spinner shown while a request is in flight
pub struct ProgressReporter {
    spinner: Mutex<Option<ProgressBar>>,
}

impl ProgressReporter {
    pub fn new() -> Self {
        Self {
            spinner: Mutex::new(None),
        }
    }

    fn spinner_style() -> ProgressStyle {
        ProgressStyle::default_spinner()
            .template("{spinner:.green} {msg} {elapsed:.dim}")
            .unwrap_or_else(|_| ProgressStyle::default_spinner())
    }

    fn start(&self, message: String) {
        let spinner = ProgressBar::new_spinner();
        spinner.set_style(Self::spinner_style());
        spinner.set_message(message);
        spinner.enable_steady_tick(Duration::from_millis(100));

        if let Ok(mut slot) = self.spinner.lock()
            && let Some(previous) = slot.replace(spinner)
        {
            previous.finish_and_clear();
        }
    }

    fn finish(&self, message: String) {
        if let Ok(mut slot) = self.spinner.lock()
            && let Some(spinner) = slot.take()
        {
            spinner.finish_with_message(message);
        }
    }
}

impl Default for ProgressReporter {
    fn default() -> Self {
        Self::new()
    }
}

impl EvaluationProgress for ProgressReporter {
    fn on_evaluation_start(&self, model: &Model, question_number: usize, total: usize) {
        self.start(format!(
            "Evaluating answer {}/{} with {}...",
            question_number,
            total,
            model.to_string().bold()
        ));
    }

    fn on_evaluation_complete(&self, success: bool) {
        let message = if success {
            format!("{} Evaluation ready", "v".green())
        } else {
            format!("{} Evaluation failed", "x".red())
        };
        self.finish(message);
    }

    fn on_report_start(&self, blocks: usize) {
        self.start(format!("Rendering report ({} questions)...", blocks));
    }

    fn on_report_complete(&self, success: bool) {
        let message = if success {
            format!("{} Report rendered", "v".green())
        } else {
            format!("{} Report rendering failed", "x".red())
        };
        self.finish(message);
    }
}

/// Line-based progress for when the output is not a terminal
pub struct SimpleProgress;

impl EvaluationProgress for SimpleProgress {
    fn on_evaluation_start(&self, model: &Model, question_number: usize, total: usize) {
        println!(
            "{} Evaluating answer {}/{} with {}",
            "->".cyan(),
            question_number,
            total,
            model
        );
    }

    fn on_evaluation_complete(&self, success: bool) {
        if !success {
            println!("  {} evaluation failed", "x".red());
        }
    }
}
