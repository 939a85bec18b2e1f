//! Report document model
//!
//! A [`ReportDocument`] is what the renderer draws: a cover page and one
//! block per answered question. Every free-text field has already been
//! through [`sanitize`].

use crate::interview::answer::AnswerRecord;
use crate::interview::catalog::InterviewDomain;
use crate::interview::session::InterviewSession;
use crate::report::sanitize::sanitize;
use chrono::NaiveDate;
use serde::Serialize;

pub const REPORT_TITLE: &str = "AI Interview Coach Report";

/// Used on the cover when the candidate did not give a name
pub const CANDIDATE_PLACEHOLDER: &str = "Candidate Name";

pub const COVER_PARAGRAPH: &str = "This report includes your answers and detailed feedback \
generated by the AI Interview Coach. Use it to improve your skills and confidence.";

pub const REPORT_MIME_TYPE: &str = "application/pdf";

/// Cover page contents
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CoverPage {
    pub title: String,
    pub candidate: String,
    pub domain: String,
    /// Generation date, e.g. "March 05, 2025"
    pub date: String,
    pub paragraph: String,
}

impl CoverPage {
    pub fn candidate_line(&self) -> String {
        format!("Candidate: {}", self.candidate)
    }

    pub fn domain_line(&self) -> String {
        format!("Interview Domain: {}", self.domain)
    }

    pub fn date_line(&self) -> String {
        format!("Date: {}", self.date)
    }
}

/// One answered question as it appears in the report
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ReportBlock {
    /// 1-based question number
    pub number: usize,
    pub question: String,
    pub answer: String,
    pub evaluation: String,
}

impl ReportBlock {
    pub fn heading(&self) -> String {
        format!("Question {}: {}", self.number, self.question)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ReportDocument {
    pub cover: CoverPage,
    pub blocks: Vec<ReportBlock>,
}

impl ReportDocument {
    /// Compile records into a report, in their original order.
    pub fn compile(
        candidate_name: &str,
        domain: InterviewDomain,
        records: &[AnswerRecord],
        date: NaiveDate,
    ) -> Self {
        let candidate = match sanitize(candidate_name.trim()) {
            name if name.trim().is_empty() => CANDIDATE_PLACEHOLDER.to_string(),
            name => name.trim().to_string(),
        };

        let cover = CoverPage {
            title: REPORT_TITLE.to_string(),
            candidate,
            domain: sanitize(domain.name()),
            date: format_report_date(date),
            paragraph: COVER_PARAGRAPH.to_string(),
        };

        let blocks = records
            .iter()
            .enumerate()
            .map(|(i, record)| ReportBlock {
                number: i + 1,
                question: sanitize(record.question()),
                answer: sanitize(record.answer()),
                evaluation: sanitize(record.evaluation()),
            })
            .collect();

        Self { cover, blocks }
    }

    /// Compile the answers recorded so far in `session`.
    pub fn from_session(session: &InterviewSession, date: NaiveDate) -> Self {
        Self::compile(
            session.candidate_name(),
            session.domain(),
            session.answers(),
            date,
        )
    }
}

/// "Month DD, YYYY"
pub fn format_report_date(date: NaiveDate) -> String {
    date.format("%B %d, %Y").to_string()
}

/// Suggested download name: `interview_report_<Domain_Name>.pdf`
pub fn report_filename(domain: InterviewDomain) -> String {
    format!("interview_report_{}.pdf", domain.name().replace(' ', "_"))
}
