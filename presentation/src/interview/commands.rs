//! Parsing of REPL input lines

/// Slash commands understood by the interview REPL
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ReplCommand {
    Next,
    Report,
    /// Restart with the named domain; lists domains when no name is given
    Domain(Option<String>),
    Domains,
    /// Set the candidate name; empty clears it
    Name(String),
    Question,
    Status,
    Help,
    Quit,
    Unknown(String),
}

/// One complete line of user input
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ReplInput {
    /// Free text, submitted as the answer to the current question
    Answer(String),
    Command(ReplCommand),
    Empty,
}

impl ReplInput {
    pub fn parse(line: &str) -> Self {
        let trimmed = line.trim();
        if trimmed.is_empty() {
            return ReplInput::Empty;
        }
        if !trimmed.starts_with('/') {
            return ReplInput::Answer(line.to_string());
        }

        let (name, rest) = match trimmed.split_once(char::is_whitespace) {
            Some((name, rest)) => (name, rest.trim()),
            None => (trimmed, ""),
        };
        let arg = (!rest.is_empty()).then(|| rest.to_string());

        let command = match name {
            "/next" | "/n" => ReplCommand::Next,
            "/report" | "/r" => ReplCommand::Report,
            "/domain" | "/d" => ReplCommand::Domain(arg),
            "/domains" => ReplCommand::Domains,
            "/name" => ReplCommand::Name(rest.to_string()),
            "/question" | "/show" => ReplCommand::Question,
            "/status" => ReplCommand::Status,
            "/help" | "/h" | "/?" => ReplCommand::Help,
            "/quit" | "/exit" | "/q" => ReplCommand::Quit,
            other => ReplCommand::Unknown(other.to_string()),
        };
        ReplInput::Command(command)
    }
}

/// Collects an answer spread over several lines.
///
/// A line ending in `\` continues on the next line; the backslash is
/// replaced by a newline.
#[derive(Debug, Default)]
pub struct AnswerBuffer {
    pending: Option<String>,
}

impl AnswerBuffer {
    pub fn new() -> Self {
        Self::default()
    }

    /// Whether a continued line is waiting for more input
    pub fn is_continuing(&self) -> bool {
        self.pending.is_some()
    }

    /// Feed one raw line. Returns the full text once the last line arrives.
    pub fn push_line(&mut self, line: &str) -> Option<String> {
        let (text, continues) = match line.strip_suffix('\\') {
            Some(head) => (head, true),
            None => (line, false),
        };

        let mut buffer = match self.pending.take() {
            Some(mut pending) => {
                pending.push('\n');
                pending
            }
            None => String::new(),
        };
        buffer.push_str(text);

        if continues {
            self.pending = Some(buffer);
            None
        } else {
            Some(buffer)
        }
    }

    /// Drop any partial answer
    pub fn clear(&mut self) {
        self.pending = None;
    }
}
