//! Page layout for the interview report.
//!
//! [`compose`] turns a [`ReportDocument`] into a list of [`LaidOutPage`]s:
//! positioned text runs, rules and images on A4 pages. Every coordinate is
//! in millimetres measured from the top-left corner of the page; the PDF
//! writer flips them.

use crate::report::metrics::{FontStyle, PT_TO_MM, get_metrics};
use coach_application::ports::report_renderer::RenderError;
use coach_domain::ReportDocument;
use std::path::{Path, PathBuf};

pub const PAGE_WIDTH_MM: f32 = 210.0;
pub const PAGE_HEIGHT_MM: f32 = 297.0;
pub const MARGIN_MM: f32 = 10.0;
pub const BOTTOM_MARGIN_MM: f32 = 15.0;
/// Horizontal padding inside a text cell
pub const CELL_PADDING_MM: f32 = 1.0;

const CONTENT_WIDTH_MM: f32 = PAGE_WIDTH_MM - 2.0 * MARGIN_MM;
const WRAP_WIDTH_MM: f32 = CONTENT_WIDTH_MM - 2.0 * CELL_PADDING_MM;
const PAGE_BREAK_AT_MM: f32 = PAGE_HEIGHT_MM - BOTTOM_MARGIN_MM;

pub const LOGO_X_MM: f32 = 80.0;
pub const LOGO_Y_MM: f32 = 30.0;
pub const LOGO_WIDTH_MM: f32 = 50.0;

pub const RULE_COLOR: (u8, u8, u8) = (200, 200, 200);

/// A positioned drawing instruction
#[derive(Debug, Clone, PartialEq)]
pub enum Element {
    Text {
        text: String,
        x_mm: f32,
        baseline_mm: f32,
        size_pt: f32,
        style: FontStyle,
    },
    Rule {
        x1_mm: f32,
        x2_mm: f32,
        y_mm: f32,
        color: (u8, u8, u8),
    },
    /// Image whose top-left corner sits at (`x_mm`, `y_mm`)
    Image {
        path: PathBuf,
        x_mm: f32,
        y_mm: f32,
        width_mm: f32,
    },
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct LaidOutPage {
    pub elements: Vec<Element>,
}

impl LaidOutPage {
    /// Text runs on this page, in drawing order
    pub fn texts(&self) -> impl Iterator<Item = &str> {
        self.elements.iter().filter_map(|e| match e {
            Element::Text { text, .. } => Some(text.as_str()),
            _ => None,
        })
    }
}

#[derive(Debug, Clone, Copy)]
enum Align {
    Left,
    Center,
}

/// Font selection, mirrors the current font of a PDF content stream
#[derive(Debug, Clone, Copy)]
struct Font {
    style: FontStyle,
    size_pt: f32,
}

impl Font {
    const fn new(style: FontStyle, size_pt: f32) -> Self {
        Self { style, size_pt }
    }
}

const TITLE: Font = Font::new(FontStyle::Bold, 22.0);
const COVER: Font = Font::new(FontStyle::Regular, 14.0);
const COVER_NOTE: Font = Font::new(FontStyle::Italic, 12.0);
const HEADING: Font = Font::new(FontStyle::Bold, 12.0);
const LABEL: Font = Font::new(FontStyle::Bold, 11.0);
const BODY: Font = Font::new(FontStyle::Regular, 11.0);

const COVER_LINE_MM: f32 = 10.0;
const BODY_LINE_MM: f32 = 8.0;

/// Cursor-based writer with automatic page breaks
struct PageComposer {
    pages: Vec<LaidOutPage>,
    y: f32,
}

impl PageComposer {
    fn new() -> Self {
        Self {
            pages: Vec::new(),
            y: MARGIN_MM,
        }
    }

    fn add_page(&mut self) {
        self.pages.push(LaidOutPage::default());
        self.y = MARGIN_MM;
    }

    fn push(&mut self, element: Element) {
        if self.pages.is_empty() {
            self.add_page();
        }
        if let Some(page) = self.pages.last_mut() {
            page.elements.push(element);
        }
    }

    fn ln(&mut self, h: f32) {
        self.y += h;
    }

    /// One line of text in a full-width cell of height `h`; moves to the next line.
    fn line(&mut self, text: &str, font: Font, h: f32, align: Align) {
        if self.pages.is_empty() || self.y + h > PAGE_BREAK_AT_MM {
            self.add_page();
        }

        if !text.is_empty() {
            let width = get_metrics(font.style).measure_mm(text, font.size_pt);
            let x_mm = match align {
                Align::Left => MARGIN_MM + CELL_PADDING_MM,
                Align::Center => MARGIN_MM + (CONTENT_WIDTH_MM - width) / 2.0,
            };
            let baseline_mm = self.y + 0.5 * h + 0.3 * font.size_pt * PT_TO_MM;
            self.push(Element::Text {
                text: text.to_string(),
                x_mm,
                baseline_mm,
                size_pt: font.size_pt,
                style: font.style,
            });
        }
        self.y += h;
    }

    /// Word-wrapped paragraph text. Explicit newlines start new lines; an
    /// empty line still takes up `h`.
    fn multi_line(&mut self, text: &str, font: Font, h: f32) {
        let text = text.strip_suffix('\n').unwrap_or(text);
        for paragraph in text.split('\n') {
            let lines = wrap(paragraph, font, WRAP_WIDTH_MM);
            if lines.is_empty() {
                self.line("", font, h, Align::Left);
            }
            for line in lines {
                self.line(&line, font, h, Align::Left);
            }
        }
    }

    fn rule(&mut self, color: (u8, u8, u8)) {
        let y_mm = self.y;
        self.push(Element::Rule {
            x1_mm: MARGIN_MM,
            x2_mm: PAGE_WIDTH_MM - MARGIN_MM,
            y_mm,
            color,
        });
    }

    fn image(&mut self, path: &Path, x_mm: f32, y_mm: f32, width_mm: f32) {
        self.push(Element::Image {
            path: path.to_path_buf(),
            x_mm,
            y_mm,
            width_mm,
        });
    }

    fn finish(self) -> Vec<LaidOutPage> {
        self.pages
    }
}

/// Greedy word wrap at `max_mm`. Words wider than a line are broken by
/// character. Runs of spaces collapse to one.
fn wrap(text: &str, font: Font, max_mm: f32) -> Vec<String> {
    let metrics = get_metrics(font.style);
    let fits = |s: &str| metrics.measure_mm(s, font.size_pt) <= max_mm;

    let mut lines = Vec::new();
    let mut current = String::new();

    for word in text.split(' ').filter(|w| !w.is_empty()) {
        if !current.is_empty() {
            let candidate = format!("{} {}", current, word);
            if fits(&candidate) {
                current = candidate;
                continue;
            }
            lines.push(std::mem::take(&mut current));
        }

        if fits(word) {
            current = word.to_string();
            continue;
        }

        for c in word.chars() {
            current.push(c);
            if !fits(&current) && current.chars().count() > 1 {
                current.pop();
                lines.push(std::mem::replace(&mut current, c.to_string()));
            }
        }
    }

    if !current.is_empty() {
        lines.push(current);
    }
    lines
}

/// Tabs become spaces and carriage returns are dropped; any other control
/// or non-ASCII character cannot be drawn with the built-in fonts.
fn normalize(text: &str, field: &str) -> Result<String, RenderError> {
    let mut out = String::with_capacity(text.len());
    for ch in text.chars() {
        match ch {
            '\n' => out.push('\n'),
            '\t' => out.push(' '),
            '\r' => {}
            c if c.is_ascii() && !c.is_ascii_control() => out.push(c),
            c => {
                return Err(RenderError::UnrenderableCharacter {
                    ch: c,
                    field: field.to_string(),
                });
            }
        }
    }
    Ok(out)
}

/// Lay out the whole report. `logo` is drawn on the cover when given.
///
/// Fails without producing any page if a field holds a character that
/// cannot be drawn.
pub fn compose(
    document: &ReportDocument,
    logo: Option<&Path>,
) -> Result<Vec<LaidOutPage>, RenderError> {
    let cover = &document.cover;
    let title = normalize(&cover.title, "title")?;
    let candidate = normalize(&cover.candidate_line(), "candidate name")?;
    let domain = normalize(&cover.domain_line(), "domain")?;
    let date = normalize(&cover.date_line(), "date")?;
    let paragraph = normalize(&cover.paragraph, "cover paragraph")?;

    let blocks = document
        .blocks
        .iter()
        .map(|block| {
            let n = block.number;
            Ok((
                normalize(&block.heading(), &format!("question {}", n))?,
                normalize(&block.answer, &format!("answer {}", n))?,
                normalize(&block.evaluation, &format!("feedback {}", n))?,
            ))
        })
        .collect::<Result<Vec<_>, RenderError>>()?;

    let mut composer = PageComposer::new();

    composer.add_page();
    composer.line(&title, TITLE, COVER_LINE_MM, Align::Center);
    match logo {
        Some(path) => {
            composer.image(path, LOGO_X_MM, LOGO_Y_MM, LOGO_WIDTH_MM);
            composer.ln(60.0);
        }
        None => composer.ln(30.0),
    }
    composer.line(&candidate, COVER, COVER_LINE_MM, Align::Center);
    composer.line(&domain, COVER, COVER_LINE_MM, Align::Center);
    composer.line(&date, COVER, COVER_LINE_MM, Align::Center);
    composer.ln(15.0);
    composer.multi_line(&paragraph, COVER_NOTE, COVER_LINE_MM);

    composer.add_page();
    for (heading, answer, evaluation) in &blocks {
        composer.multi_line(heading, HEADING, COVER_LINE_MM);
        composer.ln(2.0);
        composer.multi_line("Your Answer:", LABEL, BODY_LINE_MM);
        composer.multi_line(answer, BODY, BODY_LINE_MM);
        composer.ln(2.0);
        composer.multi_line("Feedback:", LABEL, BODY_LINE_MM);
        composer.multi_line(evaluation, BODY, BODY_LINE_MM);
        composer.ln(8.0);
        composer.rule(RULE_COLOR);
        composer.ln(8.0);
    }

    Ok(composer.finish())
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;
    use coach_domain::{Answer, AnswerRecord, InterviewDomain};

    fn document(records: &[(&str, &str, &str)]) -> ReportDocument {
        let records: Vec<AnswerRecord> = records
            .iter()
            .map(|(q, a, e)| AnswerRecord::new(*q, Answer::try_new(*a).unwrap(), *e))
            .collect();
        ReportDocument::compile(
            "Ada",
            InterviewDomain::Marketing,
            &records,
            NaiveDate::from_ymd_opt(2025, 3, 5).unwrap(),
        )
    }

    fn text_positions(page: &LaidOutPage) -> Vec<(String, f32)> {
        page.elements
            .iter()
            .filter_map(|e| match e {
                Element::Text {
                    text, baseline_mm, ..
                } => Some((text.clone(), *baseline_mm)),
                _ => None,
            })
            .collect()
    }

    #[test]
    fn test_cover_page_only_holds_cover() {
        let pages = compose(&document(&[("Q1?", "A1", "E1")]), None).unwrap();
        assert_eq!(pages.len(), 2);

        let cover: Vec<&str> = pages[0].texts().collect();
        assert_eq!(cover[0], "AI Interview Coach Report");
        assert_eq!(cover[1], "Candidate: Ada");
        assert_eq!(cover[2], "Interview Domain: Marketing");
        assert_eq!(cover[3], "Date: March 05, 2025");
        assert!(cover.iter().all(|t| !t.starts_with("Question")));
        assert!(pages[1].texts().next().unwrap().starts_with("Question 1:"));
    }

    #[test]
    fn test_cover_spacing_without_logo() {
        let pages = compose(&document(&[]), None).unwrap();
        let positions = text_positions(&pages[0]);
        // title cell spans 10..20, then a 30mm gap before the candidate cell
        let candidate_baseline = positions[1].1;
        let expected = 50.0 + 5.0 + 0.3 * 14.0 * PT_TO_MM;
        assert!((candidate_baseline - expected).abs() < 1e-3);
        assert!(!pages[0].elements.iter().any(|e| matches!(e, Element::Image { .. })));
    }

    #[test]
    fn test_logo_is_placed_and_pushes_cover_text_down() {
        let logo = Path::new("logo.png");
        let with_logo = compose(&document(&[]), Some(logo)).unwrap();
        let without = compose(&document(&[]), None).unwrap();

        assert!(with_logo[0].elements.contains(&Element::Image {
            path: PathBuf::from("logo.png"),
            x_mm: 80.0,
            y_mm: 30.0,
            width_mm: 50.0,
        }));
        let shift = text_positions(&with_logo[0])[1].1 - text_positions(&without[0])[1].1;
        assert!((shift - 30.0).abs() < 1e-3);
    }

    #[test]
    fn test_centered_title() {
        let pages = compose(&document(&[]), None).unwrap();
        let Element::Text { x_mm, .. } = &pages[0].elements[0] else {
            panic!("title should be the first element");
        };
        let width = get_metrics(FontStyle::Bold).measure_mm("AI Interview Coach Report", 22.0);
        assert!((x_mm + width / 2.0 - PAGE_WIDTH_MM / 2.0).abs() < 1e-3);
    }

    #[test]
    fn test_blocks_in_order_with_rules() {
        let doc = document(&[
            ("First?", "one", "good"),
            ("Second?", "two", "better"),
            ("Third?", "three", "best"),
        ]);
        let pages = compose(&doc, None).unwrap();
        let texts: Vec<&str> = pages[1..].iter().flat_map(|p| p.texts()).collect();
        assert_eq!(
            texts,
            vec![
                "Question 1: First?", "Your Answer:", "one", "Feedback:", "good",
                "Question 2: Second?", "Your Answer:", "two", "Feedback:", "better",
                "Question 3: Third?", "Your Answer:", "three", "Feedback:", "best",
            ]
        );

        let rules: Vec<&Element> = pages
            .iter()
            .flat_map(|p| p.elements.iter())
            .filter(|e| matches!(e, Element::Rule { .. }))
            .collect();
        assert_eq!(rules.len(), 3);
        assert!(matches!(
            rules[0],
            Element::Rule { x1_mm, x2_mm, color: (200, 200, 200), .. }
                if *x1_mm == 10.0 && *x2_mm == 200.0
        ));
    }

    #[test]
    fn test_long_answer_wraps_within_width() {
        let answer = "word ".repeat(200);
        let pages = compose(&document(&[("Q?", answer.trim(), "E")]), None).unwrap();
        let body: Vec<&str> = pages[1].texts().filter(|t| t.starts_with("word")).collect();
        assert!(body.len() > 1);
        for line in &body {
            assert!(get_metrics(FontStyle::Regular).measure_mm(line, 11.0) <= WRAP_WIDTH_MM);
        }
        let rejoined = body.join(" ");
        assert_eq!(rejoined.split(' ').count(), 200);
    }

    #[test]
    fn test_overlong_word_breaks_by_character() {
        let word = "x".repeat(400);
        let lines = wrap(&word, BODY, WRAP_WIDTH_MM);
        assert!(lines.len() > 1);
        assert_eq!(lines.concat(), word);
        for line in &lines {
            assert!(get_metrics(FontStyle::Regular).measure_mm(line, 11.0) <= WRAP_WIDTH_MM);
        }
    }

    #[test]
    fn test_explicit_newlines_and_blank_lines() {
        assert_eq!(wrap("", BODY, WRAP_WIDTH_MM), Vec::<String>::new());
        let pages = compose(&document(&[("Q?", "line one\n\nline two\n", "E")]), None).unwrap();
        let positions = text_positions(&pages[1]);
        let one = positions.iter().find(|(t, _)| t == "line one").unwrap().1;
        let two = positions.iter().find(|(t, _)| t == "line two").unwrap().1;
        // blank line in between takes a full body line
        assert!((two - one - 2.0 * BODY_LINE_MM).abs() < 1e-3);
    }

    #[test]
    fn test_long_feedback_breaks_pages() {
        let feedback = (1..=60)
            .map(|i| format!("Point {}", i))
            .collect::<Vec<_>>()
            .join("\n");
        let pages = compose(&document(&[("Q?", "A", &feedback)]), None).unwrap();
        assert!(pages.len() >= 3);

        for page in &pages {
            for element in &page.elements {
                if let Element::Text { baseline_mm, .. } = element {
                    assert!(*baseline_mm < PAGE_BREAK_AT_MM);
                }
            }
        }
        let last: Vec<&str> = pages.last().unwrap().texts().collect();
        assert_eq!(last.last(), Some(&"Point 60"));
    }

    #[test]
    fn test_tabs_and_carriage_returns_are_normalized() {
        let pages = compose(&document(&[("Q?", "a\tb\r\nc", "E")]), None).unwrap();
        let texts: Vec<&str> = pages[1].texts().collect();
        assert!(texts.contains(&"a b"));
        assert!(texts.contains(&"c"));
    }

    #[test]
    fn test_control_character_fails_whole_layout() {
        let err = compose(&document(&[("Q?", "A", "bad \u{7} bell")]), None).unwrap_err();
        match err {
            RenderError::UnrenderableCharacter { ch, field } => {
                assert_eq!(ch, '\u{7}');
                assert_eq!(field, "feedback 1");
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }
}
