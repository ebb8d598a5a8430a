//! Line-oriented parser for the question template the model is asked to
//! follow:
//!
//! ```text
//! Question: <text>
//! Options:
//! A. <text>
//! B. <text>
//! C. <text>
//! D. <text>
//! Correct Answer: <text>
//! ```
//!
//! Each section is a state. Labels appear in order, either at the start of a
//! line or after whitespace where the next section is due, so a template
//! squeezed onto one line still parses. Parsing stops at the first section
//! that is missing, out of order or empty, and the error names that section.

use std::fmt;

use thiserror::Error;

use crate::models::domain::{OptionLabel, QuestionOptions, QuestionRecord};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Section {
    Question,
    Options,
    Option(OptionLabel),
    CorrectAnswer,
}

impl Section {
    pub const ORDER: [Section; 7] = [
        Section::Question,
        Section::Options,
        Section::Option(OptionLabel::A),
        Section::Option(OptionLabel::B),
        Section::Option(OptionLabel::C),
        Section::Option(OptionLabel::D),
        Section::CorrectAnswer,
    ];

    /// Literal marker that opens the section.
    pub fn marker(&self) -> &'static str {
        match self {
            Section::Question => "Question:",
            Section::Options => "Options:",
            Section::Option(OptionLabel::A) => "A.",
            Section::Option(OptionLabel::B) => "B.",
            Section::Option(OptionLabel::C) => "C.",
            Section::Option(OptionLabel::D) => "D.",
            Section::CorrectAnswer => "Correct Answer:",
        }
    }

    /// Whether the section carries text of its own.
    fn has_content(&self) -> bool {
        !matches!(self, Section::Options)
    }

    /// Text following the marker when `text` opens this section. Option
    /// markers need whitespace or end of text after them, so `D.C.` is not
    /// option D.
    fn strip_marker<'a>(&self, text: &'a str) -> Option<&'a str> {
        let rest = text.strip_prefix(self.marker())?;
        match self {
            Section::Option(_) if !rest.is_empty() && !rest.starts_with(char::is_whitespace) => {
                None
            }
            _ => Some(rest),
        }
    }

    /// Byte offset where this section opens inside `text`, at the start or
    /// after whitespace.
    fn find_in(&self, text: &str) -> Option<usize> {
        text.match_indices(self.marker())
            .map(|(at, _)| at)
            .find(|&at| {
                let boundary = text[..at]
                    .chars()
                    .next_back()
                    .map_or(true, char::is_whitespace);
                boundary && self.strip_marker(&text[at..]).is_some()
            })
    }

    fn detect(line: &str) -> Option<(Section, &str)> {
        Section::ORDER.into_iter().find_map(|section| {
            section
                .strip_marker(line)
                .map(|rest| (section, rest.trim()))
        })
    }
}

impl fmt::Display for Section {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Section::Question => f.write_str("Question"),
            Section::Options => f.write_str("Options"),
            Section::Option(label) => write!(f, "option {}", label),
            Section::CorrectAnswer => f.write_str("Correct Answer"),
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum ParseError {
    #[error("missing section '{0}'")]
    Missing(Section),

    #[error("expected section '{expected}' but found '{found}'")]
    OutOfOrder { expected: Section, found: Section },

    #[error("section '{0}' is empty")]
    Empty(Section),

    #[error("unexpected text where section '{0}' should start")]
    UnexpectedText(Section),

    #[error("unexpected text after section 'Correct Answer'")]
    TrailingText,
}

/// Parses a raw completion into a [`QuestionRecord`].
pub fn parse_generation(text: &str) -> Result<QuestionRecord, ParseError> {
    let mut parser = GenerationParser::default();
    for line in text.lines() {
        parser.feed(line)?;
    }
    parser.finish()
}

#[derive(Default)]
struct GenerationParser {
    sections: Vec<(Section, String)>,
}

impl GenerationParser {
    fn expected(&self) -> Option<Section> {
        Section::ORDER.get(self.sections.len()).copied()
    }

    fn feed(&mut self, line: &str) -> Result<(), ParseError> {
        let line = line.trim();
        if line.is_empty() {
            return Ok(());
        }

        // "Correct Answer:" with the answer on the following line; the answer
        // itself usually starts with an option marker.
        if let Some((Section::CorrectAnswer, content)) = self.sections.last_mut() {
            if content.is_empty() {
                content.push_str(line);
                return Ok(());
            }
            return Err(ParseError::TrailingText);
        }

        match Section::detect(line) {
            Some((found, rest)) => self.open(found, rest),
            None => self.continue_section(line),
        }
    }

    fn open(&mut self, found: Section, rest: &str) -> Result<(), ParseError> {
        let expected = self.expected().ok_or(ParseError::TrailingText)?;
        if found != expected {
            return Err(ParseError::OutOfOrder { expected, found });
        }
        self.close_current()?;

        self.sections.push((found, String::new()));
        if found.has_content() {
            return self.absorb(rest);
        }

        // "Options: A. ..." on one line
        if rest.is_empty() {
            Ok(())
        } else {
            self.feed(rest)
        }
    }

    fn continue_section(&mut self, line: &str) -> Result<(), ParseError> {
        let open = matches!(self.sections.last(), Some((section, _)) if section.has_content());
        if open {
            self.absorb(line)
        } else {
            Err(ParseError::UnexpectedText(
                self.expected().unwrap_or(Section::Question),
            ))
        }
    }

    /// Appends `text` to the open section. Anything from the next section's
    /// marker onwards is fed back as a line of its own.
    fn absorb(&mut self, text: &str) -> Result<(), ParseError> {
        let (own, next) = match self.expected().and_then(|next| next.find_in(text)) {
            Some(at) => (text[..at].trim_end(), Some(&text[at..])),
            None => (text, None),
        };

        if let Some((_, content)) = self.sections.last_mut() {
            if !own.is_empty() {
                if !content.is_empty() {
                    content.push(' ');
                }
                content.push_str(own);
            }
        }

        match next {
            Some(next) => self.feed(next),
            None => Ok(()),
        }
    }

    fn close_current(&self) -> Result<(), ParseError> {
        match self.sections.last() {
            Some((section, content)) if section.has_content() && content.is_empty() => {
                Err(ParseError::Empty(*section))
            }
            _ => Ok(()),
        }
    }

    fn finish(self) -> Result<QuestionRecord, ParseError> {
        if let Some(missing) = self.expected() {
            return Err(ParseError::Missing(missing));
        }
        self.close_current()?;

        let mut contents = self.sections.into_iter().map(|(_, content)| content);
        let mut next = || contents.next().unwrap_or_default();

        let question = next();
        let _options = next();
        let options = QuestionOptions {
            a: next(),
            b: next(),
            c: next(),
            d: next(),
        };
        let correct_answer = next();

        Ok(QuestionRecord {
            question,
            options,
            correct_answer,
        })
    }
}
