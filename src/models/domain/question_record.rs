use std::{fmt, str::FromStr};

use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Serialize};

use crate::errors::AppError;

static LEADING_LABEL_REGEX: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^\s*([A-D])(?:[.):]|\s*$|\s+(?P<text>\S.*?)\s*$)")
        .expect("LEADING_LABEL_REGEX is a valid regex pattern")
});

#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Deserialize, Serialize)]
pub enum OptionLabel {
    A,
    B,
    C,
    D,
}

impl OptionLabel {
    pub const ALL: [OptionLabel; 4] = [
        OptionLabel::A,
        OptionLabel::B,
        OptionLabel::C,
        OptionLabel::D,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            OptionLabel::A => "A",
            OptionLabel::B => "B",
            OptionLabel::C => "C",
            OptionLabel::D => "D",
        }
    }
}

impl fmt::Display for OptionLabel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for OptionLabel {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim() {
            "A" => Ok(OptionLabel::A),
            "B" => Ok(OptionLabel::B),
            "C" => Ok(OptionLabel::C),
            "D" => Ok(OptionLabel::D),
            other => Err(AppError::InvalidRequest(format!(
                "Invalid option label '{}', expected one of A, B, C, D",
                other
            ))),
        }
    }
}

/// The four answer choices, serialized as `{"A": .., "B": .., "C": .., "D": ..}`.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize, Serialize)]
#[serde(deny_unknown_fields)]
pub struct QuestionOptions {
    #[serde(rename = "A")]
    pub a: String,
    #[serde(rename = "B")]
    pub b: String,
    #[serde(rename = "C")]
    pub c: String,
    #[serde(rename = "D")]
    pub d: String,
}

impl QuestionOptions {
    pub fn get(&self, label: OptionLabel) -> &str {
        match label {
            OptionLabel::A => &self.a,
            OptionLabel::B => &self.b,
            OptionLabel::C => &self.c,
            OptionLabel::D => &self.d,
        }
    }

    pub fn iter(&self) -> impl Iterator<Item = (OptionLabel, &str)> + '_ {
        OptionLabel::ALL
            .into_iter()
            .map(move |label| (label, self.get(label)))
    }
}

/// A generated multiple-choice question as returned to the client.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct QuestionRecord {
    pub question: String,
    pub options: QuestionOptions,
    /// Verbatim model output, e.g. `"C. 2021"` or `"C"`. Not checked
    /// against `options`.
    pub correct_answer: String,
}

impl QuestionRecord {
    /// Resolves `correct_answer` to an option label.
    ///
    /// A leading label (`"C"`, `"C. 2021"`, `"C) 2021"`) wins. A label
    /// followed only by whitespace (`"C 2021"`) counts when the rest is that
    /// option's text. Otherwise the answer is matched against the option
    /// texts.
    pub fn correct_label(&self) -> Option<OptionLabel> {
        if let Some(caps) = LEADING_LABEL_REGEX.captures(&self.correct_answer) {
            let label: OptionLabel = caps[1].parse().ok()?;
            let matches_option = caps.name("text").map_or(true, |text| {
                self.options
                    .get(label)
                    .trim()
                    .eq_ignore_ascii_case(text.as_str())
            });
            if matches_option {
                return Some(label);
            }
        }

        let answer = self.correct_answer.trim();
        self.options
            .iter()
            .find(|(_, text)| text.trim().eq_ignore_ascii_case(answer))
            .map(|(label, _)| label)
    }

    pub fn is_correct(&self, selected: OptionLabel) -> bool {
        self.correct_label() == Some(selected)
    }
}
