use serde::Deserialize;
use validator::Validate;

use crate::errors::AppResult;
use crate::models::domain::{OptionLabel, QuestionRecord};

#[derive(Debug, Clone, Deserialize, Validate)]
pub struct CheckAnswerRequest {
    pub record: QuestionRecord,

    #[validate(length(equal = 1, message = "Selected answer must be a single option label"))]
    pub selected: String,
}

impl CheckAnswerRequest {
    pub fn selected_label(&self) -> AppResult<OptionLabel> {
        self.validate()?;
        self.selected.parse()
    }
}
