use serde::Serialize;

use crate::models::domain::{Category, OptionLabel};

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CategoryDto {
    pub name: String,
    pub path_segment: String,
}

impl From<Category> for CategoryDto {
    fn from(category: Category) -> Self {
        CategoryDto {
            name: category.name().to_string(),
            path_segment: category.path_segment().to_string(),
        }
    }
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CheckAnswerResponse {
    pub correct: bool,
    pub correct_label: Option<OptionLabel>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_category_dto_uses_logical_name() {
        let dto: CategoryDto = Category::DataSites.into();
        assert_eq!(dto.name, "data sites");
        assert_eq!(dto.path_segment, "data");

        let json = serde_json::to_value(&dto).unwrap();
        assert_eq!(json["pathSegment"], "data");
    }

    #[test]
    fn test_check_answer_response_shape() {
        let response = CheckAnswerResponse {
            correct: false,
            correct_label: Some(OptionLabel::C),
        };
        let json = serde_json::to_value(&response).unwrap();
        assert_eq!(json, serde_json::json!({ "correct": false, "correctLabel": "C" }));
    }
}
