#[cfg(test)]
pub mod fixtures {
    use crate::models::domain::{QuestionOptions, QuestionRecord};

    /// Upstream page with a head, navigation chrome and a script block.
    pub const AUDIT_PAGE: &str = r#"<!DOCTYPE html>
<html>
  <head><title>Audits and Reports</title><script>window.analytics = {};</script></head>
  <body>
    <nav>Home | Audits</nav>
    <main>
      <h1>Audits and Reports</h1>
      <p>The 2021 performance audit reviewed street services spending.</p>
    </main>
    <script>trackPage();</script>
  </body>
</html>"#;

    pub const WELL_FORMED_GENERATION: &str = "Question: What year was the report published?
Options:
A. 2019
B. 2020
C. 2021
D. 2022
Correct Answer: C. 2021";

    pub const GENERATION_WITHOUT_ANSWER: &str = "Question: What year was the report published?
Options:
A. 2019
B. 2020
C. 2021
D. 2022";

    /// The record [`WELL_FORMED_GENERATION`] parses into.
    pub fn question_record() -> QuestionRecord {
        QuestionRecord {
            question: "What year was the report published?".to_string(),
            options: QuestionOptions {
                a: "2019".to_string(),
                b: "2020".to_string(),
                c: "2021".to_string(),
                d: "2022".to_string(),
            },
            correct_answer: "C. 2021".to_string(),
        }
    }
}

#[cfg(test)]
pub mod test_helpers {
    use actix_web::http::StatusCode;

    /// Asserts that a status code represents an error (4xx or 5xx)
    pub fn assert_error_status(status: StatusCode) {
        assert!(
            status.is_client_error() || status.is_server_error(),
            "Expected error status, got: {}",
            status
        );
    }

    /// Asserts that a status code represents success (2xx)
    pub fn assert_success_status(status: StatusCode) {
        assert!(
            status.is_success(),
            "Expected success status, got: {}",
            status
        );
    }
}

#[cfg(test)]
mod tests {
    use super::fixtures::*;
    use super::test_helpers::*;
    use crate::services::content_fetcher::extract_visible_text;
    use crate::services::generation_parser::parse_generation;
    use actix_web::http::StatusCode;

    #[test]
    fn test_fixtures_well_formed_generation_matches_record() {
        assert_eq!(
            parse_generation(WELL_FORMED_GENERATION).unwrap(),
            question_record()
        );
    }

    #[test]
    fn test_fixtures_audit_page_has_visible_text() {
        let text = extract_visible_text(AUDIT_PAGE);
        assert!(text.contains("street services spending"));
        assert!(!text.contains("trackPage"));
        assert!(!text.contains("analytics"));
    }

    #[test]
    fn test_status_helpers() {
        assert_error_status(StatusCode::NOT_FOUND);
        assert_success_status(StatusCode::OK);
    }
}
