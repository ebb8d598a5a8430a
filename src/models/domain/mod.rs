pub mod category;
pub mod excerpt;
pub mod question_record;
pub use category::Category;
pub use excerpt::ContentExcerpt;
pub use question_record::{OptionLabel, QuestionOptions, QuestionRecord};
