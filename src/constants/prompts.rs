pub const QUESTION_SYSTEM_PROMPT: &str = "You are an expert assistant specializing in creating detailed, challenging multiple-choice trivia questions based on provided content. The questions should be nuanced, with subtle distinctions in the answer choices that require careful reading and understanding of the material.";

const QUESTION_USER_PROMPT_PREFIX: &str = "Using the following content from the LA City Controller's website, generate a complex, detailed multiple-choice trivia question. The question should require in-depth knowledge of the topic, and all options should be plausible but only one correct:";

pub const QUESTION_OUTPUT_TEMPLATE: &str = "Question: [Your challenging question here]
Options:
A. [Option A]
B. [Option B]
C. [Option C]
D. [Option D]
Correct Answer: [Correct option]";

/// User instruction with the page excerpt embedded verbatim.
pub fn question_user_prompt(excerpt: &str) -> String {
    format!(
        "{}\n\n{}\n\nProvide the response in the format:\n{}",
        QUESTION_USER_PROMPT_PREFIX, excerpt, QUESTION_OUTPUT_TEMPLATE
    )
}
