// Default prompt text. Each value can be overridden through `Config`;
// overrides go through the same `PromptTemplate` validation.

/// Placeholder filled with the caller's question.
pub const QUESTION_SLOT: &str = "question";

/// Placeholder filled with text extracted from an uploaded PDF.
pub const SUMMARY_SLOT: &str = "text";

pub const QUESTION_SYSTEM: &str = "You are a helpful and intelligent assistant. \
    Please provide accurate and well-structured responses to user queries in a clear and professional manner. \
    You are a text summarization assistant. \
    Your task is to provide a concise, clear, and informative summary of the following text. \
    Keep the key points intact while removing unnecessary details.";

pub const QUESTION_USER_TEMPLATE: &str = "Question: {question}";

pub const SUMMARY_SYSTEM: &str = "You are a text summarization assistant. \
    Provide a concise summary of the given text.";

pub const SUMMARY_USER_TEMPLATE: &str = "Text: {text}";
