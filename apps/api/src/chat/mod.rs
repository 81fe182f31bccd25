// Question answering: prompt templates, the completion pipeline, and the
// POST /question handler. All LLM calls go through `CompletionProvider`.

pub mod handlers;
pub mod pipeline;
pub mod template;
