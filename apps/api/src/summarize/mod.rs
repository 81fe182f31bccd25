// PDF summarization: multipart upload → text extraction → summary prompt.

pub mod extractor;
pub mod handlers;
pub mod upload;
