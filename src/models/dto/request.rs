use serde::Deserialize;
use validator::Validate;

use crate::providers::extraction::DocumentType;

/// Query parameters accompanying a raw document upload.
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct DocumentUploadParams {
    #[validate(length(min = 1, max = 255))]
    pub file_name: String,

    pub file_type: DocumentType,
}

#[derive(Debug, Clone, Deserialize, Validate)]
pub struct ChatRequest {
    #[validate(length(min = 1, max = 8000, message = "Message must be 1-8000 characters"))]
    pub message: String,
}

/// `selected_option: null` clears the slot back to unset.
#[derive(Debug, Clone, Deserialize)]
pub struct SelectAnswerRequest {
    pub question_index: usize,
    pub selected_option: Option<String>,
}
