//! Response envelope for AI endpoints.

use serde::Serialize;

use crate::application::GenerateResult;

/// `{ "success": true, "data": ..., "model": "..." }`
#[derive(Debug, Clone, Serialize)]
pub struct GenerationResponse<T> {
    pub success: bool,
    pub data: T,
    pub model: String,
}

impl<T> From<GenerateResult<T>> for GenerationResponse<T> {
    fn from(result: GenerateResult<T>) -> Self {
        Self {
            success: true,
            data: result.data,
            model: result.model,
        }
    }
}
