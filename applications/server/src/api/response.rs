/// JSON response envelope shared by every users endpoint
use serde::{Deserialize, Serialize};

/// `{ success, data?, count?, message? }`; absent fields are omitted
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ApiResponse<T> {
    pub success: bool,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub data: Option<T>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub count: Option<usize>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
}

impl<T> ApiResponse<T> {
    pub fn ok(data: T) -> Self {
        Self {
            success: true,
            data: Some(data),
            count: None,
            message: None,
        }
    }

    pub fn with_message(mut self, message: impl Into<String>) -> Self {
        self.message = Some(message.into());
        self
    }

    pub fn failure(message: impl Into<String>) -> Self {
        Self {
            success: false,
            data: None,
            count: None,
            message: Some(message.into()),
        }
    }
}

impl<T> ApiResponse<Vec<T>> {
    /// Successful listing; `count` mirrors the number of items
    pub fn list(items: Vec<T>) -> Self {
        Self {
            count: Some(items.len()),
            ..Self::ok(items)
        }
    }
}

impl ApiResponse<()> {
    /// Success carrying only a message
    pub fn message_only(message: impl Into<String>) -> Self {
        Self {
            success: true,
            data: None,
            count: None,
            message: Some(message.into()),
        }
    }
}
