use serde::{Deserialize, Serialize};

/// Uniform result of every resource-client call.
///
/// Client functions never fail; callers branch on `success` and show
/// `message` or `error` to the user.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ApiEnvelope<T> {
    pub success: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub data: Option<T>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl<T> ApiEnvelope<T> {
    pub fn ok(data: T) -> Self {
        Self {
            success: true,
            data: Some(data),
            message: None,
            error: None,
        }
    }

    pub fn ok_with_message(data: T, message: impl Into<String>) -> Self {
        Self {
            message: Some(message.into()),
            ..Self::ok(data)
        }
    }

    /// Success without payload (delete)
    pub fn done(message: impl Into<String>) -> Self {
        Self {
            success: true,
            data: None,
            message: Some(message.into()),
            error: None,
        }
    }

    pub fn fail(error: impl Into<String>) -> Self {
        let error = error.into();
        Self {
            success: false,
            data: None,
            message: None,
            error: Some(if error.trim().is_empty() {
                "Unknown error".to_string()
            } else {
                error
            }),
        }
    }

    pub fn is_success(&self) -> bool {
        self.success
    }

    /// Text to surface to the user: the error on failure, the message on success
    pub fn user_text(&self) -> Option<&str> {
        if self.success {
            self.message.as_deref()
        } else {
            self.error.as_deref()
        }
    }

    pub fn into_result(self) -> Result<Option<T>, String> {
        if self.success {
            Ok(self.data)
        } else {
            Err(self.error.unwrap_or_else(|| "Unknown error".to_string()))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_wire_shape_skips_absent_fields() {
        let ok = ApiEnvelope::ok_with_message(5, "Claim created");
        assert_eq!(
            serde_json::to_value(&ok).unwrap(),
            json!({"success": true, "data": 5, "message": "Claim created"})
        );
        let failed: ApiEnvelope<i32> = ApiEnvelope::fail("HTTP 500");
        assert_eq!(
            serde_json::to_value(&failed).unwrap(),
            json!({"success": false, "error": "HTTP 500"})
        );
    }

    #[test]
    fn test_fail_never_has_empty_error() {
        let failed: ApiEnvelope<()> = ApiEnvelope::fail("  ");
        assert_eq!(failed.error.as_deref(), Some("Unknown error"));
    }

    #[test]
    fn test_into_result() {
        assert_eq!(ApiEnvelope::ok(1).into_result(), Ok(Some(1)));
        assert_eq!(ApiEnvelope::<i32>::done("Deleted").into_result(), Ok(None));
        assert_eq!(
            ApiEnvelope::<i32>::fail("boom").into_result(),
            Err("boom".to_string())
        );
    }

    #[test]
    fn test_user_text() {
        assert_eq!(ApiEnvelope::<()>::done("Deleted").user_text(), Some("Deleted"));
        assert_eq!(ApiEnvelope::<()>::fail("boom").user_text(), Some("boom"));
    }
}
