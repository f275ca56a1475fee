//! Data Transfer Objects

use serde::Serialize;

/// 统一响应信封：`{"message": ...}`
///
/// 成功与错误响应都使用这个结构
#[derive(Debug, Serialize)]
pub struct MessageResponse<T: Serialize> {
    pub message: T,
}

impl<T: Serialize> MessageResponse<T> {
    pub fn new(message: T) -> Self {
        Self { message }
    }
}

/// 空对象 `{}`
#[derive(Debug, Default, Serialize)]
pub struct Empty {}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_envelope_shape() {
        let value = serde_json::to_value(MessageResponse::new("not found")).unwrap();
        assert_eq!(value, json!({"message": "not found"}));
    }

    #[test]
    fn test_empty_is_object() {
        assert_eq!(serde_json::to_value(Empty {}).unwrap(), json!({}));
    }
}
