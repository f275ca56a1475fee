//! Post Context - Value Objects

use serde::Serialize;
use serde_json::{Map, Value};

/// Post 标识
///
/// 原样保存路径参数，不做数字校验，由上游决定是否接受。
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct PostId(String);

impl PostId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for PostId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<String> for PostId {
    fn from(id: String) -> Self {
        Self(id)
    }
}

/// 解析后的请求体
///
/// JSON 对象或 URL 编码表单统一成一个 key/value 映射；
/// 缺失或无法解析的请求体为空映射。
#[derive(Debug, Clone, Default, PartialEq)]
pub struct PostFields(Map<String, Value>);

impl PostFields {
    pub fn new(fields: Map<String, Value>) -> Self {
        Self(fields)
    }

    pub fn empty() -> Self {
        Self::default()
    }

    pub fn get(&self, name: &str) -> Option<&Value> {
        self.0.get(name)
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

/// JavaScript 语义的真值判断
///
/// `null`、`false`、`0`、`NaN` 和空字符串为假，其余（包括空数组、空对象）为真。
pub fn is_truthy(value: &Value) -> bool {
    match value {
        Value::Null => false,
        Value::Bool(b) => *b,
        Value::Number(n) => n.as_f64().map(|f| f != 0.0 && !f.is_nan()).unwrap_or(true),
        Value::String(s) => !s.is_empty(),
        Value::Array(_) | Value::Object(_) => true,
    }
}

/// 更新 Post 时发往上游的字段
///
/// 只包含请求中出现且为真值的字段，空字符串同样会被丢弃。
/// 缺席字段不会序列化成 `null`。
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct PostChanges {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<Value>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub body: Option<Value>,
}

impl PostChanges {
    pub fn from_fields(fields: &PostFields) -> Self {
        let pick = |name: &str| fields.get(name).filter(|v| is_truthy(v)).cloned();
        Self {
            title: pick("title"),
            body: pick("body"),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.title.is_none() && self.body.is_none()
    }
}

/// 创建 Post 时发往上游的字段
///
/// 原样转发 `title` 与 `body`，不做存在性或非空校验。
/// 请求中缺席的字段不出现在上游请求体里，显式的 `null` 照常转发。
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct NewPost {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<Value>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub body: Option<Value>,
}

impl NewPost {
    pub fn from_fields(fields: &PostFields) -> Self {
        Self {
            title: fields.get("title").cloned(),
            body: fields.get("body").cloned(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn fields(value: Value) -> PostFields {
        match value {
            Value::Object(map) => PostFields::new(map),
            _ => panic!("expected object"),
        }
    }

    #[test]
    fn test_truthiness_follows_javascript() {
        assert!(!is_truthy(&json!(null)));
        assert!(!is_truthy(&json!(false)));
        assert!(!is_truthy(&json!(0)));
        assert!(!is_truthy(&json!(0.0)));
        assert!(!is_truthy(&json!("")));
        assert!(is_truthy(&json!("0")));
        assert!(is_truthy(&json!(" ")));
        assert!(is_truthy(&json!(-1)));
        assert!(is_truthy(&json!([])));
        assert!(is_truthy(&json!({})));
    }

    #[test]
    fn test_changes_with_only_title() {
        let changes = PostChanges::from_fields(&fields(json!({"title": "new"})));
        assert_eq!(serde_json::to_value(&changes).unwrap(), json!({"title": "new"}));
    }

    #[test]
    fn test_changes_with_only_body() {
        let changes = PostChanges::from_fields(&fields(json!({"body": "text"})));
        assert_eq!(serde_json::to_value(&changes).unwrap(), json!({"body": "text"}));
    }

    #[test]
    fn test_changes_drop_empty_string_title() {
        let changes = PostChanges::from_fields(&fields(json!({"title": "", "body": "text"})));
        assert_eq!(serde_json::to_value(&changes).unwrap(), json!({"body": "text"}));
    }

    #[test]
    fn test_changes_drop_null_and_ignore_other_keys() {
        let changes = PostChanges::from_fields(&fields(json!({
            "title": null,
            "userId": 9,
            "id": 3
        })));
        assert!(changes.is_empty());
        assert_eq!(serde_json::to_value(&changes).unwrap(), json!({}));
    }

    #[test]
    fn test_new_post_forwards_values_as_received() {
        let new_post = NewPost::from_fields(&fields(json!({"title": "hello", "body": "world"})));
        assert_eq!(
            serde_json::to_value(&new_post).unwrap(),
            json!({"title": "hello", "body": "world"})
        );
    }

    #[test]
    fn test_new_post_keeps_empty_and_null_values() {
        let new_post = NewPost::from_fields(&fields(json!({"title": "", "body": null})));
        assert_eq!(
            serde_json::to_value(&new_post).unwrap(),
            json!({"title": "", "body": null})
        );
    }

    #[test]
    fn test_new_post_omits_absent_fields() {
        let new_post = NewPost::from_fields(&PostFields::empty());
        assert_eq!(serde_json::to_value(&new_post).unwrap(), json!({}));
    }

    #[test]
    fn test_post_id_is_kept_verbatim() {
        let id = PostId::new("abc 1");
        assert_eq!(id.as_str(), "abc 1");
        assert_eq!(id.to_string(), "abc 1");
    }
}
