use serde_json::Value;

use crate::domain::{CodeDetail, ExtraFields, NumberDetail, ReleaseDetail};

#[derive(Debug, thiserror::Error)]
pub enum TransportError {
    #[error("invalid JSON response: {0}")]
    Json(#[from] serde_json::Error),
}

/// Top-level JSON object as SuperSMS returns it.
///
/// Every body must be an object; field sets are left open.
type JsonObject = ExtraFields;

pub fn decode_code_detail_json(json: &str) -> Result<CodeDetail, TransportError> {
    let mut fields: JsonObject = serde_json::from_str(json)?;
    Ok(CodeDetail {
        status: take_scalar(&mut fields, "status"),
        code: take_scalar(&mut fields, "code"),
        extra: fields,
    })
}

pub fn decode_release_detail_json(json: &str) -> Result<ReleaseDetail, TransportError> {
    let mut fields: JsonObject = serde_json::from_str(json)?;
    Ok(ReleaseDetail {
        status: take_scalar(&mut fields, "status"),
        extra: fields,
    })
}

pub fn decode_number_detail_json(json: &str) -> Result<NumberDetail, TransportError> {
    let mut fields: JsonObject = serde_json::from_str(json)?;
    Ok(NumberDetail {
        status: take_scalar(&mut fields, "status"),
        id: take_scalar(&mut fields, "id"),
        phone: take_scalar(&mut fields, "phone"),
        extra: fields,
    })
}

/// Remove `field` when it holds a string, number or boolean and return it as text.
///
/// Numbers keep their JSON spelling (`99` becomes `"99"`). `null` is dropped.
/// Arrays and objects are left in place so they stay reachable through `extra`.
fn take_scalar(fields: &mut JsonObject, field: &str) -> Option<String> {
    let text = match fields.get(field)? {
        Value::String(value) => Some(value.clone()),
        Value::Number(value) => Some(value.to_string()),
        Value::Bool(value) => Some(value.to_string()),
        Value::Null => None,
        Value::Array(_) | Value::Object(_) => return None,
    };
    fields.remove(field);
    text
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    #[test]
    fn decode_code_detail_reads_status_and_code() {
        let detail = decode_code_detail_json(r#"{"status":"ok","code":"1234"}"#).unwrap();
        assert_eq!(detail.status.as_deref(), Some("ok"));
        assert_eq!(detail.code.as_deref(), Some("1234"));
        assert!(detail.extra.is_empty());
    }

    #[test]
    fn decode_code_detail_keeps_unknown_fields() {
        let json = r#"
        {
          "status": "ok",
          "code": 1234,
          "message": "Your code is 1234",
          "received_at": 1700000000
        }
        "#;

        let detail = decode_code_detail_json(json).unwrap();
        assert_eq!(detail.code.as_deref(), Some("1234"));
        assert_eq!(detail.get("message"), Some(&json!("Your code is 1234")));
        assert_eq!(detail.get("received_at"), Some(&json!(1_700_000_000)));
        assert!(detail.get("code").is_none());
    }

    #[test]
    fn decode_code_detail_tolerates_missing_fields() {
        let detail = decode_code_detail_json("{}").unwrap();
        assert_eq!(detail, CodeDetail::default());
    }

    #[test]
    fn decode_number_detail_normalizes_numeric_id() {
        let from_number = decode_number_detail_json(r#"{"id":99}"#).unwrap();
        let from_string = decode_number_detail_json(r#"{"id":"99"}"#).unwrap();
        assert_eq!(from_number.id.as_deref(), Some("99"));
        assert_eq!(from_number, from_string);
    }

    #[test]
    fn decode_number_detail_reads_phone_and_status() {
        let json = r#"{"status":"ok","id":"99","phone":"79251234567","price":1.5}"#;
        let detail = decode_number_detail_json(json).unwrap();
        assert_eq!(detail.status.as_deref(), Some("ok"));
        assert_eq!(detail.phone.as_deref(), Some("79251234567"));
        assert_eq!(detail.get("price"), Some(&json!(1.5)));
    }

    #[test]
    fn decode_leaves_structured_values_in_extra() {
        let json = r#"{"status":{"state":"pending"},"id":null}"#;
        let detail = decode_number_detail_json(json).unwrap();
        assert!(detail.status.is_none());
        assert!(detail.id.is_none());
        assert_eq!(detail.get("status"), Some(&json!({"state": "pending"})));
        assert!(detail.get("id").is_none());
    }

    #[test]
    fn decode_release_detail_reads_boolean_status() {
        let detail = decode_release_detail_json(r#"{"status":true}"#).unwrap();
        assert_eq!(detail.status.as_deref(), Some("true"));
    }

    #[test]
    fn decode_rejects_malformed_json() {
        let err = decode_code_detail_json("{ not json }").unwrap_err();
        assert!(matches!(err, TransportError::Json(_)));
    }

    #[test]
    fn decode_rejects_non_object_body() {
        assert!(decode_release_detail_json(r#"["ok"]"#).is_err());
        assert!(decode_number_detail_json(r#""ok""#).is_err());
    }
}
