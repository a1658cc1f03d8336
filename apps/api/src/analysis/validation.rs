use serde_json::Value;

use crate::classifier::AnalysisRequest;

/// JSON truthiness as the public API has always applied it to `text`:
/// `null`, `false`, `0` and `""` are rejected, everything else passes.
pub fn is_truthy(value: &Value) -> bool {
    match value {
        Value::Null => false,
        Value::Bool(b) => *b,
        Value::Number(n) => n.as_f64().map_or(true, |f| f != 0.0),
        Value::String(s) => !s.is_empty(),
        Value::Array(_) | Value::Object(_) => true,
    }
}

/// Builds the outbound request from an inbound body, or `None` when `text` is missing or falsy.
/// Other fields of the body are dropped; `text` itself is passed on untouched.
pub fn extract_request(body: &Value) -> Option<AnalysisRequest> {
    let text = body.get("text")?;
    is_truthy(text).then(|| AnalysisRequest { text: text.clone() })
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_falsy_values_rejected() {
        for body in [
            json!({}),
            json!({ "text": "" }),
            json!({ "text": null }),
            json!({ "text": false }),
            json!({ "text": 0 }),
            json!({ "text": 0.0 }),
            json!({ "content": "resume" }),
        ] {
            assert!(extract_request(&body).is_none(), "accepted {body}");
        }
    }

    #[test]
    fn test_non_object_bodies_rejected() {
        for body in [json!("text"), json!(["text"]), json!(null), json!(42)] {
            assert!(extract_request(&body).is_none(), "accepted {body}");
        }
    }

    #[test]
    fn test_string_zero_and_whitespace_accepted() {
        assert_eq!(
            extract_request(&json!({ "text": "0" })),
            Some(AnalysisRequest { text: json!("0") })
        );
        assert_eq!(
            extract_request(&json!({ "text": "   " })),
            Some(AnalysisRequest { text: json!("   ") })
        );
    }

    #[test]
    fn test_extra_fields_dropped() {
        let request = extract_request(&json!({ "text": "resume", "user": "x" })).unwrap();
        assert_eq!(serde_json::to_value(&request).unwrap(), json!({ "text": "resume" }));
    }

    #[test]
    fn test_truthy_non_strings_pass_through() {
        assert!(is_truthy(&json!(true)));
        assert!(is_truthy(&json!(-1)));
        assert!(is_truthy(&json!([])));
        assert!(is_truthy(&json!({})));
    }
}
