//! Total accessors over `serde_json::Value`.
//!
//! Nothing here fails loudly: malformed JSON and unexpected shapes come back
//! as `None`.

use serde_json::Value;

pub type JsonObject = serde_json::Map<String, Value>;

/// Parse `s` as a JSON object. Arrays, primitives and malformed input are `None`.
#[must_use]
pub fn parse_object(s: &str) -> Option<JsonObject> {
    match serde_json::from_str::<Value>(s) {
        Ok(Value::Object(map)) => Some(map),
        Ok(_) => None,
        Err(e) => {
            log::trace!("not a JSON object: {e}");
            None
        }
    }
}

pub(crate) fn str_field<'a>(obj: &'a JsonObject, key: &str) -> Option<&'a str> {
    obj.get(key)?.as_str()
}

pub(crate) fn object_field<'a>(obj: &'a JsonObject, key: &str) -> Option<&'a JsonObject> {
    obj.get(key)?.as_object()
}

/// Some key is made only of ASCII digits, the usual shape of node ids
pub(crate) fn has_numeric_key(obj: &JsonObject) -> bool {
    obj.keys()
        .any(|k| !k.is_empty() && k.bytes().all(|b| b.is_ascii_digit()))
}

/// True for `{"prompt": "<string>"}` with nothing else in it.
///
/// Such objects only point at a prompt, they are never one.
#[must_use]
pub fn is_wrapper_prompt(s: &str) -> bool {
    let s = s.trim();
    if !(s.starts_with('{') && s.ends_with('}')) {
        return false;
    }
    parse_object(s).is_some_and(|obj| {
        obj.len() == 1 && obj.get("prompt").is_some_and(Value::is_string)
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn wrapper_prompt_detection() {
        assert!(is_wrapper_prompt(r#"{"prompt":"x"}"#));
        assert!(is_wrapper_prompt("  {\"prompt\": \"\"}\n"));
        assert!(!is_wrapper_prompt(r#"{"prompt":"x","other":1}"#));
        assert!(!is_wrapper_prompt(r#"{"foo":"x"}"#));
        assert!(!is_wrapper_prompt(r#"{"prompt":{"1":{}}}"#));
        assert!(!is_wrapper_prompt(r#"[{"prompt":"x"}]"#));
        assert!(!is_wrapper_prompt(r#"{"prompt":"x""#));
        assert!(!is_wrapper_prompt("prompt: x"));
    }

    #[test]
    fn parse_object_rejects_non_objects() {
        assert!(parse_object(r#"{"a":1}"#).is_some());
        assert!(parse_object("  {}  ").is_some());
        assert!(parse_object("[1,2]").is_none());
        assert!(parse_object("\"text\"").is_none());
        assert!(parse_object("{broken").is_none());
        assert!(parse_object("").is_none());
    }

    #[test]
    fn numeric_key_detection() {
        let graph = parse_object(r#"{"12":{},"extra":1}"#).expect("object");
        assert!(has_numeric_key(&graph));
        let meta = parse_object(r#"{"prompt":"x","1a":2,"":3}"#).expect("object");
        assert!(!has_numeric_key(&meta));
    }

    #[test]
    fn field_accessors_check_types() {
        let obj = parse_object(r#"{"s":"v","n":1,"o":{"k":true}}"#).expect("object");
        assert_eq!(str_field(&obj, "s"), Some("v"));
        assert_eq!(str_field(&obj, "n"), None);
        assert_eq!(str_field(&obj, "missing"), None);
        assert!(object_field(&obj, "o").is_some());
        assert!(object_field(&obj, "s").is_none());
    }
}
