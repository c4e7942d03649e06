use crate::enums::ContentType;
use crate::errors::{RouteError, RouteResult};
use crate::request::Request;
use serde_json::{Map, Value};
use url::form_urlencoded;

/// Decodes the raw request body into the structure handlers see. An empty
/// body decodes to `Null` without any content-type check; a non-empty body
/// must declare a Content-Type containing the expected MIME type, so a
/// missing header counts as a mismatch.
pub(crate) fn decode_body(request: &Request, expected: ContentType) -> RouteResult<Value> {
    if request.body.is_empty() {
        return Ok(Value::Null);
    }

    let declared = request.content_type.as_deref().unwrap_or("");
    if !declared.to_ascii_lowercase().contains(expected.mime()) {
        return Err(RouteError::bad_request(format!(
            "request content-type `{declared}` does not match required type `{}`",
            expected.mime()
        )));
    }

    match expected {
        ContentType::Json => serde_json::from_slice(&request.body).map_err(|error| {
            RouteError::bad_request(format!("request body is not valid JSON: {error}"))
        }),
        ContentType::Form => {
            let mut fields = Map::new();
            for (name, value) in form_urlencoded::parse(&request.body) {
                fields.insert(name.into_owned(), Value::String(value.into_owned()));
            }
            Ok(Value::Object(fields))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::enums::HttpMethod;
    use serde_json::json;

    #[test]
    fn empty_body_decodes_to_null() {
        let request = Request::new(HttpMethod::Get, "users");
        assert_eq!(decode_body(&request, ContentType::Json).unwrap(), Value::Null);
    }

    #[test]
    fn json_body_decodes_to_value() {
        let request = Request::new(HttpMethod::Post, "users")
            .with_body("application/json", r#"{"name":"bob"}"#);
        assert_eq!(
            decode_body(&request, ContentType::Json).unwrap(),
            json!({"name": "bob"})
        );
    }

    #[test]
    fn form_body_decodes_to_string_fields() {
        let request = Request::new(HttpMethod::Post, "users")
            .with_body("application/x-www-form-urlencoded", "a=1&b=two");
        assert_eq!(
            decode_body(&request, ContentType::Form).unwrap(),
            json!({"a": "1", "b": "two"})
        );
    }

    #[test]
    fn mismatched_content_type_is_a_bad_request() {
        let request =
            Request::new(HttpMethod::Post, "users").with_body("text/plain", "hello");
        let error = decode_body(&request, ContentType::Json).unwrap_err();
        assert!(matches!(error, RouteError::BadRequest { .. }));
    }

    #[test]
    fn missing_content_type_with_body_is_a_bad_request() {
        let mut request = Request::new(HttpMethod::Post, "users");
        request.body = b"{}".to_vec();
        let error = decode_body(&request, ContentType::Json).unwrap_err();
        assert!(matches!(error, RouteError::BadRequest { .. }));
    }

    #[test]
    fn malformed_json_is_a_bad_request() {
        let request =
            Request::new(HttpMethod::Post, "users").with_body("application/json", "{not json");
        let error = decode_body(&request, ContentType::Json).unwrap_err();
        assert!(matches!(error, RouteError::BadRequest { .. }));
    }
}
