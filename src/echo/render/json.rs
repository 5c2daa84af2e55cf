//! JSON representation

use crate::echo::error::RenderError;
use crate::echo::model::CanonicalRequest;

/// Compact JSON using the model's field names
pub fn render(request: &CanonicalRequest) -> Result<Vec<u8>, RenderError> {
    Ok(serde_json::to_vec(request)?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::echo::model::{Header, Params};

    #[test]
    fn test_field_layout() {
        let mut params = Params::new();
        params.insert("color".to_string(), vec!["red".to_string(), "blue".to_string()]);
        let request = CanonicalRequest::new(
            "POST",
            "localhost:3000",
            "/widgets",
            "HTTP/1.1",
            vec![Header::new("accept", vec!["application/json".to_string()])],
            params,
            "hello",
        );

        let out = String::from_utf8(render(&request).unwrap()).unwrap();
        assert_eq!(
            out,
            r#"{"Path":"/widgets","Headers":[{"Key":"accept","Value":["application/json"]}],"Body":"hello","Method":"POST","Host":"localhost:3000","Params":{"color":["red","blue"]},"Proto":"HTTP/1.1"}"#
        );
    }

    #[test]
    fn test_empty_collections() {
        let request =
            CanonicalRequest::new("GET", "", "/", "HTTP/1.0", Vec::new(), Params::new(), "");
        let value: serde_json::Value = serde_json::from_slice(&render(&request).unwrap()).unwrap();
        assert_eq!(value["Headers"], serde_json::json!([]));
        assert_eq!(value["Params"], serde_json::json!({}));
        assert_eq!(value["Body"], "");
    }

    #[test]
    fn test_params_keys_sorted() {
        let mut params = Params::new();
        params.insert("zeta".to_string(), vec!["1".to_string()]);
        params.insert("alpha".to_string(), vec!["2".to_string()]);
        let request = CanonicalRequest::new("GET", "h", "/", "HTTP/1.1", Vec::new(), params, "");
        let out = String::from_utf8(render(&request).unwrap()).unwrap();
        assert!(out.contains(r#""Params":{"alpha":["2"],"zeta":["1"]}"#));
    }
}
