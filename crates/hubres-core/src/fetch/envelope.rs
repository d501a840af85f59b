//! Catalog response envelope: `{"data": {"yaml": "<manifest>"}}`.

use serde::Deserialize;

#[derive(Debug, Deserialize)]
struct HubResponse {
    data: DataResponse,
}

#[derive(Debug, Deserialize)]
struct DataResponse {
    yaml: String,
}

/// Extracts `data.yaml`. Other fields are ignored.
pub(crate) fn extract_yaml(body: &[u8]) -> Result<String, serde_json::Error> {
    let resp: HubResponse = serde_json::from_slice(body)?;
    Ok(resp.data.yaml)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn extract_yaml_ok() {
        let y = extract_yaml(br#"{"data":{"yaml":"foo: bar"}}"#).unwrap();
        assert_eq!(y, "foo: bar");
    }

    #[test]
    fn extract_yaml_ignores_extra_fields() {
        let body = br##"{
            "data": {
                "yaml": "apiVersion: tekton.dev/v1beta1\nkind: Task\n",
                "readme": "# git-clone",
                "version": "0.9"
            },
            "meta": {"page": 1}
        }"##;
        let y = extract_yaml(body).unwrap();
        assert!(y.starts_with("apiVersion: tekton.dev/v1beta1"));
        assert!(y.ends_with("kind: Task\n"));
    }

    #[test]
    fn extract_yaml_empty_string() {
        assert_eq!(extract_yaml(br#"{"data":{"yaml":""}}"#).unwrap(), "");
    }

    #[test]
    fn extract_yaml_shape_mismatch() {
        assert!(extract_yaml(b"not json").is_err());
        assert!(extract_yaml(b"").is_err());
        assert!(extract_yaml(br#"{"yaml":"x"}"#).is_err());
        assert!(extract_yaml(br#"{"data":{}}"#).is_err());
        assert!(extract_yaml(br#"{"data":{"yaml":42}}"#).is_err());
        assert!(extract_yaml(br#"{"data":null}"#).is_err());
    }

    #[test]
    fn extract_yaml_error_body_from_hub() {
        let body = br#"{"name":"not-found","id":"x","message":"resource not found","temporary":false}"#;
        assert!(extract_yaml(body).is_err());
    }
}
