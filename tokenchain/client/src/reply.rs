use tokenchain_types::{ErrorBody, Json};

/// What upstream answered to an admin write: the status code and the raw
/// body, untouched.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UpstreamReply {
    pub status: u16,
    pub body: String,
}

impl UpstreamReply {
    pub fn new<T>(status: u16, body: T) -> Self
    where
        T: Into<String>,
    {
        Self {
            status,
            body: body.into(),
        }
    }

    /// The body as JSON. A body that doesn't parse is replaced with an
    /// `invalid_upstream_json` error that carries the original text.
    pub fn json_body(&self) -> Json {
        serde_json::from_str(&self.body).unwrap_or_else(|_| {
            serde_json::to_value(ErrorBody::invalid_upstream_json(self.body.as_str()))
                .unwrap_or(Json::Null)
        })
    }
}

#[cfg(test)]
mod tests {
    use {super::*, tokenchain_types::json};

    #[test]
    fn json_body_passes_valid_json_through() {
        let reply = UpstreamReply::new(409, r#"{"ok":false,"error":"already_exists"}"#);
        assert_eq!(
            reply.json_body(),
            json!({ "ok": false, "error": "already_exists" })
        );
    }

    #[test]
    fn json_body_wraps_invalid_json() {
        let reply = UpstreamReply::new(502, "Bad Gateway");
        assert_eq!(
            reply.json_body(),
            json!({ "ok": false, "error": "invalid_upstream_json", "raw": "Bad Gateway" })
        );
    }

    #[test]
    fn empty_body_is_invalid_json() {
        let reply = UpstreamReply::new(204, "");
        assert_eq!(
            reply.json_body(),
            json!({ "ok": false, "error": "invalid_upstream_json", "raw": "" })
        );
    }
}
