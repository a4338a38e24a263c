#[cfg(feature = "metrics")]
use metrics::counter;
use {
    actix_web::{
        HttpResponse,
        http::{
            StatusCode,
            header::{CacheControl, CacheDirective},
        },
    },
    tokenchain_client::UpstreamReply,
    tokenchain_types::{ErrorBody, ErrorCode},
};

/// Counter of admin requests by route and outcome.
pub const ADMIN_REQUESTS_TOTAL: &str = "http.admin.requests.total";

/// Answer a request that failed local validation. Nothing was sent upstream.
pub fn reject(route: &'static str, code: ErrorCode) -> HttpResponse {
    tracing::debug!(route, error = %code, "Rejected admin request");

    #[cfg(feature = "metrics")]
    counter!(ADMIN_REQUESTS_TOTAL, "route" => route, "outcome" => "rejected").increment(1);

    json_response(StatusCode::BAD_REQUEST, &ErrorBody::new(code))
}

/// Mirror upstream's answer: same status, same JSON body, or an
/// `invalid_upstream_json` body when upstream didn't send JSON.
pub fn relay(
    route: &'static str,
    reply: Result<UpstreamReply, tokenchain_client::Error>,
) -> HttpResponse {
    let reply = match reply {
        Ok(reply) => reply,
        Err(err) => {
            tracing::warn!(route, %err, "Upstream unreachable");

            #[cfg(feature = "metrics")]
            counter!(ADMIN_REQUESTS_TOTAL, "route" => route, "outcome" => "unreachable")
                .increment(1);

            return json_response(
                StatusCode::BAD_GATEWAY,
                &ErrorBody::new(ErrorCode::UpstreamUnreachable),
            );
        },
    };

    #[cfg(feature = "metrics")]
    counter!(
        ADMIN_REQUESTS_TOTAL,
        "route" => route,
        "outcome" => "forwarded",
        "status" => reply.status.to_string()
    )
    .increment(1);

    // reqwest only yields valid status codes.
    let status = StatusCode::from_u16(reply.status).unwrap_or(StatusCode::BAD_GATEWAY);

    json_response(status, &reply.json_body())
}

fn json_response<T>(status: StatusCode, body: &T) -> HttpResponse
where
    T: serde::Serialize,
{
    HttpResponse::build(status)
        .insert_header(CacheControl(vec![CacheDirective::NoStore]))
        .json(body)
}

#[cfg(test)]
mod tests {
    use {super::*, actix_web::body::to_bytes, tokenchain_types::json};

    async fn body_json(resp: HttpResponse) -> serde_json::Value {
        let bytes = to_bytes(resp.into_body()).await.unwrap();
        serde_json::from_slice(&bytes).unwrap()
    }

    #[actix_web::test]
    async fn relay_mirrors_upstream_status() {
        let reply = UpstreamReply::new(409, r#"{"ok":false,"error":"already_exists"}"#);
        let resp = relay("merchant-routing", Ok(reply));

        assert_eq!(resp.status(), StatusCode::CONFLICT);
        assert_eq!(
            body_json(resp).await,
            json!({ "ok": false, "error": "already_exists" })
        );
    }

    #[actix_web::test]
    async fn unreachable_upstream_is_bad_gateway() {
        let err = tokenchain_client::Error::NotOk { path: "/v1/admin" };
        let resp = relay("merchant-allocation", Err(err));

        assert_eq!(resp.status(), StatusCode::BAD_GATEWAY);
        assert_eq!(
            body_json(resp).await,
            json!({ "ok": false, "error": "upstream_unreachable" })
        );
    }

    #[cfg(feature = "metrics")]
    #[test]
    fn outcomes_are_counted() {
        use metrics_exporter_prometheus::PrometheusBuilder;

        let recorder = PrometheusBuilder::new().build_recorder();
        let handle = recorder.handle();

        metrics::with_local_recorder(&recorder, || {
            reject("merchant-routing", ErrorCode::DenomRequired);
            reject("merchant-routing", ErrorCode::InvalidBps);
            relay("merchant-routing", Ok(UpstreamReply::new(200, "{}")));
            relay(
                "daily-allocation-run",
                Err(tokenchain_client::Error::NotOk { path: "/v1/admin" }),
            );
        });

        let rendered = handle.render();
        let line = |outcome: &str| {
            rendered
                .lines()
                .find(|line| {
                    line.starts_with("http_admin_requests_total")
                        && line.contains(&format!("outcome=\"{outcome}\""))
                })
                .map(ToString::to_string)
        };

        let rejected = line("rejected").unwrap();
        assert!(rejected.contains("route=\"merchant-routing\""));
        assert!(rejected.ends_with(" 2"));

        let forwarded = line("forwarded").unwrap();
        assert!(forwarded.contains("status=\"200\""));
        assert!(forwarded.ends_with(" 1"));

        let unreachable = line("unreachable").unwrap();
        assert!(unreachable.contains("route=\"daily-allocation-run\""));
    }
}
