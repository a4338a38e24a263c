use {crate::relay::ADMIN_REQUESTS_TOTAL, metrics::describe_counter};

pub fn init_httpd_metrics() {
    describe_counter!(
        "http.requests.total",
        "Total HTTP requests by method, path, and status"
    );
    describe_counter!(
        ADMIN_REQUESTS_TOTAL,
        "Admin requests by route and outcome"
    );
}
