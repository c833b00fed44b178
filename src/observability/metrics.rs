//! Metrics collection and exposition.
//!
//! # Metrics
//! - `stock_router_navigations_total` (counter): navigator history changes by route
//! - `stock_router_page_views_total` (counter): rendered pages by route
//! - `stock_router_api_requests_total` (counter): API calls by endpoint, status
//! - `stock_router_page_not_found_total` (counter): page requests with no route
//!
//! # Design Decisions
//! - Recording is a no-op until `init_metrics` installs the exporter
//! - Labels stay low-cardinality: route names, endpoints, status codes

use std::net::SocketAddr;

use metrics_exporter_prometheus::{BuildError, PrometheusBuilder};

/// Install the Prometheus exporter listening on `addr`.
pub fn init_metrics(addr: SocketAddr) -> Result<(), BuildError> {
    PrometheusBuilder::new().with_http_listener(addr).install()?;
    tracing::info!(address = %addr, "Metrics exporter listening");
    Ok(())
}

pub fn record_navigation(route: &str) {
    ::metrics::counter!("stock_router_navigations_total", "route" => route.to_string()).increment(1);
}

pub fn record_page_view(route: &str) {
    ::metrics::counter!("stock_router_page_views_total", "route" => route.to_string()).increment(1);
}

pub fn record_api_request(endpoint: &'static str, status: u16) {
    ::metrics::counter!(
        "stock_router_api_requests_total",
        "endpoint" => endpoint,
        "status" => status.to_string()
    )
    .increment(1);
}

pub fn record_not_found() {
    ::metrics::counter!("stock_router_page_not_found_total").increment(1);
}

#[cfg(test)]
mod tests {
    use std::sync::Mutex;

    use ::metrics::{
        Counter, Gauge, Histogram, Key, KeyName, Metadata, Recorder, SharedString, Unit,
    };

    use super::*;

    #[derive(Default)]
    struct KeyLog {
        names: Mutex<Vec<String>>,
    }

    impl Recorder for KeyLog {
        fn describe_counter(&self, _: KeyName, _: Option<Unit>, _: SharedString) {}
        fn describe_gauge(&self, _: KeyName, _: Option<Unit>, _: SharedString) {}
        fn describe_histogram(&self, _: KeyName, _: Option<Unit>, _: SharedString) {}

        fn register_counter(&self, key: &Key, _: &Metadata<'_>) -> Counter {
            self.names.lock().unwrap().push(key.name().to_string());
            Counter::noop()
        }

        fn register_gauge(&self, _: &Key, _: &Metadata<'_>) -> Gauge {
            Gauge::noop()
        }

        fn register_histogram(&self, _: &Key, _: &Metadata<'_>) -> Histogram {
            Histogram::noop()
        }
    }

    #[test]
    fn test_page_views_use_their_own_counter() {
        let log = KeyLog::default();
        ::metrics::with_local_recorder(&log, || {
            record_page_view("stock");
            record_navigation("stock");
            record_not_found();
        });
        assert_eq!(
            *log.names.lock().unwrap(),
            vec![
                "stock_router_page_views_total",
                "stock_router_navigations_total",
                "stock_router_page_not_found_total",
            ]
        );
    }
}
