use prometheus_client::metrics::{counter::Counter, family::Family, histogram::Histogram};
use prometheus_client::registry::Registry;
use prometheus_client_derive_encode::{EncodeLabelSet, EncodeLabelValue};

#[derive(Clone, Debug, Hash, PartialEq, Eq, EncodeLabelValue)]
pub enum Method {
    Get,
    Post,
    Put,
}

#[derive(Clone, Debug, Hash, PartialEq, Eq, EncodeLabelValue)]
pub enum Status {
    Success,
    Error,
}

#[derive(Clone, Debug, Hash, PartialEq, Eq, EncodeLabelSet)]
pub struct Labels {
    pub method: Method,
    pub status: Status,
}

/// Request counter and latency histogram for one service.
#[derive(Clone, Debug)]
pub struct Metrics {
    pub request_counter: Family<Labels, Counter>,
    pub request_duration: Family<Labels, Histogram>,
}

impl Default for Metrics {
    fn default() -> Self {
        Self::new()
    }
}

impl Metrics {
    pub fn new() -> Self {
        Self {
            request_counter: Family::default(),
            request_duration: Family::new_with_constructor(|| {
                Histogram::new([
                    0.005, 0.01, 0.025, 0.05, 0.1, 0.25, 0.5, 1.0, 2.5, 5.0, 10.0,
                ])
            }),
        }
    }

    /// Registers both series as `<service>_request_counter` and `<service>_request_duration`.
    pub fn register(&self, service: &str, registry: &mut Registry) {
        registry.register(
            format!("{service}_request_counter"),
            format!("Total number of requests to the {service}"),
            self.request_counter.clone(),
        );
        registry.register(
            format!("{service}_request_duration"),
            format!("Histogram of request durations for the {service}"),
            self.request_duration.clone(),
        );
    }

    pub fn record(&self, method: Method, status: Status, duration_secs: f64) {
        let labels = Labels { method, status };
        self.request_counter.get_or_create(&labels).inc();
        self.request_duration
            .get_or_create(&labels)
            .observe(duration_secs);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use prometheus_client::encoding::text::encode;

    #[test]
    fn recorded_requests_show_up_in_the_registry() {
        let mut registry = Registry::default();
        let metrics = Metrics::new();
        metrics.register("product_query_service", &mut registry);

        metrics.record(Method::Get, Status::Success, 0.02);
        metrics.record(Method::Get, Status::Error, 0.01);

        let mut buffer = String::new();
        encode(&mut buffer, &registry).unwrap();

        assert!(buffer.contains("product_query_service_request_counter_total"));
        assert!(buffer.contains("status=\"Success\""));
        assert!(buffer.contains("status=\"Error\""));
    }
}
