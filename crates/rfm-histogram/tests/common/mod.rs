//! Common test utilities for rfm-histogram tests

use rfm_core::CustomerMetrics;

/// Build a metrics row
pub fn metrics(id: &str, recency: u32, frequency: u32, monetary: f64) -> CustomerMetrics {
    CustomerMetrics {
        customer_id: id.into(),
        recency,
        frequency,
        monetary,
    }
}
