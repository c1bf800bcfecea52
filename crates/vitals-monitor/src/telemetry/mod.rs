//! Telemetry for the Vitals Monitor
//!
//! Structured logging goes through `tracing` everywhere in the crate; this
//! module adds Prometheus counters for evaluation outcomes.

pub mod metrics;

pub use metrics::VitalsMetrics;
