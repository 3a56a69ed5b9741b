pub mod dashboard_service;
pub mod metrics;
pub mod revenue;
pub mod scoring;
