pub mod log_alert_sink;
pub mod writer_alert_sink;
