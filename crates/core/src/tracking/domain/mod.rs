pub mod attention_tracker;
pub mod thresholds;
