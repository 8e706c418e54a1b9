pub mod alert;
pub mod detection;
pub mod pipeline;
pub mod productivity;
pub mod shared;
pub mod tracking;
