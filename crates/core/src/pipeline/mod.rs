pub mod monitor_frame_use_case;
pub mod session_registry;
