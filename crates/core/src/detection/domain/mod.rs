pub mod detection_result;
pub mod frame_decoder;
pub mod region_detector;
