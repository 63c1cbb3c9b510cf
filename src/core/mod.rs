pub mod camera_manager;
pub mod selections;
