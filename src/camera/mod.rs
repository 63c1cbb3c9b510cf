pub mod camera_controller;
pub mod request_builder;
pub mod stream_options;
