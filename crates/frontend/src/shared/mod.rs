pub mod api_utils;
pub mod icons;
pub mod json_viewer;
