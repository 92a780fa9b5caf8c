pub mod json_path;
pub mod method;
pub mod primitive;
pub mod version;
