pub mod extract;
pub mod render;
pub mod validate;
