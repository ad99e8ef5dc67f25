pub mod ports;
pub mod render;
pub mod session;
pub mod zoom;
