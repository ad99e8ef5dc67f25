pub mod memory_surface;
