pub mod display_surface;
