pub mod algorithm;
pub mod colour_maps;
pub mod errors;
pub mod escape_time;
pub mod mandelbrot_config;
