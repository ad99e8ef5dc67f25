//! Windowed front end: winit for the window and pointer events, pixels for
//! the framebuffer.

pub mod pointer;
pub mod run_gui;
