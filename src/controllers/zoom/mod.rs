pub mod zoom_controller;
