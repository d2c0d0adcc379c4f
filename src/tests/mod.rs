pub mod common;

mod error_surface;
