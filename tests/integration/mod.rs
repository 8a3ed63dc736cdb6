//! Integration tests through the HTTP router

pub mod api;
