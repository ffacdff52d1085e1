//! Request middleware: authentication extraction and error rendering.

pub mod auth;
pub mod error;
