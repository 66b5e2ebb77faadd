//! docket-export
//!
//! Receipt preview rendering (HTML, plain text, DOCX) and the thin bridges
//! to the host print facility and the PDF rasterizer.

pub mod docx;
pub mod error;
pub mod layout;
pub mod pdf;
pub mod policy;
pub mod print;
pub mod render;
pub mod styles;
pub mod view;
