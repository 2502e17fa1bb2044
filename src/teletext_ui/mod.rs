// src/teletext_ui/mod.rs - Teletext page: header, content rows, pagination and footer

pub mod core;
pub mod footer;
pub mod pagination;
pub mod rows;
pub mod utils;

pub use core::TeletextPage;
pub use rows::TeletextRow;
pub use utils::get_ansi_code;
