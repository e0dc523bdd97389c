pub mod console_page;

pub use console_page::render_console;
