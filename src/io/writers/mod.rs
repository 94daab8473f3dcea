pub mod html;
pub mod json;
pub mod markdown;
pub mod terminal;

pub use html::HtmlWriter;
pub use json::JsonWriter;
pub use markdown::MarkdownWriter;
pub use terminal::TerminalWriter;
