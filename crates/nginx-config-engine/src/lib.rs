//! # nginx-config-engine
//!
//! Low-level building blocks for reading nginx-style configuration files.
//!
//! - [`Text`] - a read cursor over an immutable buffer, with byte and line
//!   queries (`char_at`, `line_at`, `rest_of_line_at`, `next_eol_at`, ...)
//!   and forward-moving manipulators (`advance`, `goto_next_eol`).
//! - [`Comment`] - a `#` comment value that renders as `# <text>\n`.
//!
//! Tokenizing and directive parsing are built on top of [`Text`]; this
//! crate stops at the cursor.
//!
//! ## Quick Start
//!
//! ```
//! use nginx_config_engine::{Comment, Text};
//!
//! let mut text = Text::new("# upstream pool\nupstream app {\n");
//!
//! // Skip the comment marker and read the comment body.
//! assert_eq!(text.char(), Ok(b'#'));
//! let comment = Comment::new(text.advance(2).rest_of_line());
//! assert_eq!(comment.to_string(), "# upstream pool\n");
//!
//! // Step over the line break onto the next line.
//! text.goto_next_eol().bump();
//! assert_eq!(text.current_line(), "upstream app {");
//! ```

pub mod comment;
pub mod text;

pub use comment::Comment;
pub use text::{Text, TextError};
