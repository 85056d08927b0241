pub mod bitmap;
mod color;
pub mod demo;
mod error;
pub mod format;
pub mod nearest;
pub mod palette;
pub mod template;
pub use color::Color;
pub use error::{Error, FormatError};
pub use format::{colored, colorize};
pub use nearest::{distance, find_nearest};
pub use template::Args;
