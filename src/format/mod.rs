mod duration;
mod numbers;
pub mod text;

pub use duration::format_duration;
pub use numbers::{gcd, make_number_readable};
pub use text::{clean_html, escape_string, extension, is_image, to_word_case, truncate};
