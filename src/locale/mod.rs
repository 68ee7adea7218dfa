//! Translation tables loaded from flat files

mod error;
mod loader;
mod table;

pub use error::LocaleError;
pub use loader::{LocaleInfo, load_translations, parse_infos, parse_terms};
pub use table::{FALLBACK_LANGUAGE, INVALID_KEY, LocaleAliases, LocaleTable, render};
