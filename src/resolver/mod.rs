mod entity_resolver;
pub mod mention;
mod message_scope;

pub use entity_resolver::EntityResolver;
pub use mention::{MentionKind, normalize};
pub use message_scope::MessageScope;
