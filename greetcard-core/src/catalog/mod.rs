/// Immutable built-in template registry.
pub mod registry;
/// Template descriptor types.
pub mod template;
