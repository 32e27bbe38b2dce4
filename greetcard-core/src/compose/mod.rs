/// AI composite renderer.
pub mod ai;
/// Shared circular photo layer.
pub mod photo;
/// Backend-agnostic paint plans.
pub mod plan;
/// Validated request inputs.
pub mod request;
/// Template renderer.
pub mod template;
