/// Environment frames.
///
/// Defines the [`Heap`](environment::Heap) arena that stores every scope and
/// the [`Env`](environment::Env) handles used to address them. Lookups climb
/// the parent chain; bindings are always written to the innermost frame.
pub mod environment;

pub mod core;
