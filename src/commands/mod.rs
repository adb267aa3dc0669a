//! Command entry points, invoked once per run from `main`.

mod apply;
mod resolve;

pub use apply::apply;
pub use resolve::resolve;
