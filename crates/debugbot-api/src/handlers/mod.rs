mod analyze;
mod debug;
mod health;
mod refactor;
mod structure;

pub use analyze::*;
pub use debug::*;
pub use health::*;
pub use refactor::*;
pub use structure::*;

#[cfg(test)]
pub(crate) mod test_support;
