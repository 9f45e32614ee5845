pub mod types;

pub use types::*;

#[cfg(test)]
mod tests;
