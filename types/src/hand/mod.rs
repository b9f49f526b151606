mod constants;
mod outcome;
mod record;
mod snapshot;

pub use constants::*;
pub use outcome::*;
pub use record::*;
pub use snapshot::*;

#[cfg(test)]
mod tests;
