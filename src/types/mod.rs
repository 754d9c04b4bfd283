mod errors;
mod kind;
mod step;
#[cfg(test)]
mod tests;

pub use errors::TypeError;
pub use kind::TransactionKind;
pub use step::{FlaggedFraud, Step};

pub type LineNumber = u64;
