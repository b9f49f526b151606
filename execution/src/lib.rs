pub mod classifier;
pub mod evaluator;
pub mod ledger;
pub mod session;

#[cfg(any(test, feature = "mocks"))]
pub mod mocks;


pub use evaluator::{evaluate, Evaluation};
pub use ledger::{Ledger, LedgerError};
pub use session::{Session, SessionError, Status};
