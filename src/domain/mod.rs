mod kind;
mod ledger;
mod money;
mod transaction;

pub use kind::*;
pub use ledger::*;
pub use money::*;
pub use transaction::*;
