pub mod application;
pub mod cli;
pub mod domain;
pub mod format;
pub mod io;

pub use application::LedgerService;
pub use domain::*;
