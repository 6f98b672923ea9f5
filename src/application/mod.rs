// Application layer - the single screen's use cases.
// Front ends hold one LedgerService and render what it returns.

pub mod error;
pub mod notice;
pub mod service;
pub mod settings;

pub use error::*;
pub use notice::*;
pub use service::*;
pub use settings::*;
