//! Command surface for the trust evaluator and the protection controller.
//!
//! [`Dispatcher::dispatch`] is a total mapping from a fixed command set
//! to the two components; unknown names come back as a distinct
//! `NotImplemented` outcome so the host can tell "feature absent" from
//! "feature failed".

mod context;
mod dispatcher;
mod error;

pub use context::AppContext;
pub use dispatcher::Dispatcher;
pub use error::{DispatchError, DispatchResult};
