//! # versus-engine
//!
//! The wager settlement engine: the [`WagerBook`] row store, the
//! [`WagerEngine`] lifecycle manager (create / accept / report / appeal),
//! the pure self-report [`resolver`], the admin appeal adjudicator, and
//! the read-only history surface.
//!
//! Transport is external: callers supply an authenticated account id, and
//! the engine re-reads role and blocked status from the ledger inside
//! every state-mutating operation.

pub mod adjudicator;
pub mod book;
pub mod funding;
pub mod history;
pub mod lifecycle;
pub mod resolver;

pub use book::WagerBook;
pub use lifecycle::WagerEngine;
pub use resolver::{Settlement, resolve};
