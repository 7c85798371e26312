//! roster
//!
//! Terminal viewer for a member list: fetches records from a JSON endpoint or
//! file, then paginates, searches, selects, bulk deletes and edits them in
//! memory.
//!
//! Follows a Pure Core / Impure Shell split: `state` holds deterministic
//! transitions, `source` and `view` perform the I/O.

pub mod config;
pub mod logging;
pub mod model;
pub mod parser;
pub mod source;
pub mod state;
pub mod view;
