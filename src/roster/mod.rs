//! Employee roster management.
//!
//! The roster is a session-scoped, immutably-replaced collection: every
//! add/remove/edit returns a new [`Roster`] so derived results (breakdown,
//! savings, commission) are always recomputed from a stable snapshot. Bulk
//! spreadsheet import is all-or-nothing with row-indexed errors.

mod import;
mod state;

pub use import::{ImportRow, import_rows};
pub use state::{Roster, validate_salary};
