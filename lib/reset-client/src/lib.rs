//! This crate contains the submit handler of a
//! password-reset page. It turns one submitted form into one
//! request to the reset endpoint and feeds the outcome back
//! into the page. It is not intended for rendering any UI
//! nor knowing about the communication details (be it HTTP
//! or other stuff). It uses interfaces to abstract such
//! concepts away.

#![deny(missing_docs)]
#![deny(warnings)]
#![deny(clippy::nursery)]
#![deny(clippy::all)]

pub(crate) mod safe_interface;

/// Types related to errors during client operations.
pub mod errors;
/// Communication interface for the submit handler to
/// do requests to the reset endpoint.
pub mod interface;
/// The hosting page, as far as the submit handler
/// needs to know it.
pub mod page;
/// Data types and operations required to reset a
/// password on the backend.
pub mod password_reset;
/// The submit handler bound to a page.
pub mod submitter;
