//! This crate contains the data types shared by everything
//! that takes part in a password reset submission:
//! the form payload as it goes over the wire, the opaque
//! reset token the hosting page hands out, the response of
//! the reset endpoint and the fixed values of the page
//! contract. No networking or page logic lives here.

#![deny(missing_docs)]
#![deny(warnings)]
#![deny(clippy::nursery)]
#![deny(clippy::all)]

/// The form payload of one submission attempt and
/// its URL encoding.
pub mod form;
/// Fixed values of the contract between the hosting
/// page and the submit handler.
pub mod page;
/// The response of the reset endpoint.
pub mod response;
/// The opaque reset token taken from the hosting page.
pub mod token;
