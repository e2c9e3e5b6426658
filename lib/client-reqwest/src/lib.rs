//! A reqwest based implementation of the io interface
//! of the password reset client.

pub mod client;

#[cfg(test)]
mod tests;
