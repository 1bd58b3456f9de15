//! Authentication module
//!
//! Every request carries the instance API key. A client may additionally
//! carry one token: a session token for the authenticated user context
//! (sent as a bearer token) or a contact token for the public context
//! (sent under its own header).

mod authenticator;

pub use authenticator::Authenticator;

#[cfg(test)]
mod tests;
