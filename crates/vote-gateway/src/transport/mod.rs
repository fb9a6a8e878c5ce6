//! HTTP transport for the ballot: identity cookie, page rendering, the vote
//! handler, and the error boundary.

pub mod error;
pub mod identity;
pub mod page;
pub mod vote;
