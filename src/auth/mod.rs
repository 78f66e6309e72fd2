//! Session plumbing only. Sign-in and permission checks happen upstream.
pub mod csrf;
pub mod session;
