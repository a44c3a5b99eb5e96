//! Core domain types
//!
//! This module contains the entities stored by the Bookkeeping service.
//! They are shared between the HTTP client (which decodes them) and
//! front-ends (which display them).

pub mod attachment;
pub mod log;
pub mod user;
