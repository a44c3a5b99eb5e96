//! Data Transfer Objects for the Bookkeeping HTTP API
//!
//! This module contains the request payloads sent to the service and the
//! envelopes its responses are wrapped in. Field names and optionality
//! mirror the API schema one to one.

pub mod error;
pub mod log;
