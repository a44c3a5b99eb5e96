//! Bookkeeping Core
//!
//! Core types for talking to the ALICE Bookkeeping log API.
//!
//! This crate contains:
//! - Domain types: Entities the service returns (Log, Attachment, User)
//! - DTOs: Request payloads and response envelopes exchanged over HTTP

pub mod domain;
pub mod dto;
