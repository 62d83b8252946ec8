//! Adapters Layer - Hexagonal Architecture Outer Ring
//!
//! Implements the port traits defined in `crate::ports` with concrete
//! infrastructure: file I/O, AES encryption, JSON encoding.
//!
//! Adapter categories:
//! - `persistence`: encrypted slot files, in-memory storage, JSON codec

pub mod persistence;
