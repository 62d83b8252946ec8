//! Ports Layer - Hexagonal Architecture Boundaries
//!
//! Traits the use cases depend on. Adapters implement them.
//!
//! Port categories:
//! - `SlotRepository`: typed save/load/exists of one record per type
//! - `ArtifactStorage`: raw artifact text keyed by slot
//! - `RecordCodec`: record <-> text serialization

pub mod artifact_storage;
pub mod codec;
pub mod slot_repository;
