//! In-memory entity fixtures.
//!
//! Fixtures build entity models without touching the database. Use them for unit tests
//! of entity-to-domain conversion and other pure logic.

pub mod mission;
pub mod scenario;
