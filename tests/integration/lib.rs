//! Shared helpers for PassKeep integration tests.
//!
//! Intentionally empty for now; each file under `tests/` is a standalone
//! integration test binary.
