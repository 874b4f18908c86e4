//! Shared fixtures and mocks.
