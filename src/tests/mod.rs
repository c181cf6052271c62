//! Unit tests for splotr modules
//!
//! Tests are organized by module and functionality.
