//! Tests for the token codec
