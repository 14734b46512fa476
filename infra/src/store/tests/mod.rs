//! Tests for session store implementations

mod memory_store_tests;
