//! Property-based tests for the epsilon predicates.
