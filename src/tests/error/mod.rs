//! Error module tests.
