//! Tests for the field normalisers

pub mod name_tests;
