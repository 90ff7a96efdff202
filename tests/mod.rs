//! Test suite for Jazz Chronicle
//!
//! This module organizes all tests

pub mod common;
pub mod property;
