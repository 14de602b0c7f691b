//! Test modules for freetier-catalog.

mod data_tests;
