//! Integration tests

mod strategy_tests;
