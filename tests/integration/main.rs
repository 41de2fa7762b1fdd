//! Integration tests

mod click_tests;
mod config_tests;
