//! Integration tests

mod navigation_tests;
mod unread_flow_tests;
