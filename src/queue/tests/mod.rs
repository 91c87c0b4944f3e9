//! Test modules for the priority queue
//!
//! This module organizes all the test suites for the ordered-array queue.
//! Tests are organized by functional area for better maintainability.

mod support;
