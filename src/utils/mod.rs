//! Utility functions shared across the application.
//!
//! - [`unit_converters`] - duration and time-of-day conversions
//! - [`parse_sort`] - sort query-parameter parsing
//! - [`object_key`] - media object key generation

pub mod object_key;
pub mod parse_sort;
pub mod unit_converters;
