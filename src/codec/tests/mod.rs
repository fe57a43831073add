//! Unit tests for the point codecs

mod integer_tests;
