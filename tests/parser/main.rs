//! Integration tests for the phrase-description format
//!
//! Round-trip fidelity between the parser and the serializer, and parse
//! error reporting.

mod round_trip;
