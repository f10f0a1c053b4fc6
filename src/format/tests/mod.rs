//! Tests for the annotation document format.
//!
//! - `decode_tests`: parsing of hand-written documents, including malformed ones
//! - `roundtrip_tests`: encode/decode properties
