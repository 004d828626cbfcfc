//! TOB Wire Format Specification
//!
//! This module documents the TOB (Token-Oriented Binary) wire format as
//! implemented by this library.
//!
//! # Overview
//!
//! TOB is a compact binary token protocol: a value is a flat sequence of
//! tokens, each introduced by a single classifying byte. Small integers fit
//! in one byte, scalars carry little-endian payloads, strings and binary
//! blobs are length-prefixed, and containers are delimited by structural
//! begin/end markers. The format is self-describing: a decoder needs no
//! schema to walk any value.
//!
//! ## Design Philosophy
//!
//! - **One-byte classification**: the leading byte alone determines the
//!   token kind and payload shape, so a decoder dispatches on a 256-entry
//!   catalog with no lookahead
//! - **Compact integers**: values in `-32..=127` encode as a single byte
//! - **Little-endian payloads**: all multi-byte integers, reals, and length
//!   prefixes use little-endian byte order
//! - **Sentinel-delimited structure**: records and maps end at a marker
//!   token rather than carrying an up-front size
//!
//! # Token Catalog
//!
//! ## Small integers
//!
//! | Byte range | Meaning |
//! |------------|---------|
//! | `0x00`–`0x7F` | integer `0..=127`, value carried in the byte itself |
//! | `0xE0`–`0xFF` | integer `-32..=-1`, two's complement in the byte itself |
//!
//! Both ranges classify as the `int8` token code.
//!
//! ## Fixed tokens
//!
//! | Byte | Token |
//! |------|-------|
//! | `0x80` | `false` |
//! | `0x81` | `true` |
//! | `0x82` | `null` |
//!
//! ## Width-tagged scalars
//!
//! | Byte | Token | Payload |
//! |------|-------|---------|
//! | `0xA0` | `int8` | 1 byte, two's complement |
//! | `0xA1` | `int16` | 2 bytes LE |
//! | `0xA2` | `int32` | 4 bytes LE |
//! | `0xA3` | `int64` | 8 bytes LE |
//! | `0xA8` | `float32` | 4 bytes LE IEEE-754 |
//! | `0xA9` | `float64` | 8 bytes LE IEEE-754 |
//!
//! ## Length-prefixed tokens
//!
//! | Byte | Token | Length prefix |
//! |------|-------|---------------|
//! | `0xB0`–`0xB3` | `string8`/`16`/`32`/`64` | 1/2/4/8 bytes LE |
//! | `0xB8`–`0xBB` | `binary8`/`16`/`32`/`64` | 1/2/4/8 bytes LE |
//!
//! The prefix counts payload bytes. String content is UTF-8; binary content
//! is opaque. The 8-byte prefix is signed: a negative value is a
//! `NegativeLength` protocol error.
//!
//! ## Compact arrays
//!
//! | Byte | Token | Element |
//! |------|-------|---------|
//! | `0xC0`–`0xC3` | `array8_int8`/`16`/`32`/`64` | 1/2/4/8-byte integers |
//! | `0xC8` | `array8_float32` | 4-byte reals |
//! | `0xC9` | `array8_float64` | 8-byte reals |
//!
//! A compact array carries a 1-byte *total byte length* (element count
//! times element size, at most 255 bytes) followed by homogeneous
//! little-endian elements. A total length that is not a multiple of the
//! element size is malformed.
//!
//! ## Structural markers
//!
//! | Byte | Token |
//! |------|-------|
//! | `0x90` / `0x91` | `begin_record` / `end_record` |
//! | `0x92` / `0x93` | `begin_array` / `end_array` |
//! | `0x94` / `0x95` | `begin_assoc_array` / `end_assoc_array` |
//! | `0x96` / `0x97` | deprecated `begin_assoc_array` / `end_assoc_array` |
//!
//! An array scope opens with a count-or-null metadata token (the declared
//! element count, or `null` when unknown), then its elements, then the end
//! marker. A declared count that disagrees with the decoded element count
//! is malformed. Record scopes have no count and rely on the end sentinel.
//!
//! An associative array opens with count-or-null metadata followed by
//! alternating key and value tokens. The deprecated framing instead wraps
//! each key/value pair in a `begin_record`/`end_record` scope; both
//! framings decode to identical values.
//!
//! # Status and error codes
//!
//! The `end` code is virtual: it is never present on the wire and is what
//! the reader reports when input is exhausted. A token whose declared
//! payload extends past the end of input also reports `end` (truncated but
//! not fatal); decoding it as part of a tree converts the premature end
//! into an error. Each protocol failure kind has a sentinel error code the
//! reader reports after latching: unknown token, unexpected token, negative
//! length, invalid value, incompatible type, overflow.
//!
//! All other byte values (`0x83`–`0x8F`, `0x98`–`0x9F`, `0xA4`–`0xA7`,
//! `0xAA`–`0xAF`, `0xB4`–`0xB7`, `0xBC`–`0xBF`, `0xC4`–`0xC7`,
//! `0xCA`–`0xDF`) are unassigned; encountering one is an `UnknownToken`
//! protocol error.
//!
//! # Worked example
//!
//! The map `{"alpha": null, "bravo": true}` in classic framing:
//!
//! ```text
//! 94 02                      begin_assoc_array, count 2
//! B0 05 61 6C 70 68 61      string8 "alpha"
//! 82                         null
//! B0 05 62 72 61 76 6F      string8 "bravo"
//! 81                         true
//! 95                         end_assoc_array
//! ```
