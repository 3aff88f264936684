// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! The query dialect: how raw input is rewritten, and how rewritten input is read.

pub mod normalize;
pub mod parse;

pub use normalize::{
    classify, is_reserved, normalize_query, wildcard_query, QueryShape, REQUIRED_MARKER,
    RESERVED_CHARS, WILDCARD_MARKER,
};
pub use parse::{parse_query, Clause, Field, ParsedQuery, Presence, MAX_EDIT_DISTANCE};
