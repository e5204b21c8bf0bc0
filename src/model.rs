// Copyright The Glide Authors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! This module defines the [`Model`][tree::Model] node hierarchy that the
//! layout engine operates on.

mod parse;
mod tree;
mod visibility;

pub use parse::{ParseError, parse_model};
pub use tree::{Model, ModelError, NodeId, NodeKind};
