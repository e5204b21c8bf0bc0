// Copyright The Glide Authors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! A layout manager that arranges named components in nested rows and
//! columns separated by dividers.

pub mod component;
pub mod config;
pub mod geometry;
pub mod layout;
pub mod log;
pub mod model;
pub mod scene;

pub use layout::MultiSplitLayout;
