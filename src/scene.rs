// Copyright The Glide Authors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Scene files describe a complete layout problem in RON: a model, the
//! container it is laid out in, and the components bound to its leaves.
//!
//! ```ron
//! (
//!     model: "(ROW (LEAF name=left weight=0.0) (LEAF name=right weight=1.0))",
//!     frame: (size: (width: 400, height: 200)),
//!     components: {
//!         "left": (preferred: (width: 100, height: 50)),
//!         "right": (preferred: (width: 50, height: 50)),
//!     },
//! )
//! ```

use std::fmt::Write;
use std::path::Path;

use rustc_hash::FxHashMap;
use serde::{Deserialize, Serialize};
use tracing::instrument;

use crate::component::{Frame, Panel};
use crate::config::Settings;
use crate::layout::{InvalidLayout, MultiSplitLayout};
use crate::model::{Model, ModelError, ParseError};

#[derive(thiserror::Error, Debug)]
pub enum SceneError {
    #[error("could not read scene")]
    Io(#[from] std::io::Error),
    #[error("invalid scene: {0}")]
    Ron(#[from] ron::error::SpannedError),
    #[error("invalid model: {0}")]
    Parse(#[from] ParseError),
    #[error(transparent)]
    Settings(#[from] ModelError),
    #[error("invalid layout: {0}")]
    Layout(#[from] InvalidLayout),
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(deny_unknown_fields)]
pub struct Scene {
    /// The model in its text form.
    pub model: String,
    pub frame: Frame,
    #[serde(default)]
    pub components: FxHashMap<String, Panel>,
    /// Leaves hidden with `display_node` before the first layout.
    #[serde(default)]
    pub hidden: Vec<String>,
}

impl Scene {
    pub fn from_ron(text: &str) -> Result<Self, SceneError> {
        Ok(ron::de::from_str(text)?)
    }

    pub fn load(path: &Path) -> Result<Self, SceneError> {
        Self::from_ron(&std::fs::read_to_string(path)?)
    }

    /// Builds a layout for the scene without laying it out.
    pub fn build(&self, settings: &Settings) -> Result<MultiSplitLayout<Panel>, SceneError> {
        let model = Model::parse(&self.model)?;
        let mut layout = MultiSplitLayout::with_settings(model, settings)?;
        for (name, panel) in &self.components {
            layout.add_layout_component(name.clone(), panel.clone());
        }
        for name in &self.hidden {
            layout.display_node(name, false);
        }
        Ok(layout)
    }

    #[instrument(skip_all)]
    pub fn run(&self, settings: &Settings) -> Result<MultiSplitLayout<Panel>, SceneError> {
        let mut layout = self.build(settings)?;
        layout.layout_container(&self.frame)?;
        Ok(layout)
    }
}

/// One line per leaf with the bounds of its component, in model order.
pub fn bounds_report(layout: &MultiSplitLayout<Panel>) -> String {
    let model = layout.model();
    let mut out = String::new();
    for leaf in model.leaves() {
        let name = model.name(leaf).unwrap_or_default();
        let state = match layout.component(name) {
            Some(panel) if panel.visible => panel.bounds.to_string(),
            Some(_) => "hidden".to_owned(),
            None => "unbound".to_owned(),
        };
        _ = writeln!(out, "{name}: {state}");
    }
    out
}
