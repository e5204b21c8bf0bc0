// Copyright The Glide Authors
// SPDX-License-Identifier: MIT OR Apache-2.0

use std::path::PathBuf;

use anyhow::{Context, bail};
use clap::{Parser, Subcommand};
use itertools::Itertools;
use multisplit::config::{self, Config};
use multisplit::geometry::Dimension;
use multisplit::model::Model;
use multisplit::scene::{self, Scene, SceneError};

/// Lays out named components in nested rows and columns.
#[derive(Parser)]
#[command(version, name = "multisplit")]
struct Opt {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Clone)]
enum Command {
    #[command()]
    Parse(CmdParse),
    #[command()]
    Layout(CmdLayout),
    #[command(subcommand)]
    Config(CmdConfig),
}

/// Parses a model and prints its tree.
#[derive(Parser, Clone)]
struct CmdParse {
    /// The model, e.g. "(ROW left (COLUMN top bottom))".
    model: String,
}

/// Lays out a scene file and prints where each component ends up.
#[derive(Parser, Clone)]
struct CmdLayout {
    /// A RON scene file.
    scene: PathBuf,
    /// Settings file to use instead of ~/.multisplit.toml.
    #[arg(long)]
    config: Option<PathBuf>,
    /// Overrides the container width in the scene.
    #[arg(long, requires = "height")]
    width: Option<i32>,
    /// Overrides the container height in the scene.
    #[arg(long, requires = "width")]
    height: Option<i32>,
    /// Print the whole node tree instead of component bounds.
    #[arg(long)]
    tree: bool,
}

/// Commands to manage the settings file.
#[derive(Subcommand, Clone)]
enum CmdConfig {
    /// Checks that the settings file parses.
    ///
    /// The settings file lives at ~/.multisplit.toml.
    Verify {
        #[arg(long)]
        path: Option<PathBuf>,
    },
}

fn main() -> Result<(), anyhow::Error> {
    let opt: Opt = Parser::parse();
    multisplit::log::init_logging();

    match opt.command {
        Command::Parse(CmdParse { model }) => match Model::parse(&model) {
            Ok(parsed) => print!("{}", parsed.draw_tree()),
            Err(e) => {
                eprintln!("{}", e.render(&model));
                std::process::exit(1);
            }
        },
        Command::Layout(cmd) => {
            let config = Config::load(cmd.config.as_deref())?;
            let mut scene = Scene::load(&cmd.scene)
                .with_context(|| format!("Could not load scene {}", cmd.scene.display()))?;
            if let (Some(width), Some(height)) = (cmd.width, cmd.height) {
                scene.frame.size = Dimension::new(width, height);
            }
            let layout = match scene.run(&config.settings) {
                Err(SceneError::Parse(e)) => {
                    eprintln!("{}", e.render(&scene.model));
                    std::process::exit(1);
                }
                result => result?,
            };
            for name in layout.unbound_leaves() {
                eprintln!("Warning: no component for leaf {name}");
            }
            for (name, _) in layout.components().sorted_by_key(|(name, _)| *name) {
                if layout.node_for_name(name).is_none() {
                    eprintln!("Warning: no leaf for component {name}");
                }
            }
            println!(
                "preferred {}, minimum {}",
                layout.preferred_layout_size(&scene.frame),
                layout.minimum_layout_size(&scene.frame),
            );
            if cmd.tree {
                print!("{}", layout.model().draw_tree());
            } else {
                print!("{}", scene::bounds_report(&layout));
            }
        }
        Command::Config(CmdConfig::Verify { path }) => {
            let Some(path) = path.or_else(config::config_path_default) else {
                bail!("Could not determine the home directory");
            };
            if !path.exists() {
                bail!("Config file missing");
            }
            if let Err(e) = Config::load(Some(&path)) {
                eprintln!("{e}");
                std::process::exit(1);
            }
            eprintln!("config ok");
        }
    }

    Ok(())
}
