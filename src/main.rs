use std::path::PathBuf;

use anyhow::Result;
use board_scene::{
    best_camera_position_with, build_mesh_transforms_with, circuit::load_circuit_json,
    scene_graph::load_scene_graph, FramingConfig, TraversalConfig,
};
use clap::{Parser, Subcommand};
use log::info;

#[derive(Parser, Debug)]
#[command(name = "board-scene", version)]
struct Cli {
    #[command(subcommand)]
    cmd: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Print the default camera framing for a circuit JSON file.
    Camera(CameraArgs),
    /// Print the transform chain of every mesh in a glTF or GLB file.
    Transforms(TransformArgs),
}

#[derive(Parser, Debug)]
struct CameraArgs {
    /// Input circuit JSON.
    #[arg(long = "in")]
    in_path: PathBuf,

    /// Decimal places to round to.
    #[arg(long, default_value_t = 2, conflicts_with = "exact")]
    decimals: u32,

    /// Skip rounding entirely.
    #[arg(long)]
    exact: bool,
}

#[derive(Parser, Debug)]
struct TransformArgs {
    /// Input `.gltf` or `.glb`.
    #[arg(long = "in")]
    in_path: PathBuf,

    /// Fail on node references that do not resolve instead of skipping them.
    #[arg(long)]
    strict: bool,

    /// Deepest node path accepted.
    #[arg(long, default_value_t = TraversalConfig::default().max_depth)]
    max_depth: usize,

    /// Total node visits accepted. Defaults to a multiple of the node count.
    #[arg(long)]
    max_visits: Option<usize>,
}

fn main() -> Result<()> {
    pretty_env_logger::init();

    match Cli::parse().cmd {
        Command::Camera(args) => run_camera(args),
        Command::Transforms(args) => run_transforms(args),
    }
}

fn run_camera(args: CameraArgs) -> Result<()> {
    let elements = load_circuit_json(&args.in_path)?;
    info!("Loaded {} circuit elements", elements.len());

    let config = FramingConfig {
        round_decimals: (!args.exact).then_some(args.decimals),
        ..FramingConfig::default()
    };
    let framing = best_camera_position_with(&elements, &config);

    println!("{}", serde_json::to_string_pretty(&framing)?);
    Ok(())
}

fn run_transforms(args: TransformArgs) -> Result<()> {
    let scene = load_scene_graph(&args.in_path)?;
    info!(
        "Loaded {} nodes, {} root(s)",
        scene.len(),
        scene.root_ids().len()
    );

    let config = TraversalConfig {
        strict: args.strict,
        max_depth: args.max_depth,
        max_visits: args.max_visits,
    };
    let transforms = build_mesh_transforms_with(&scene, &config)?;

    let mut report = serde_json::Map::new();
    for (mesh, chain) in transforms.sorted() {
        report.insert(mesh.0.to_string(), serde_json::to_value(chain)?);
    }

    println!("{}", serde_json::to_string_pretty(&report)?);
    Ok(())
}
