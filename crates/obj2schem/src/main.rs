//! Convert an OBJ mesh into a Minecraft `.schematic` file.
//!
//! The pipeline: load the mesh and resolve a color per vertex, voxelize the
//! resulting point cloud into a dense color grid, match each voxel against
//! the block palette, and write the gzipped NBT schematic.

#![warn(clippy::all)]
#![warn(clippy::pedantic)]

use std::fs;
use std::path::PathBuf;

use anyhow::{bail, Context, Result};
use clap::Parser;
use vox_palette::BlockPalette;
use vox_schematic::Schematic;
use vox_voxelize::{voxelize, ScaleBounds};

/// Convert OBJ meshes to Minecraft schematic files.
#[derive(Parser)]
#[command(name = "obj2schem")]
#[command(about = "Convert OBJ meshes to Minecraft schematic files", long_about = None)]
#[command(version)]
struct Cli {
    /// The OBJ file to convert.
    obj_file: PathBuf,

    /// Directory the schematic is written to (created if absent).
    #[arg(long, default_value = "output")]
    output_dir: PathBuf,

    /// Block palette config (JSON array of BLOCK_ID/DATA/COLOR entries).
    #[arg(long, default_value = "config/block_info.json")]
    palette: PathBuf,

    /// Maximum model height, in blocks.
    #[arg(long, default_value_t = 100.0)]
    height_max: f64,

    /// Maximum model width/depth, in blocks.
    #[arg(long, default_value_t = 100.0)]
    width_max: f64,
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .init();

    let cli = Cli::parse();
    run(&cli)
}

fn run(cli: &Cli) -> Result<()> {
    let Some(stem) = cli.obj_file.file_stem() else {
        bail!("cannot derive an output name from {}", cli.obj_file.display());
    };

    let bounds = ScaleBounds::new(cli.height_max, cli.width_max)
        .context("invalid --height-max / --width-max")?;

    let palette = BlockPalette::load(&cli.palette)
        .with_context(|| format!("loading palette {}", cli.palette.display()))?;

    let samples = vox_obj::load_color_samples(&cli.obj_file)
        .with_context(|| format!("loading mesh {}", cli.obj_file.display()))?;

    let grid = voxelize(&samples, bounds).context("voxelizing mesh")?;
    let schematic = Schematic::from_grid(&grid, &palette).context("encoding schematic")?;

    // Serialize before touching the filesystem so a failure never leaves a
    // partial file or an empty directory with nothing in it.
    let bytes = schematic.to_bytes().context("serializing schematic")?;

    fs::create_dir_all(&cli.output_dir)
        .with_context(|| format!("creating {}", cli.output_dir.display()))?;
    let out_path = cli.output_dir.join(stem).with_extension("schematic");
    fs::write(&out_path, &bytes).with_context(|| format!("writing {}", out_path.display()))?;

    tracing::info!(path = %out_path.display(), bytes = bytes.len(), "conversion complete");
    Ok(())
}
