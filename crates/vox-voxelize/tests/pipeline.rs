//! End-to-end scenarios: colored point cloud in, matched byte arrays out.

#![allow(clippy::unwrap_used)]

use approx::assert_relative_eq;
use vox_palette::{BlockPalette, PaletteEntry};
use vox_types::{ColorSample, Rgb, VoxelCoord};
use vox_voxelize::{voxelize, ScaleBounds};

fn wool_palette() -> BlockPalette {
    BlockPalette::from_entries(vec![
        PaletteEntry::new(35, 0, [255, 255, 255]),
        PaletteEntry::new(35, 14, [200, 30, 30]),
        PaletteEntry::new(35, 11, [40, 60, 170]),
        PaletteEntry::new(5, 2, [128, 128, 0]),
    ])
    .unwrap()
}

#[test]
fn white_triangle_becomes_white_wool() {
    let white = Rgb::new(1.0, 1.0, 1.0);
    let samples = vec![
        ColorSample::from_coords(0.0, 0.0, 0.0, white),
        ColorSample::from_coords(4.0, 0.0, 0.0, white),
        ColorSample::from_coords(0.0, 4.0, 0.0, white),
    ];

    let grid = voxelize(&samples, ScaleBounds::new(10.0, 10.0).unwrap()).unwrap();
    assert_eq!(grid.dimensions(), (11, 11, 1));

    let (ids, data) = wool_palette().match_grid(&grid);
    assert_eq!(ids.len(), 11 * 11);
    assert_eq!(data.len(), ids.len());

    // Every occupied voxel matched white wool, everything else is air.
    let wool = ids.iter().filter(|&&id| id == 35).count();
    assert_eq!(wool, 3);
    assert_eq!(ids.iter().filter(|&&id| id == 0).count(), ids.len() - 3);
    assert!(data.iter().all(|&d| d == 0));
}

#[test]
fn colliding_vertices_average_then_match() {
    // Two vertices land in the same voxel after flooring: red (255, 0, 0)
    // and green (0, 255, 0) average to (127.5, 127.5, 0), whose nearest
    // palette color is the (128, 128, 0) plank entry.
    let samples = vec![
        ColorSample::from_coords(0.0, 0.0, 0.0, Rgb::new(1.0, 0.0, 0.0)),
        ColorSample::from_coords(0.02, 0.0, 0.0, Rgb::new(0.0, 1.0, 0.0)),
        ColorSample::from_coords(1.0, 0.0, 0.0, Rgb::new(1.0, 1.0, 1.0)),
    ];

    let grid = voxelize(&samples, ScaleBounds::new(10.0, 10.0).unwrap()).unwrap();
    let mixed = grid.get(VoxelCoord::origin()).unwrap();
    assert_relative_eq!(mixed.r, 127.5);
    assert_relative_eq!(mixed.g, 127.5);
    assert_relative_eq!(mixed.b, 0.0);

    let palette = wool_palette();
    assert_eq!(palette.nearest(mixed), vox_palette::Block::new(5, 2));
}

#[test]
fn flat_wall_scales_by_height_bound() {
    // Extent is (0, 8, 2): y attains the maximum, so the height bound
    // governs even though it is the larger of the two.
    let blue = Rgb::new(0.0, 0.0, 1.0);
    let samples = vec![
        ColorSample::from_coords(5.0, 0.0, 0.0, blue),
        ColorSample::from_coords(5.0, 8.0, 0.0, blue),
        ColorSample::from_coords(5.0, 0.0, 2.0, blue),
    ];

    let grid = voxelize(&samples, ScaleBounds::new(20.0, 4.0).unwrap()).unwrap();
    // Scale is 20 / 8 = 2.5: x collapses to 0, y tops out at 20, z at 5.
    assert_eq!(grid.dimensions(), (1, 21, 6));
    assert!(grid.get(VoxelCoord::new(0, 20, 0)).is_some());
    assert!(grid.get(VoxelCoord::new(0, 0, 5)).is_some());
}

#[test]
fn byte_arrays_cover_the_whole_volume() {
    let samples = vec![
        ColorSample::from_coords(0.0, 0.0, 0.0, Rgb::new(0.8, 0.1, 0.1)),
        ColorSample::from_coords(3.0, 2.0, 1.0, Rgb::new(0.2, 0.2, 0.7)),
    ];

    let grid = voxelize(&samples, ScaleBounds::new(6.0, 6.0).unwrap()).unwrap();
    let (width, height, length) = grid.dimensions();
    let (ids, data) = wool_palette().match_grid(&grid);

    let volume = (width as usize) * (height as usize) * (length as usize);
    assert_eq!(ids.len(), volume);
    assert_eq!(data.len(), volume);
}
