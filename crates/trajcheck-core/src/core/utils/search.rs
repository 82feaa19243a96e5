use crate::core::models::cell::PeriodicBox;
use itertools::Itertools;
use nalgebra::Point3;

/// Half shell of neighboring grid cells. Together with the in-cell sweep this
/// visits every cell pair exactly once.
const HALF_SHELL: [[isize; 3]; 13] = [
    [1, 0, 0],
    [-1, 1, 0],
    [0, 1, 0],
    [1, 1, 0],
    [-1, -1, 1],
    [0, -1, 1],
    [1, -1, 1],
    [-1, 0, 1],
    [0, 0, 1],
    [1, 0, 1],
    [-1, 1, 1],
    [0, 1, 1],
    [1, 1, 1],
];

/// Finds all pairs of positions within `cutoff` of each other under the
/// minimum-image convention.
///
/// Positions are binned into a grid of cells in fractional space, each cell
/// at least `cutoff` wide along every axis, so only neighboring cells need to
/// be swept. Cost is close to linear for sparse systems; when the cell is too
/// small to hold a 3×3×3 grid the search degrades to an all-pairs sweep.
///
/// # Arguments
///
/// * `positions` - The points to search; indices into this slice identify the
///   results.
/// * `cell` - The periodic cell distances are measured under.
/// * `cutoff` - Inclusive distance cap; pairs exactly at the cutoff qualify.
///
/// # Return
///
/// `(i, j, distance)` triples with `i < j`, each unordered pair reported at
/// most once. Self-pairs are never reported. The sequence order is the
/// search's deterministic discovery order (a cell-by-cell sweep, or ascending
/// `(i, j)` on the all-pairs path), not a sort by distance or index.
pub fn capped_pairs(
    positions: &[Point3<f64>],
    cell: &PeriodicBox,
    cutoff: f64,
) -> Vec<(usize, usize, f64)> {
    if positions.len() < 2 || !(cutoff > 0.0) {
        return Vec::new();
    }

    // More cells than atoms buys nothing; capping the grid keeps memory
    // proportional to the input for sparse systems in large boxes.
    let per_axis_cap = ((positions.len() as f64).cbrt().ceil() as usize).max(3);
    let widths = cell.perpendicular_widths();
    let dims = widths.map(|w| ((w / cutoff).floor() as usize).min(per_axis_cap));
    if dims.iter().any(|&d| d < 3) {
        return all_pairs(positions, cell, cutoff);
    }
    grid_pairs(positions, cell, cutoff, dims)
}

fn all_pairs(
    positions: &[Point3<f64>],
    cell: &PeriodicBox,
    cutoff: f64,
) -> Vec<(usize, usize, f64)> {
    (0..positions.len())
        .tuple_combinations()
        .filter_map(|(i, j)| {
            let distance = cell.distance(&positions[i], &positions[j]);
            (distance <= cutoff).then_some((i, j, distance))
        })
        .collect()
}

fn grid_pairs(
    positions: &[Point3<f64>],
    cell: &PeriodicBox,
    cutoff: f64,
    dims: [usize; 3],
) -> Vec<(usize, usize, f64)> {
    let [nx, ny, nz] = dims;
    let flat = |ix: usize, iy: usize, iz: usize| ix + nx * (iy + ny * iz);

    let mut cells: Vec<Vec<usize>> = vec![Vec::new(); nx * ny * nz];
    for (index, position) in positions.iter().enumerate() {
        let f = cell.wrapped_fractional(position);
        let ix = ((f.x * nx as f64) as usize).min(nx - 1);
        let iy = ((f.y * ny as f64) as usize).min(ny - 1);
        let iz = ((f.z * nz as f64) as usize).min(nz - 1);
        cells[flat(ix, iy, iz)].push(index);
    }

    let mut pairs = Vec::new();
    let consider = |i: usize, j: usize, out: &mut Vec<(usize, usize, f64)>| {
        let distance = cell.distance(&positions[i], &positions[j]);
        if distance <= cutoff {
            out.push((i.min(j), i.max(j), distance));
        }
    };

    for iz in 0..nz {
        for iy in 0..ny {
            for ix in 0..nx {
                let home = &cells[flat(ix, iy, iz)];

                for (slot, &i) in home.iter().enumerate() {
                    for &j in &home[slot + 1..] {
                        consider(i, j, &mut pairs);
                    }
                }

                for [dx, dy, dz] in HALF_SHELL {
                    let jx = (ix as isize + dx).rem_euclid(nx as isize) as usize;
                    let jy = (iy as isize + dy).rem_euclid(ny as isize) as usize;
                    let jz = (iz as isize + dz).rem_euclid(nz as isize) as usize;
                    let other = &cells[flat(jx, jy, jz)];
                    for &i in home {
                        for &j in other {
                            consider(i, j, &mut pairs);
                        }
                    }
                }
            }
        }
    }

    pairs
}
