//! Occlusion-aware field-of-view sensing via symmetric ray casting.

use slam_core::Cell;
use slam_env::{Environment, Observation, TileKind};

use crate::agent::Agent;

/// Perform one sensing pass for `agent`, folding newly observed or changed
/// cells into its private map.
///
/// Returns the list of `(Cell, TileKind)` discoveries made this call —
/// empty if the agent is inactive or nothing new was seen.
pub fn sense(agent: &mut Agent, env: &Environment) -> Vec<(Cell, TileKind)> {
    if !agent.active {
        return Vec::new();
    }

    let mut discoveries = Vec::new();
    let center = agent.position;
    let r = agent.fov_radius as i32;

    for dy in -r..=r {
        for dx in -r..=r {
            if (dx * dx + dy * dy) as i64 > (r as i64) * (r as i64) {
                continue;
            }
            let target = Cell::new(center.x + dx, center.y + dy);
            trace_ray(agent, env, center, target, &mut discoveries);
        }
    }

    discoveries
}

/// Walk the symmetric Bresenham line from `from` to `to`, recording every
/// newly-changed cell into `agent.private_map` and stopping the trace at the
/// first occluder encountered (after recording it — the occluder itself is
/// observable, what lies behind it is not).
fn trace_ray(
    agent: &mut Agent,
    env: &Environment,
    from: Cell,
    to: Cell,
    discoveries: &mut Vec<(Cell, TileKind)>,
) {
    for cell in bresenham_line(from, to) {
        if !env.in_bounds(cell) {
            continue;
        }
        let truth = env.tile(cell);
        let known = agent.private_map.get(cell).copied().unwrap_or(Observation::Unknown);
        if known != Observation::Seen(truth) {
            agent.private_map.set(cell, Observation::Seen(truth));
            discoveries.push((cell, truth));
        }
        // Walls and closed doors stop this ray (but not others) after being
        // recorded. Windows and out-of-bounds tiles are transparent to
        // vision even though both block movement.
        if blocks_vision(truth) {
            break;
        }
    }
}

/// Tiles that stop a line of sight. Distinct from `TileKind::is_blocking`,
/// which also governs movement and pathing — `OutOfBounds` blocks those but
/// not vision.
#[inline]
fn blocks_vision(tile: TileKind) -> bool {
    matches!(tile, TileKind::Wall | TileKind::DoorClosed)
}

/// The classic symmetric integer line-drawing algorithm: produces the same
/// set of cells whether called `(a, b)` or `(b, a)`, inclusive of both
/// endpoints.
fn bresenham_line(from: Cell, to: Cell) -> Vec<Cell> {
    let (mut x, mut y) = (from.x, from.y);
    let (x1, y1) = (to.x, to.y);

    let dx = (x1 - x).abs();
    let dy = -(y1 - y).abs();
    let sx = if x < x1 { 1 } else { -1 };
    let sy = if y < y1 { 1 } else { -1 };
    let mut err = dx + dy;

    let mut points = Vec::new();
    loop {
        points.push(Cell::new(x, y));
        if x == x1 && y == y1 {
            break;
        }
        let e2 = 2 * err;
        if e2 >= dy {
            err += dy;
            x += sx;
        }
        if e2 <= dx {
            err += dx;
            y += sy;
        }
    }
    points
}
