//! ASCII frames from presentation snapshots.
//!
//! Exercises the presentation-adapter contract end to end: everything
//! rendered here comes from [`arena_core::view::snapshot`], read-only.

use arena_core::unit::Side;
use arena_core::view::UnitView;

// Character grid dimensions.
const COLS: i64 = 60;
const ROWS: i64 = 16;

// World-space window mapped onto the grid.
const WORLD_W: i64 = 1200;
const WORLD_H: i64 = 800;

/// Render living units as a character grid.
///
/// Player units print as the uppercase initial of their name, enemy units
/// as the lowercase initial. Casting units are marked in the status block,
/// not the grid.
#[must_use]
pub fn render_frame(views: &[UnitView]) -> String {
    let mut grid = vec![vec!['.'; COLS as usize]; ROWS as usize];

    for view in views {
        let x = view.position.x.to_num::<i64>().clamp(0, WORLD_W - 1);
        let y = view.position.y.to_num::<i64>().clamp(0, WORLD_H - 1);
        let col = (x * COLS / WORLD_W) as usize;
        let row = (y * ROWS / WORLD_H) as usize;

        let initial = view.name.chars().next().unwrap_or('?');
        grid[row][col] = match view.side {
            Side::Player => initial.to_ascii_uppercase(),
            Side::Enemy => initial.to_ascii_lowercase(),
        };
    }

    let mut out = String::with_capacity((COLS as usize + 1) * ROWS as usize);
    for row in grid {
        out.extend(row);
        out.push('\n');
    }
    out
}

/// One status line per living unit: side, name, level, HP, mana, cast marker.
#[must_use]
pub fn render_status(views: &[UnitView]) -> String {
    views
        .iter()
        .map(|view| {
            let side = match view.side {
                Side::Player => 'P',
                Side::Enemy => 'E',
            };
            let cast = if view.casting { " *casting*" } else { "" };
            format!(
                "[{side}] {:<10} L{}  HP {:>4}/{:<4}  MP {:>3}/{:<3}{cast}",
                view.name, view.level, view.hp, view.max_hp, view.mana, view.mana_max
            )
        })
        .collect::<Vec<_>>()
        .join("\n")
}
