//! Match detection, scoring, and refill.
//!
//! A pivot cell is scanned along the four cardinal rays; runs of length
//! `MIN_RUN_LEN` or more on either axis score `run * RUN_SCORE_STEP` and get
//! their cells reassigned fresh random colors. The two axes are checked
//! independently, so a cross-shaped match scores on both and counts the
//! pivot cell twice.
//!
//! Refilled cells are not re-scanned: a refill may leave new runs on the
//! board, and they stay unscored until a later swap pivots onto them.

use arrayvec::ArrayVec;

use crate::board::Board;
use crate::rng::SimpleRng;
use tui_gemswap_types::{Axis, GemColor, BOARD_SIZE, MIN_RUN_LEN, RUN_SCORE_STEP};

/// Most cells one pivot can refill: both axes, full span, pivot twice per axis.
pub const REFILL_CAP: usize = 2 * (BOARD_SIZE + 1);

/// Same-colored neighbor counts along each cardinal ray, pivot excluded.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct RayCounts {
    pub up: usize,
    pub down: usize,
    pub left: usize,
    pub right: usize,
}

impl RayCounts {
    /// Vertical run length including the pivot.
    pub fn vertical_run(&self) -> usize {
        self.up + self.down + 1
    }

    /// Horizontal run length including the pivot.
    pub fn horizontal_run(&self) -> usize {
        self.left + self.right + 1
    }
}

/// Outcome of resolving one pivot.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Resolution {
    pub vertical_run: usize,
    pub horizontal_run: usize,
    pub score_delta: u32,
    /// Refilled coordinates, in RNG draw order. The pivot appears twice per
    /// matched axis because both directional loops start at offset zero.
    pub refilled: ArrayVec<(usize, usize), REFILL_CAP>,
}

/// Count same-colored cells along the four rays from the pivot.
///
/// Each ray walks outward until the first mismatch or the board edge; there
/// is no wraparound. All four counts are taken before any refill runs.
pub fn scan_rays(board: &Board, row: usize, col: usize) -> RayCounts {
    let Some(pivot) = board.peek(row, col) else {
        return RayCounts::default();
    };
    let color = pivot.color;

    let mut counts = RayCounts::default();

    for r in (0..row).rev() {
        if !same_color(board, r, col, color) {
            break;
        }
        counts.up += 1;
    }
    for r in row + 1..BOARD_SIZE {
        if !same_color(board, r, col, color) {
            break;
        }
        counts.down += 1;
    }
    for c in (0..col).rev() {
        if !same_color(board, row, c, color) {
            break;
        }
        counts.left += 1;
    }
    for c in col + 1..BOARD_SIZE {
        if !same_color(board, row, c, color) {
            break;
        }
        counts.right += 1;
    }

    counts
}

fn same_color(board: &Board, row: usize, col: usize, color: GemColor) -> bool {
    board.peek(row, col).is_some_and(|c| c.color == color)
}

/// Scan the pivot at (row, col), score any matched runs, and refill them.
///
/// The vertical axis is checked and refilled before the horizontal axis;
/// horizontal run length was already counted from the pre-refill colors.
pub fn resolve_at(board: &mut Board, rng: &mut SimpleRng, row: usize, col: usize) -> Resolution {
    let rays = scan_rays(board, row, col);

    let mut resolution = Resolution {
        vertical_run: rays.vertical_run(),
        horizontal_run: rays.horizontal_run(),
        ..Resolution::default()
    };

    if resolution.vertical_run >= MIN_RUN_LEN {
        resolution.score_delta += resolution.vertical_run as u32 * RUN_SCORE_STEP;
        log::debug!(
            "vertical run of {} at ({}, {}) scores {}",
            resolution.vertical_run,
            row,
            col,
            resolution.vertical_run as u32 * RUN_SCORE_STEP
        );
        refill_run(
            board,
            rng,
            row,
            col,
            rays.up,
            rays.down,
            Axis::Vertical,
            &mut resolution.refilled,
        );
    }

    if resolution.horizontal_run >= MIN_RUN_LEN {
        resolution.score_delta += resolution.horizontal_run as u32 * RUN_SCORE_STEP;
        log::debug!(
            "horizontal run of {} at ({}, {}) scores {}",
            resolution.horizontal_run,
            row,
            col,
            resolution.horizontal_run as u32 * RUN_SCORE_STEP
        );
        refill_run(
            board,
            rng,
            row,
            col,
            rays.left,
            rays.right,
            Axis::Horizontal,
            &mut resolution.refilled,
        );
    }

    resolution
}

/// Reassign random colors over a matched run.
///
/// Walks from the pivot outward to `ext1` (up/left), then separately from
/// the pivot outward to `ext2` (down/right). Both loops include offset 0,
/// so the pivot is reassigned twice; collapsing that to one draw would
/// shift every later color in the RNG stream.
#[allow(clippy::too_many_arguments)]
fn refill_run(
    board: &mut Board,
    rng: &mut SimpleRng,
    row: usize,
    col: usize,
    ext1: usize,
    ext2: usize,
    axis: Axis,
    refilled: &mut ArrayVec<(usize, usize), REFILL_CAP>,
) {
    match axis {
        Axis::Vertical => {
            for off in 0..=ext1 {
                let r = row - off;
                board.set_random_color(r, col, rng);
                refilled.push((r, col));
            }
            for off in 0..=ext2 {
                let r = row + off;
                board.set_random_color(r, col, rng);
                refilled.push((r, col));
            }
        }
        Axis::Horizontal => {
            for off in 0..=ext1 {
                let c = col - off;
                board.set_random_color(row, c, rng);
                refilled.push((row, c));
            }
            for off in 0..=ext2 {
                let c = col + off;
                board.set_random_color(row, c, rng);
                refilled.push((row, c));
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tui_gemswap_types::GemColor::*;

    fn board_with(colors: &[(usize, usize, GemColor)], base: GemColor) -> Board {
        let mut board = Board::filled(base);
        for &(row, col, color) in colors {
            board.set_color(row, col, color);
        }
        board
    }

    #[test]
    fn test_scan_rays_isolated_pivot() {
        let board = board_with(&[(4, 4, Red)], Yellow);
        let rays = scan_rays(&board, 4, 4);
        assert_eq!(rays, RayCounts::default());
        assert_eq!(rays.vertical_run(), 1);
        assert_eq!(rays.horizontal_run(), 1);
    }

    #[test]
    fn test_scan_rays_counts_each_direction() {
        // Column 4: rows 2..=6 red; row 4: cols 3..=4 red.
        let board = board_with(
            &[
                (2, 4, Red),
                (3, 4, Red),
                (4, 4, Red),
                (5, 4, Red),
                (6, 4, Red),
                (4, 3, Red),
            ],
            Yellow,
        );
        let rays = scan_rays(&board, 4, 4);
        assert_eq!(rays.up, 2);
        assert_eq!(rays.down, 2);
        assert_eq!(rays.left, 1);
        assert_eq!(rays.right, 0);
        assert_eq!(rays.vertical_run(), 5);
        assert_eq!(rays.horizontal_run(), 2);
    }

    #[test]
    fn test_scan_rays_stops_at_first_mismatch() {
        // A gap breaks the ray even if the color resumes beyond it.
        let board = board_with(&[(4, 4, Red), (3, 4, Red), (2, 4, Blue), (1, 4, Red)], Yellow);
        let rays = scan_rays(&board, 4, 4);
        assert_eq!(rays.up, 1);
    }

    #[test]
    fn test_scan_rays_stops_at_edges_without_wraparound() {
        let board = Board::filled(Red);
        let rays = scan_rays(&board, 0, 0);
        assert_eq!(rays.up, 0);
        assert_eq!(rays.left, 0);
        assert_eq!(rays.down, BOARD_SIZE - 1);
        assert_eq!(rays.right, BOARD_SIZE - 1);
    }

    #[test]
    fn test_resolve_below_threshold_changes_nothing() {
        let board = board_with(&[(4, 4, Red), (3, 4, Red)], Yellow);
        let mut mutated = board.clone();
        let mut rng = SimpleRng::new(1);
        let before = rng.clone().next_u32();

        let resolution = resolve_at(&mut mutated, &mut rng, 4, 4);

        assert_eq!(resolution.score_delta, 0);
        assert!(resolution.refilled.is_empty());
        assert_eq!(mutated, board, "no refill below the match threshold");
        // No RNG draw was consumed.
        assert_eq!(rng.next_u32(), before);
    }

    #[test]
    fn test_resolve_vertical_run_of_three_scores_thirty() {
        let board = board_with(&[(2, 4, Red), (3, 4, Red), (4, 4, Red)], Yellow);
        let mut mutated = board;
        let mut rng = SimpleRng::new(1);

        let resolution = resolve_at(&mut mutated, &mut rng, 3, 4);

        assert_eq!(resolution.vertical_run, 3);
        assert_eq!(resolution.score_delta, 30);
        // Up loop from the pivot, then down loop; offset 0 both times.
        assert_eq!(
            resolution.refilled.as_slice(),
            &[(3, 4), (2, 4), (3, 4), (4, 4)]
        );
    }

    #[test]
    fn test_resolve_cross_scores_both_axes() {
        let board = board_with(
            &[
                (3, 4, Red),
                (4, 4, Red),
                (5, 4, Red),
                (4, 3, Red),
                (4, 5, Red),
            ],
            Yellow,
        );
        let mut mutated = board;
        let mut rng = SimpleRng::new(1);

        let resolution = resolve_at(&mut mutated, &mut rng, 4, 4);

        assert_eq!(resolution.vertical_run, 3);
        assert_eq!(resolution.horizontal_run, 3);
        assert_eq!(resolution.score_delta, 60);
        // Vertical refill first, then horizontal; pivot appears in all four loops.
        assert_eq!(
            resolution.refilled.as_slice(),
            &[
                (4, 4),
                (3, 4),
                (4, 4),
                (5, 4),
                (4, 4),
                (4, 3),
                (4, 4),
                (4, 5),
            ]
        );
    }

    #[test]
    fn test_horizontal_run_uses_prerefill_counts() {
        // Cross where the vertical refill rewrites the pivot before the
        // horizontal check: the horizontal run was counted up front, so it
        // still scores.
        let board = board_with(
            &[
                (3, 4, Red),
                (4, 4, Red),
                (5, 4, Red),
                (4, 2, Red),
                (4, 3, Red),
            ],
            Yellow,
        );
        let mut mutated = board;
        let mut rng = SimpleRng::new(9);

        let resolution = resolve_at(&mut mutated, &mut rng, 4, 4);
        assert_eq!(resolution.horizontal_run, 3);
        assert_eq!(resolution.score_delta, 60);
    }

    #[test]
    fn test_refill_is_seed_deterministic() {
        let make = || board_with(&[(2, 4, Red), (3, 4, Red), (4, 4, Red)], Yellow);
        let mut board1 = make();
        let mut board2 = make();
        let mut rng1 = SimpleRng::new(77);
        let mut rng2 = SimpleRng::new(77);

        resolve_at(&mut board1, &mut rng1, 3, 4);
        resolve_at(&mut board2, &mut rng2, 3, 4);

        assert_eq!(board1, board2);
    }

    #[test]
    fn test_refill_touches_only_the_run() {
        let board = board_with(&[(2, 4, Red), (3, 4, Red), (4, 4, Red)], Yellow);
        let mut mutated = board.clone();
        let mut rng = SimpleRng::new(5);

        resolve_at(&mut mutated, &mut rng, 3, 4);

        for row in 0..BOARD_SIZE {
            for col in 0..BOARD_SIZE {
                if col == 4 && (2..=4).contains(&row) {
                    continue;
                }
                assert_eq!(
                    mutated.get(row, col).unwrap().color,
                    board.get(row, col).unwrap().color,
                    "cell ({}, {}) outside the run must keep its color",
                    row,
                    col
                );
            }
        }
    }
}
