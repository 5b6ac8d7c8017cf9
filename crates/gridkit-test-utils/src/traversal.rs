//! Reference breadth-first traversals.
//!
//! These are the plain textbook loops: a [`Grid`] of per-cell state and a
//! [`RingBuffer`] frontier sized to the board, so every cell is enqueued
//! at most once and the buffer can never overflow.

use gridkit_core::{Coord, Dir};
use gridkit_ring::RingBuffer;
use gridkit_space::Grid;

/// Step distance from `start` to every reachable open cell.
///
/// Walls, unreachable cells, and every cell when `start` itself is
/// blocked or off the board are `None`.
pub fn bfs_distances(walls: &Grid<bool>, start: Coord) -> Grid<Option<u32>> {
    let board = walls.board();
    let mut dist: Grid<Option<u32>> = Grid::with_board(None, board);
    if walls.get(start) != Some(&false) {
        return dist;
    }

    let mut frontier = RingBuffer::new(board.cell_count());
    dist[start] = Some(0);
    frontier.push_back(start);
    let mut reached = 1usize;

    while let Some(cur) = frontier.pop_front() {
        // cells get their distance before they are queued
        let Some(d) = dist[cur] else {
            continue;
        };
        for next in board.neighbours(cur) {
            if walls[next] || dist[next].is_some() {
                continue;
            }
            dist[next] = Some(d + 1);
            frontier.push_back(next);
            reached += 1;
        }
    }

    log::debug!("bfs from {start}: reached {reached}/{} cells", board.cell_count());
    dist
}

/// A shortest sequence of moves from `start` to `goal` through open
/// cells, or `None` if `goal` is unreachable.
///
/// Ties are broken by [`Dir::ALL`] order.
pub fn shortest_path(walls: &Grid<bool>, start: Coord, goal: Coord) -> Option<Vec<Dir>> {
    let board = walls.board();
    if walls.get(start) != Some(&false) || walls.get(goal) != Some(&false) {
        return None;
    }

    // direction taken to enter each visited cell
    let mut came_by: Grid<Option<Dir>> = Grid::with_board(None, board);
    let mut seen = Grid::with_board(false, board);
    let mut frontier = RingBuffer::new(board.cell_count());
    seen[start] = true;
    frontier.push_back(start);

    while let Some(cur) = frontier.pop_front() {
        if cur == goal {
            break;
        }
        for dir in Dir::ALL {
            let next = cur + dir;
            if walls.get(next) != Some(&false) || seen[next] {
                continue;
            }
            seen[next] = true;
            came_by[next] = Some(dir);
            frontier.push_back(next);
        }
    }

    if !seen[goal] {
        log::debug!("no path from {start} to {goal}");
        return None;
    }

    let mut path = Vec::new();
    let mut cur = goal;
    while let Some(dir) = came_by[cur] {
        path.push(dir);
        cur += -dir;
    }
    path.reverse();
    Some(path)
}
