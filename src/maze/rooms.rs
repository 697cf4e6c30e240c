use super::MazeConfig;
use crate::error::{MazeError, Result};
use crate::grid::{Cell, Direction, GridModel};
use log::trace;
use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::Rng;

/// Random positions tried for each room before generation gives up.
pub const ROOM_PLACEMENT_ATTEMPTS: usize = 64;

/// Axis-aligned block of cells opened into a single space.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Room {
    pub top: usize,
    pub left: usize,
    pub height: usize,
    pub width: usize,
}

impl Room {
    pub fn contains(&self, cell: Cell) -> bool {
        (self.top..self.top + self.height).contains(&cell.row)
            && (self.left..self.left + self.width).contains(&cell.col)
    }

    pub fn overlaps(&self, other: &Room) -> bool {
        self.top < other.top + other.height
            && other.top < self.top + self.height
            && self.left < other.left + other.width
            && other.left < self.left + self.width
    }

    pub fn cells(&self) -> impl Iterator<Item = Cell> + '_ {
        (self.top..self.top + self.height)
            .flat_map(move |row| (self.left..self.left + self.width).map(move |col| Cell::new(row, col)))
    }
}

pub(super) fn place_rooms(
    grid: &mut GridModel,
    config: &MazeConfig,
    rng: &mut StdRng,
) -> Result<Vec<Room>> {
    let mut rooms: Vec<Room> = Vec::with_capacity(config.num_rooms);
    let (min, max) = config.room_size_range;

    for _ in 0..config.num_rooms {
        let height = rng.gen_range(min..=max);
        let width = rng.gen_range(min..=max);

        let room = (0..ROOM_PLACEMENT_ATTEMPTS)
            .find_map(|_| {
                let candidate = Room {
                    top: rng.gen_range(0..=grid.height() - height),
                    left: rng.gen_range(0..=grid.width() - width),
                    height,
                    width,
                };
                (!rooms.iter().any(|r| r.overlaps(&candidate))).then_some(candidate)
            })
            .ok_or_else(|| MazeError::RoomPlacement {
                requested: config.num_rooms,
                placed: rooms.len(),
                attempts: ROOM_PLACEMENT_ATTEMPTS,
            })?;

        carve_room(grid, &room, rng)?;
        trace!("Placed room {:?}", room);
        rooms.push(room);
    }
    Ok(rooms)
}

/// Opens every wall inside the room plus one door to the surrounding maze.
fn carve_room(grid: &mut GridModel, room: &Room, rng: &mut StdRng) -> Result<()> {
    let cells: Vec<Cell> = room.cells().collect();
    for &cell in &cells {
        if cell.col + 1 < room.left + room.width {
            grid.open_passage(cell, Direction::East)?;
        }
        if cell.row + 1 < room.top + room.height {
            grid.open_passage(cell, Direction::South)?;
        }
    }

    let doors: Vec<(Cell, Direction)> = cells
        .iter()
        .flat_map(|&cell| Direction::ALL.into_iter().map(move |d| (cell, d)))
        .filter(|&(cell, direction)| {
            grid.step_within(cell, direction)
                .is_some_and(|next| !room.contains(next))
        })
        .collect();
    if let Some(&(cell, direction)) = doors.choose(rng) {
        grid.open_passage(cell, direction)?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;

    #[test]
    fn overlap_is_strict() {
        let a = Room { top: 0, left: 0, height: 2, width: 2 };
        let touching = Room { top: 0, left: 2, height: 2, width: 2 };
        let crossing = Room { top: 1, left: 1, height: 2, width: 2 };
        assert!(!a.overlaps(&touching));
        assert!(a.overlaps(&crossing));
        assert!(crossing.overlaps(&a));
    }

    #[test]
    fn rooms_are_open_inside_and_have_a_door() {
        let mut grid = GridModel::closed(12, 12).unwrap();
        let config = MazeConfig::new(5, 12, 12).with_rooms(3, (3, 3));
        let mut rng = StdRng::seed_from_u64(config.seed);
        let rooms = place_rooms(&mut grid, &config, &mut rng).unwrap();
        assert_eq!(rooms.len(), 3);

        for (i, room) in rooms.iter().enumerate() {
            assert!(rooms[i + 1..].iter().all(|other| !room.overlaps(other)));
            let mut doors = 0;
            for cell in room.cells() {
                for next in grid.neighbors(cell).unwrap() {
                    if !room.contains(next) {
                        doors += 1;
                    }
                }
                for direction in Direction::ALL {
                    if let Some(next) = grid.step_within(cell, direction) {
                        if room.contains(next) {
                            assert!(grid.is_open(cell, direction).unwrap());
                        }
                    }
                }
            }
            assert!(doors >= 1, "room {room:?} has no door");
        }
    }
}
