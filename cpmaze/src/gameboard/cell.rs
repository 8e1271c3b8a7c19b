use crate::dims::Dims;

/// Blocked-wall bits as returned by [`blocked_walls`].
pub const TOP_BORDER: u8 = 1;
pub const RIGHT_BORDER: u8 = 2;
pub const BOTTOM_BORDER: u8 = 4;
pub const LEFT_BORDER: u8 = 8;

/// Maps a situation (set of open directions, right=1, bottom=2, left=4, top=8)
/// to the set of blocked walls.
const BORDERS: [u8; 16] = [
    TOP_BORDER | RIGHT_BORDER | BOTTOM_BORDER | LEFT_BORDER,
    TOP_BORDER | BOTTOM_BORDER | LEFT_BORDER,
    TOP_BORDER | RIGHT_BORDER | LEFT_BORDER,
    TOP_BORDER | LEFT_BORDER,
    TOP_BORDER | RIGHT_BORDER | BOTTOM_BORDER,
    TOP_BORDER | BOTTOM_BORDER,
    TOP_BORDER | RIGHT_BORDER,
    TOP_BORDER,
    RIGHT_BORDER | BOTTOM_BORDER | LEFT_BORDER,
    BOTTOM_BORDER | LEFT_BORDER,
    RIGHT_BORDER | LEFT_BORDER,
    LEFT_BORDER,
    BOTTOM_BORDER | RIGHT_BORDER,
    BOTTOM_BORDER,
    RIGHT_BORDER,
    0,
];

/// Number of distinct situations, also the weight of one visit in a packed cell code.
pub const SITUATIONS: u32 = 16;

/// Looks up the blocked walls of a situation code. Only the low 4 bits are used.
pub fn blocked_walls(situation: u8) -> u8 {
    BORDERS[(situation % SITUATIONS as u8) as usize]
}

pub fn can_go_up(situation: u8) -> bool {
    blocked_walls(situation) & TOP_BORDER == 0
}

pub fn can_go_down(situation: u8) -> bool {
    blocked_walls(situation) & BOTTOM_BORDER == 0
}

pub fn can_go_left(situation: u8) -> bool {
    blocked_walls(situation) & LEFT_BORDER == 0
}

pub fn can_go_right(situation: u8) -> bool {
    blocked_walls(situation) & RIGHT_BORDER == 0
}

#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum CellWall {
    Top,
    Bottom,
    Left,
    Right,
}

impl CellWall {
    /// Scan order shared by the generator and the walkers: up, down, left, right.
    pub fn get_in_order() -> [CellWall; 4] {
        use CellWall::*;
        [Top, Bottom, Left, Right]
    }

    /// Picks a direction from a draw in `0..4`, following [`CellWall::get_in_order`].
    pub fn from_draw(draw: usize) -> CellWall {
        Self::get_in_order()[draw % 4]
    }

    pub fn to_coord(self) -> Dims {
        match self {
            Self::Top => Dims(0, -1),
            Self::Bottom => Dims(0, 1),
            Self::Left => Dims(-1, 0),
            Self::Right => Dims(1, 0),
        }
    }

    pub fn reverse_wall(self) -> CellWall {
        match self {
            Self::Top => Self::Bottom,
            Self::Bottom => Self::Top,
            Self::Left => Self::Right,
            Self::Right => Self::Left,
        }
    }

    /// Bit of this wall in the blocked mask.
    pub fn border_bit(self) -> u8 {
        match self {
            Self::Top => TOP_BORDER,
            Self::Right => RIGHT_BORDER,
            Self::Bottom => BOTTOM_BORDER,
            Self::Left => LEFT_BORDER,
        }
    }

    /// Bit of this wall in the situation code, set once the wall is removed.
    pub fn opening_bit(self) -> u8 {
        match self {
            Self::Right => 1,
            Self::Bottom => 2,
            Self::Left => 4,
            Self::Top => 8,
        }
    }
}

/// One maze cell: which walls are open, and how many times a walker marked it.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Cell {
    situation: u8,
    visits: u32,
}

impl Cell {
    /// Fully enclosed, unvisited cell.
    pub fn new() -> Cell {
        Cell::default()
    }

    /// Decodes a packed `visits * 16 + situation` value.
    pub fn from_code(code: u32) -> Cell {
        Cell {
            situation: (code % SITUATIONS) as u8,
            visits: code / SITUATIONS,
        }
    }

    /// Packed `visits * 16 + situation` value, as used by renderers and snapshots.
    pub fn code(&self) -> u32 {
        self.visits * SITUATIONS + self.situation as u32
    }

    pub fn situation(&self) -> u8 {
        self.situation
    }

    pub fn blocked_walls(&self) -> u8 {
        blocked_walls(self.situation)
    }

    pub fn make_passage(&mut self, wall: CellWall) {
        self.situation |= wall.opening_bit();
    }

    pub fn is_open(&self, wall: CellWall) -> bool {
        match wall {
            CellWall::Top => can_go_up(self.situation),
            CellWall::Bottom => can_go_down(self.situation),
            CellWall::Left => can_go_left(self.situation),
            CellWall::Right => can_go_right(self.situation),
        }
    }

    pub fn is_closed(&self, wall: CellWall) -> bool {
        !self.is_open(wall)
    }

    pub fn open_count(&self) -> usize {
        CellWall::get_in_order()
            .into_iter()
            .filter(|&wall| self.is_open(wall))
            .count()
    }

    pub fn visits(&self) -> u32 {
        self.visits
    }

    pub fn is_visited(&self) -> bool {
        self.visits > 0
    }

    pub fn visit(&mut self) {
        self.visits += 1;
    }

    pub fn unvisit(&mut self) {
        self.visits = self.visits.saturating_sub(1);
    }

    pub fn clear_visits(&mut self) {
        self.visits = 0;
    }
}
