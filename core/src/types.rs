/// Single coordinate axis used for grid side length and positions.
pub type Coord = u8;

/// Two-dimensional coordinates `(row, col)`.
pub type Coord2 = (Coord, Coord);

pub trait ToNdIndex {
    type Output;
    fn to_nd_index(self) -> Self::Output;
}

impl ToNdIndex for Coord2 {
    type Output = [usize; 2];

    fn to_nd_index(self) -> Self::Output {
        [self.0.into(), self.1.into()]
    }
}

/// Number of cells on a square grid of side `side`.
pub const fn cell_count(side: Coord) -> usize {
    let side = side as usize;
    side * side
}

/// Iterates all coordinates of a square grid in row-major order.
pub fn iter_coords(side: Coord) -> impl Iterator<Item = Coord2> {
    (0..side).flat_map(move |row| (0..side).map(move |col| (row, col)))
}
