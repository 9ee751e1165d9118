use alloc::boxed::Box;

use crate::*;
pub use random::*;
pub use sequential::*;

mod random;
mod sequential;

/// Deals a `side` x `side` board out of a word bank.
///
/// Implementations must fail with [`GameError::InsufficientWords`] when the bank
/// holds fewer than `side * side` words, and must not place a word twice.
pub trait BoardGenerator {
    fn generate(&mut self, side: Coord, bank: &WordBank) -> Result<Board>;
}

impl<G: BoardGenerator + ?Sized> BoardGenerator for Box<G> {
    fn generate(&mut self, side: Coord, bank: &WordBank) -> Result<Board> {
        (**self).generate(side, bank)
    }
}
