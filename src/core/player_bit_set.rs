/// How many players fit in a `PlayerBitSet`.
pub const MAX_PLAYERS: usize = 16;

/// A set of player indexes, for example the winners of a showdown.
/// Index 0 is the hero in every equity computation.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash)]
pub struct PlayerBitSet {
    set: u16,
}

impl PlayerBitSet {
    pub fn count(&self) -> usize {
        self.set.count_ones() as usize
    }
    pub fn empty(&self) -> bool {
        self.set == 0
    }
    /// Add a player. Panics if `idx` is not below `MAX_PLAYERS`.
    pub fn enable(&mut self, idx: usize) {
        assert!(idx < MAX_PLAYERS, "player index {idx} out of range");
        self.set |= 1 << idx;
    }
    pub fn get(&self, idx: usize) -> bool {
        idx < MAX_PLAYERS && (self.set & (1 << idx)) != 0
    }
    pub fn ones(self) -> ActivePlayerBitSetIter {
        ActivePlayerBitSetIter { set: self.set }
    }
}

pub struct ActivePlayerBitSetIter {
    set: u16,
}

impl Iterator for ActivePlayerBitSetIter {
    type Item = usize;

    fn next(&mut self) -> Option<Self::Item> {
        if self.set == 0 {
            None
        } else {
            let idx = self.set.trailing_zeros() as usize;
            self.set &= !(1 << idx);
            Some(idx)
        }
    }
}
