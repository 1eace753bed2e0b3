use core::ops::{BitAnd, BitOr, Not};

/// A set of bit flags stored in a single integer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Flags<B = u32> {
    bits: B,
}

impl<B> Default for Flags<B>
where
    B: Default,
{
    fn default() -> Self {
        Self { bits: B::default() }
    }
}

impl<B> Flags<B>
where
    B: Copy + Default + PartialEq + BitAnd<Output = B> + BitOr<Output = B> + Not<Output = B>,
{
    /// Creates flags with the given initial bits.
    pub const fn new(bits: B) -> Self {
        Self { bits }
    }

    pub fn bits(&self) -> B {
        self.bits
    }

    /// Sets every bit in `mask`.
    pub fn set(&mut self, mask: B) {
        self.bits = self.bits | mask;
    }

    /// Clears every bit in `mask`.
    pub fn clear(&mut self, mask: B) {
        self.bits = self.bits & !mask;
    }

    /// Returns the bits selected by `mask`.
    pub fn get(&self, mask: B) -> B {
        self.bits & mask
    }

    /// Checks if all the bits in `mask` are set.
    pub fn are_set(&self, mask: B) -> bool {
        self.get(mask) == mask
    }

    /// Checks if all the bits in `mask` are clear.
    pub fn are_clear(&self, mask: B) -> bool {
        self.get(mask) == B::default()
    }
}
