use crate::helpe::*;

impl Partition {
    /// Creates an original block, i.e., one that was part of the
    /// user input and not born from a split.
    pub fn original(id: u32, size: MemUnits, original_index: usize) -> Self {
        Self {
            id,
            size,
            original_index,
            parent_id:      None,
            original_size:  None,
        }
    }

    /// Returns `true` if the block is original. See
    /// [`Partition::original`].
    #[inline(always)]
    pub fn is_original(&self) -> bool {
        if let Some(_) = self.parent_id {
            false
        } else {
            true
        }
    }

    /// Returns `true` if the block was produced by splitting
    /// another one.
    #[inline(always)]
    pub fn is_derived(&self) -> bool {
        !self.is_original()
    }

    /// Returns `true` if a request of `request` units fits in
    /// the block as it currently stands.
    #[inline(always)]
    pub fn fits(&self, request: MemUnits) -> bool {
        self.size >= request
    }

    /// Returns the capacity of the block's *ancestral* partition.
    /// For blocks that never recorded one, that is the current size.
    #[inline(always)]
    pub fn ancestral_size(&self) -> MemUnits {
        self.original_size.unwrap_or(self.size)
    }
}
