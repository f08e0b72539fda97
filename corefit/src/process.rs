use crate::helpe::*;

impl Process {
    pub fn new(id: u32, name: &str, size: MemUnits) -> Self {
        Self {
            id,
            name:   name.to_string(),
            size,
        }
    }

    /// Returns `true` if the request could land in `block`
    /// as it currently stands.
    #[inline(always)]
    pub fn fits_in(&self, block: &Partition) -> bool {
        block.fits(self.size)
    }
}
