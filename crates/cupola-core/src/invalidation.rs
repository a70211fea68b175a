use bitflags::bitflags;

bitflags! {
    /// Work a mutation leaves behind. Layout always implies paint.
    #[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
    pub struct Invalidation: u8 {
        const PAINT = 0b01;
        const LAYOUT = 0b11;
    }
}

impl Invalidation {
    pub fn needs_layout(self) -> bool {
        self.contains(Self::LAYOUT)
    }

    pub fn needs_paint(self) -> bool {
        self.intersects(Self::PAINT)
    }
}
