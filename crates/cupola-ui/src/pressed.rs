use smallvec::SmallVec;

/// Press state for every action in a group, indexed like the child list.
///
/// Indices past the end read as "not pressed", so a mask built for an older
/// child list can still be painted with.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct PressedMask(SmallVec<[bool; 8]>);

impl PressedMask {
    pub fn new(len: usize) -> Self {
        Self(SmallVec::from_elem(false, len))
    }

    pub fn from_indices(len: usize, pressed: impl IntoIterator<Item = usize>) -> Self {
        let mut mask = Self::new(len);
        for i in pressed {
            mask.set(i, true);
        }
        mask
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn is_pressed(&self, index: usize) -> bool {
        self.0.get(index).copied().unwrap_or(false)
    }

    /// Returns true if the stored value changed.
    pub fn set(&mut self, index: usize, pressed: bool) -> bool {
        debug_assert!(
            index < self.0.len(),
            "press index {index} out of range for {} actions",
            self.0.len()
        );
        match self.0.get_mut(index) {
            Some(slot) if *slot != pressed => {
                *slot = pressed;
                true
            }
            _ => false,
        }
    }

    pub fn any(&self) -> bool {
        self.0.iter().any(|p| *p)
    }

    pub fn pressed_indices(&self) -> impl Iterator<Item = usize> + '_ {
        self.0
            .iter()
            .enumerate()
            .filter_map(|(i, p)| p.then_some(i))
    }

    pub fn insert(&mut self, index: usize) {
        self.0.insert(index, false);
    }

    pub fn remove(&mut self, index: usize) -> bool {
        self.0.remove(index)
    }

    pub fn resize(&mut self, len: usize) {
        self.0.resize(len, false);
    }

    /// Releases every press; returns true if anything was pressed.
    pub fn clear(&mut self) -> bool {
        let had_any = self.any();
        self.0.iter_mut().for_each(|p| *p = false);
        had_any
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn set_reports_changes_only() {
        let mut mask = PressedMask::new(3);
        assert!(mask.set(1, true));
        assert!(!mask.set(1, true));
        assert!(mask.is_pressed(1));
        assert!(!mask.is_pressed(7));
        assert_eq!(mask.pressed_indices().collect::<Vec<_>>(), vec![1]);
    }

    #[test]
    fn insert_and_remove_keep_press_attached() {
        let mut mask = PressedMask::from_indices(3, [2]);
        mask.insert(0);
        assert!(mask.is_pressed(3));
        assert!(!mask.remove(0));
        assert!(mask.is_pressed(2));
        assert!(mask.clear());
        assert!(!mask.any());
    }
}
