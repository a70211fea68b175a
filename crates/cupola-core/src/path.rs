//! Fill paths made of axis-aligned rectangles.
//!
//! Every region the action compositor builds is a union (or an even-odd
//! combination) of rectangles, so a path here is just a list of rects plus
//! the rule that decides which points are inside.

use smallvec::SmallVec;

use crate::{Rect, Vec2};

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum FillRule {
    /// A point is inside if any rect covers it.
    #[default]
    NonZero,
    /// A point is inside if an odd number of rects cover it.
    EvenOdd,
}

#[derive(Clone, Debug, Default, PartialEq)]
pub struct Path {
    fill_rule: FillRule,
    rects: SmallVec<[Rect; 8]>,
}

impl Path {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_fill_rule(fill_rule: FillRule) -> Self {
        Self {
            fill_rule,
            rects: SmallVec::new(),
        }
    }

    pub fn fill_rule(&self) -> FillRule {
        self.fill_rule
    }

    /// Empty rects are dropped; they can never change coverage.
    pub fn add_rect(&mut self, rect: Rect) {
        if !rect.is_empty() {
            self.rects.push(rect);
        }
    }

    pub fn rects(&self) -> &[Rect] {
        &self.rects
    }

    pub fn is_empty(&self) -> bool {
        self.rects.is_empty()
    }

    pub fn len(&self) -> usize {
        self.rects.len()
    }

    pub fn translate(&self, by: Vec2) -> Path {
        Path {
            fill_rule: self.fill_rule,
            rects: self.rects.iter().map(|r| r.translate(by)).collect(),
        }
    }

    pub fn contains(&self, p: Vec2) -> bool {
        let hits = self.rects.iter().filter(|r| r.contains(p)).count();
        match self.fill_rule {
            FillRule::NonZero => hits > 0,
            FillRule::EvenOdd => hits % 2 == 1,
        }
    }
}
