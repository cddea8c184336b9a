//! Rectangle geometry for sample placement

/// Axis-aligned pixel region, half-open on the right and bottom edges.
///
/// A rectangle covers columns `left..right` and rows `top..bottom`, so two
/// rectangles that share an edge do not share any pixel.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Rectangle {
    pub left: u32,
    pub top: u32,
    pub right: u32,
    pub bottom: u32,
}

impl Rectangle {
    pub fn new(left: u32, top: u32, right: u32, bottom: u32) -> Self {
        Self {
            left,
            top,
            right,
            bottom,
        }
    }

    /// Builds the rectangle anchored at `(left, top)` with the given extent,
    /// or `None` when an edge would not fit in `u32`.
    pub fn from_origin(left: u32, top: u32, width: u32, height: u32) -> Option<Self> {
        Some(Self::new(left, top, left.checked_add(width)?, top.checked_add(height)?))
    }

    pub fn width(&self) -> u32 {
        self.right - self.left
    }

    pub fn height(&self) -> u32 {
        self.bottom - self.top
    }

    /// Returns true when both rectangles cover at least one common pixel.
    ///
    /// Touching edges (`self.right == other.left` and so on) are not an overlap.
    pub fn overlaps(&self, other: &Rectangle) -> bool {
        !(self.right <= other.left
            || other.right <= self.left
            || self.bottom <= other.top
            || other.bottom <= self.top)
    }

    /// Whether the rectangle is non-empty and lies inside a `width` x `height` image.
    pub fn fits_within(&self, width: u32, height: u32) -> bool {
        self.right > self.left
            && self.bottom > self.top
            && self.right <= width
            && self.bottom <= height
    }
}

/// Ordered set of mutually non-overlapping rectangles.
///
/// The only way to grow the set is [`SampleSet::try_insert`], which keeps the
/// pairwise non-overlap invariant.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SampleSet {
    regions: Vec<Rectangle>,
}

impl SampleSet {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            regions: Vec::with_capacity(capacity),
        }
    }

    /// Appends `candidate` if it overlaps none of the accepted rectangles.
    pub fn try_insert(&mut self, candidate: Rectangle) -> bool {
        if self.regions.iter().any(|r| r.overlaps(&candidate)) {
            return false;
        }
        self.regions.push(candidate);
        true
    }

    pub fn len(&self) -> usize {
        self.regions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.regions.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Rectangle> {
        self.regions.iter()
    }

    pub fn as_slice(&self) -> &[Rectangle] {
        &self.regions
    }

    pub fn into_vec(self) -> Vec<Rectangle> {
        self.regions
    }
}

impl<'a> IntoIterator for &'a SampleSet {
    type Item = &'a Rectangle;
    type IntoIter = std::slice::Iter<'a, Rectangle>;

    fn into_iter(self) -> Self::IntoIter {
        self.regions.iter()
    }
}
