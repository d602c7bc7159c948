#![forbid(unsafe_code)]

//! Cell-grid geometry.
//!
//! All coordinates are terminal cells. Arithmetic saturates so that shrinking
//! a rectangle past zero yields an empty rectangle instead of wrapping.

/// An axis-aligned rectangle in cell coordinates.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct Rect {
    pub x: u16,
    pub y: u16,
    pub width: u16,
    pub height: u16,
}

impl Rect {
    /// Create a new rectangle.
    #[must_use]
    pub const fn new(x: u16, y: u16, width: u16, height: u16) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    /// Rectangle anchored at the origin.
    #[must_use]
    pub const fn from_size(width: u16, height: u16) -> Self {
        Self::new(0, 0, width, height)
    }

    #[inline]
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.width == 0 || self.height == 0
    }

    /// Exclusive right edge.
    #[inline]
    #[must_use]
    pub const fn right(&self) -> u16 {
        self.x.saturating_add(self.width)
    }

    /// Exclusive bottom edge.
    #[inline]
    #[must_use]
    pub const fn bottom(&self) -> u16 {
        self.y.saturating_add(self.height)
    }

    #[must_use]
    pub const fn area(&self) -> u32 {
        self.width as u32 * self.height as u32
    }

    /// Whether the cell `(x, y)` lies inside this rectangle.
    #[inline]
    #[must_use]
    pub const fn contains(&self, x: u16, y: u16) -> bool {
        x >= self.x && x < self.right() && y >= self.y && y < self.bottom()
    }

    /// Shrink by `sides` on each edge.
    #[must_use]
    pub fn inner(&self, sides: Sides) -> Rect {
        let x = self.x.saturating_add(sides.left);
        let y = self.y.saturating_add(sides.top);
        let width = self
            .width
            .saturating_sub(sides.left)
            .saturating_sub(sides.right);
        let height = self
            .height
            .saturating_sub(sides.top)
            .saturating_sub(sides.bottom);
        Rect::new(x, y, width, height)
    }

    /// Overlap of two rectangles (empty when disjoint).
    #[must_use]
    pub fn intersection(&self, other: &Rect) -> Rect {
        let x = self.x.max(other.x);
        let y = self.y.max(other.y);
        let right = self.right().min(other.right());
        let bottom = self.bottom().min(other.bottom());
        if right <= x || bottom <= y {
            return Rect::new(x, y, 0, 0);
        }
        Rect::new(x, y, right - x, bottom - y)
    }

    /// Take a row band of `height` cells starting `offset` rows from the top,
    /// clipped to this rectangle.
    #[must_use]
    pub fn row_band(&self, offset: u16, height: u16) -> Rect {
        let y = self.y.saturating_add(offset);
        if y >= self.bottom() {
            return Rect::new(self.x, self.bottom(), self.width, 0);
        }
        let height = height.min(self.bottom() - y);
        Rect::new(self.x, y, self.width, height)
    }

    /// Split off `width` columns from the right edge.
    ///
    /// Returns `(rest, right_part)`; the right part is clipped to the
    /// available width.
    #[must_use]
    pub fn split_right(&self, width: u16) -> (Rect, Rect) {
        let width = width.min(self.width);
        let rest = Rect::new(self.x, self.y, self.width - width, self.height);
        let right = Rect::new(rest.right(), self.y, width, self.height);
        (rest, right)
    }

    /// Split off `width` columns from the left edge.
    ///
    /// Returns `(left_part, rest)`.
    #[must_use]
    pub fn split_left(&self, width: u16) -> (Rect, Rect) {
        let width = width.min(self.width);
        let left = Rect::new(self.x, self.y, width, self.height);
        let rest = Rect::new(left.right(), self.y, self.width - width, self.height);
        (left, rest)
    }
}

/// Per-edge spacing (padding or margins).
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct Sides {
    pub top: u16,
    pub right: u16,
    pub bottom: u16,
    pub left: u16,
}

impl Sides {
    #[must_use]
    pub const fn new(top: u16, right: u16, bottom: u16, left: u16) -> Self {
        Self {
            top,
            right,
            bottom,
            left,
        }
    }

    #[must_use]
    pub const fn all(n: u16) -> Self {
        Self::new(n, n, n, n)
    }

    /// Same spacing vertically and horizontally.
    #[must_use]
    pub const fn symmetric(vertical: u16, horizontal: u16) -> Self {
        Self::new(vertical, horizontal, vertical, horizontal)
    }
}

impl From<u16> for Sides {
    fn from(n: u16) -> Self {
        Self::all(n)
    }
}

impl From<(u16, u16)> for Sides {
    fn from((vertical, horizontal): (u16, u16)) -> Self {
        Self::symmetric(vertical, horizontal)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn contains_is_half_open() {
        let r = Rect::new(2, 3, 4, 2);
        assert!(r.contains(2, 3));
        assert!(r.contains(5, 4));
        assert!(!r.contains(6, 4));
        assert!(!r.contains(5, 5));
        assert!(!r.contains(1, 3));
    }

    #[test]
    fn inner_saturates_to_empty() {
        let r = Rect::new(0, 0, 3, 3);
        let inner = r.inner(Sides::all(2));
        assert!(inner.is_empty());
    }

    #[test]
    fn intersection_disjoint_is_empty() {
        let a = Rect::new(0, 0, 2, 2);
        let b = Rect::new(5, 5, 2, 2);
        assert!(a.intersection(&b).is_empty());
    }

    #[test]
    fn intersection_overlap() {
        let a = Rect::new(0, 0, 4, 4);
        let b = Rect::new(2, 1, 4, 4);
        assert_eq!(a.intersection(&b), Rect::new(2, 1, 2, 3));
    }

    #[test]
    fn row_band_clips_to_bottom() {
        let r = Rect::new(0, 0, 10, 3);
        assert_eq!(r.row_band(2, 5), Rect::new(0, 2, 10, 1));
        assert!(r.row_band(3, 1).is_empty());
    }

    #[test]
    fn split_right_and_left() {
        let r = Rect::new(1, 0, 10, 1);
        let (rest, right) = r.split_right(3);
        assert_eq!(rest, Rect::new(1, 0, 7, 1));
        assert_eq!(right, Rect::new(8, 0, 3, 1));

        let (left, rest) = r.split_left(2);
        assert_eq!(left, Rect::new(1, 0, 2, 1));
        assert_eq!(rest, Rect::new(3, 0, 8, 1));
    }

    #[test]
    fn split_wider_than_rect_takes_everything() {
        let r = Rect::new(0, 0, 2, 1);
        let (rest, right) = r.split_right(5);
        assert!(rest.is_empty());
        assert_eq!(right.width, 2);
    }

    mod props {
        use super::*;
        use proptest::prelude::*;

        fn rect() -> impl Strategy<Value = Rect> {
            (0u16..50, 0u16..50, 0u16..50, 0u16..50).prop_map(|(x, y, w, h)| Rect::new(x, y, w, h))
        }

        proptest! {
            #[test]
            fn intersection_is_contained_in_both(a in rect(), b in rect()) {
                let i = a.intersection(&b);
                for y in i.y..i.bottom() {
                    for x in i.x..i.right() {
                        prop_assert!(a.contains(x, y));
                        prop_assert!(b.contains(x, y));
                    }
                }
            }

            #[test]
            fn split_right_preserves_width(r in rect(), w in 0u16..60) {
                let (rest, right) = r.split_right(w);
                prop_assert_eq!(rest.width + right.width, r.width);
                prop_assert_eq!(rest.right(), right.x);
            }
        }
    }
}
