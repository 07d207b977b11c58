use std::fmt;

use ndarray::Array1;
#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use super::Interval;

/// An axis-aligned box: one [`Interval`] per dimension.
///
/// Orthants and vertices are indexed by bit patterns: bit `i` of the index
/// selects the lower (`0`) or upper (`1`) side of dimension `i`. Iterating
/// indices `0..2^d` visits them in a fixed order.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(transparent))]
pub struct Rectangle {
    sides: Vec<Interval>,
}

impl Rectangle {
    pub fn new(sides: Vec<Interval>) -> Self {
        Self { sides }
    }

    /// The unit hypercube `[0, 1]^dimension`.
    pub fn unit_cube(dimension: usize) -> Self {
        Self::new(vec![Interval::unit(); dimension])
    }

    pub fn dimension(&self) -> usize {
        self.sides.len()
    }

    pub fn sides(&self) -> &[Interval] {
        &self.sides
    }

    /// Returns the interval along dimension `i`.
    ///
    /// # Panics
    ///
    /// Panics if `i` is out of range.
    pub fn side(&self, i: usize) -> Interval {
        self.sides[i]
    }

    pub fn center(&self) -> Array1<f64> {
        self.sides.iter().map(Interval::midpoint).collect()
    }

    pub fn side_lengths(&self) -> Array1<f64> {
        self.sides.iter().map(Interval::length).collect()
    }

    /// Returns the longest side length, or zero in dimension zero.
    pub fn max_side_length(&self) -> f64 {
        self.sides
            .iter()
            .map(Interval::length)
            .fold(0.0, f64::max)
    }

    /// Returns the rectangle with the same center and every side doubled.
    pub fn same_center_double_lengths(&self) -> Self {
        Self::new(self.sides.iter().map(Interval::doubled).collect())
    }

    /// Returns true if every coordinate of `point` lies within its side,
    /// widened by `epsilon`.
    ///
    /// # Panics
    ///
    /// Panics if `point` has the wrong dimension.
    pub fn contains(&self, point: &Array1<f64>, epsilon: f64) -> bool {
        assert_eq!(
            point.len(),
            self.dimension(),
            "point dimension must match the rectangle"
        );
        self.sides
            .iter()
            .zip(point.iter())
            .all(|(side, &x)| side.contains(x, epsilon))
    }

    /// Returns the number of orthants, `2^dimension`.
    pub fn orthant_count(&self) -> usize {
        1 << self.dimension()
    }

    /// Returns the orthant selected by the bits of `index`.
    ///
    /// # Panics
    ///
    /// Panics if `index >= 2^dimension`.
    pub fn orthant(&self, index: usize) -> Self {
        assert!(index < self.orthant_count(), "orthant index out of range");
        let sides = self
            .sides
            .iter()
            .enumerate()
            .map(|(i, side)| {
                if (index >> i) & 1 == 1 {
                    side.upper_half()
                } else {
                    side.lower_half()
                }
            })
            .collect();
        Self::new(sides)
    }

    /// Iterates over all `2^dimension` orthants in index order.
    pub fn orthants(&self) -> impl Iterator<Item = Rectangle> + '_ {
        (0..self.orthant_count()).map(|index| self.orthant(index))
    }

    /// Returns the vertex selected by the bits of `index`.
    ///
    /// # Panics
    ///
    /// Panics if `index >= 2^dimension`.
    pub fn vertex(&self, index: usize) -> Array1<f64> {
        assert!(index < self.orthant_count(), "vertex index out of range");
        self.sides
            .iter()
            .enumerate()
            .map(|(i, side)| {
                if (index >> i) & 1 == 1 {
                    side.upper()
                } else {
                    side.lower()
                }
            })
            .collect()
    }

    /// Iterates over all `2^dimension` vertices in index order.
    pub fn vertices(&self) -> impl Iterator<Item = Array1<f64>> + '_ {
        (0..self.orthant_count()).map(|index| self.vertex(index))
    }
}

impl FromIterator<Interval> for Rectangle {
    fn from_iter<T: IntoIterator<Item = Interval>>(iter: T) -> Self {
        Self::new(iter.into_iter().collect())
    }
}

impl fmt::Display for Rectangle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, side) in self.sides.iter().enumerate() {
            if i > 0 {
                f.write_str(" x ")?;
            }
            write!(f, "{side}")?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use approx::assert_relative_eq;
    use ndarray::array;

    fn sample() -> Rectangle {
        Rectangle::new(vec![
            Interval::new(-2.0, 2.0).unwrap(),
            Interval::new(0.0, 1.0).unwrap(),
        ])
    }

    #[test]
    fn center_and_sides() {
        let r = sample();

        assert_eq!(r.center(), array![0.0, 0.5]);
        assert_eq!(r.side_lengths(), array![4.0, 1.0]);
        assert_relative_eq!(r.max_side_length(), 4.0);
        assert_relative_eq!(Rectangle::unit_cube(0).max_side_length(), 0.0);
    }

    #[test]
    fn orthants_tile_the_rectangle() {
        let r = sample();
        let orthants: Vec<_> = r.orthants().collect();

        assert_eq!(orthants.len(), 4);
        assert_eq!(
            orthants[0],
            Rectangle::new(vec![
                Interval::new(-2.0, 0.0).unwrap(),
                Interval::new(0.0, 0.5).unwrap(),
            ])
        );
        assert_eq!(
            orthants[1],
            Rectangle::new(vec![
                Interval::new(0.0, 2.0).unwrap(),
                Interval::new(0.0, 0.5).unwrap(),
            ])
        );
        assert_eq!(
            orthants[3],
            Rectangle::new(vec![
                Interval::new(0.0, 2.0).unwrap(),
                Interval::new(0.5, 1.0).unwrap(),
            ])
        );

        let area: f64 = orthants.iter().map(|o| o.side_lengths().product()).sum();
        assert_relative_eq!(area, r.side_lengths().product());

        // Interior points lie in exactly one orthant.
        for point in [array![-1.0, 0.25], array![1.5, 0.75], array![0.3, 0.1]] {
            let hits = orthants.iter().filter(|o| o.contains(&point, 0.0)).count();
            assert_eq!(hits, 1);
        }
    }

    #[test]
    fn vertices_follow_bit_order() {
        let r = sample();
        let vertices: Vec<_> = r.vertices().collect();

        assert_eq!(
            vertices,
            vec![
                array![-2.0, 0.0],
                array![2.0, 0.0],
                array![-2.0, 1.0],
                array![2.0, 1.0],
            ]
        );
        assert_eq!(Rectangle::unit_cube(0).vertices().count(), 1);
    }

    #[test]
    fn doubled_rectangle_keeps_center() {
        let r = sample();
        let d = r.same_center_double_lengths();

        assert_eq!(d.center(), r.center());
        assert_eq!(d.side_lengths(), array![8.0, 2.0]);
        assert!(d.contains(&array![3.9, -0.4], 0.0));
        assert!(!r.contains(&array![3.9, -0.4], 0.0));
    }

    #[cfg(feature = "serde")]
    #[test]
    fn serde_validates_intervals() {
        let r = sample();
        let json = serde_json::to_string(&r).unwrap();
        assert_eq!(json, "[[-2.0,2.0],[0.0,1.0]]");

        let back: Rectangle = serde_json::from_str(&json).unwrap();
        assert_eq!(back, r);

        assert!(serde_json::from_str::<Rectangle>("[[1.0,0.0]]").is_err());
    }
}
