use std::{fmt, sync::Arc};

/// An immutable, shared set of indexed variables.
///
/// Every polynomial, exponent vector, and point is defined relative to one
/// space. Cloning a `VariableSpace` clones a handle, not the variables, and two
/// handles are equal only when they refer to the same space: structurally
/// identical spaces created separately are distinct.
///
/// Variables are addressed by 0-based index and named `x1`, `x2`, ... so that
/// displayed polynomials use the conventional 1-based numbering.
#[derive(Clone)]
pub struct VariableSpace {
    inner: Arc<Inner>,
}

struct Inner {
    names: Vec<String>,
}

impl VariableSpace {
    /// Creates a space of `dimension` variables with generated names.
    pub fn new(dimension: usize) -> Self {
        let names = (1..=dimension).map(|i| format!("x{i}")).collect();
        Self::from_names(names)
    }

    /// Creates a space with the given variable names.
    pub fn from_names(names: Vec<String>) -> Self {
        Self {
            inner: Arc::new(Inner { names }),
        }
    }

    /// Returns the number of variables.
    pub fn dimension(&self) -> usize {
        self.inner.names.len()
    }

    /// Returns the name of the variable at `index`.
    ///
    /// # Panics
    ///
    /// Panics if `index` is outside the space.
    pub fn name(&self, index: usize) -> &str {
        &self.inner.names[index]
    }

    /// Returns true if both handles refer to the same space.
    pub fn same_as(&self, other: &VariableSpace) -> bool {
        Arc::ptr_eq(&self.inner, &other.inner)
    }
}

impl PartialEq for VariableSpace {
    fn eq(&self, other: &Self) -> bool {
        self.same_as(other)
    }
}

impl Eq for VariableSpace {}

impl fmt::Debug for VariableSpace {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("VariableSpace")
            .field("names", &self.inner.names)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn generates_one_based_names() {
        let space = VariableSpace::new(3);
        assert_eq!(space.dimension(), 3);
        assert_eq!(space.name(0), "x1");
        assert_eq!(space.name(2), "x3");
    }

    #[test]
    fn equality_is_identity() {
        let a = VariableSpace::new(2);
        let b = VariableSpace::new(2);
        let a_again = a.clone();

        assert_eq!(a, a_again);
        assert_ne!(a, b);
    }
}
