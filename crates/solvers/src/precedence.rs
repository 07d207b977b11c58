/// Move-to-front ordering of pruning tests.
///
/// A polynomial that just proved a rectangle empty is likely to prove its
/// neighbours empty too, so it is tried first next time.
#[derive(Debug, Clone)]
pub(crate) struct Precedence {
    order: Vec<usize>,
}

impl Precedence {
    pub(crate) fn new(len: usize) -> Self {
        Self {
            order: (0..len).collect(),
        }
    }

    /// Returns the first index, in precedence order, for which `test` holds,
    /// and moves it to the front.
    pub(crate) fn find(&mut self, mut test: impl FnMut(usize) -> bool) -> Option<usize> {
        let position = self.order.iter().position(|&index| test(index))?;
        let index = self.order[position];
        self.order[..=position].rotate_right(1);
        Some(index)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn successful_test_moves_to_front() {
        let mut precedence = Precedence::new(4);
        let mut tried = Vec::new();

        let found = precedence.find(|i| {
            tried.push(i);
            i == 2
        });
        assert_eq!(found, Some(2));
        assert_eq!(tried, vec![0, 1, 2]);
        assert_eq!(precedence.order, vec![2, 0, 1, 3]);

        assert_eq!(precedence.find(|i| i == 7), None);
        assert_eq!(precedence.order, vec![2, 0, 1, 3]);
    }
}
