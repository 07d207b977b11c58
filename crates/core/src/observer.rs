/// Watches a rectangle search and may steer it.
///
/// The root and feasibility searches report each rectangle they examine as an
/// event of type `E`. After every event the search asks its observer for an
/// action of type `A`; `None` lets the search carry on.
///
/// Any `FnMut(&E) -> Option<A>` closure is an observer, and `()` is the
/// observer that never acts.
pub trait Observer<E, A> {
    /// Handles one search event and optionally returns an action.
    fn observe(&mut self, event: &E) -> Option<A>;
}

impl<E, A, F> Observer<E, A> for F
where
    F: FnMut(&E) -> Option<A>,
{
    fn observe(&mut self, event: &E) -> Option<A> {
        self(event)
    }
}

impl<E, A> Observer<E, A> for () {
    fn observe(&mut self, _event: &E) -> Option<A> {
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn drive<O>(mut observer: O, events: &[usize]) -> Option<&'static str>
    where
        O: Observer<usize, &'static str>,
    {
        events.iter().find_map(|event| observer.observe(event))
    }

    #[test]
    fn closures_act_on_events() {
        let mut seen = Vec::new();
        let action = drive(
            |&depth: &usize| {
                seen.push(depth);
                (depth >= 2).then_some("stop")
            },
            &[0, 1, 2, 3],
        );

        assert_eq!(action, Some("stop"));
        assert_eq!(seen, vec![0, 1, 2]);
    }

    #[test]
    fn unit_never_acts() {
        assert_eq!(drive((), &[0, 1, 2]), None);
    }
}
