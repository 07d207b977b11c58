use polyroot_core::Observer;
use tracing::{debug, trace};

use crate::traits::{EventKind, HasKind, HasRectangle};

/// Reports every search event through `tracing`.
///
/// Found points are logged at `debug`, everything else at `trace`.
#[derive(Debug, Clone, Copy, Default)]
pub struct TracingObserver;

impl TracingObserver {
    pub fn new() -> Self {
        Self
    }
}

impl<E, A> Observer<E, A> for TracingObserver
where
    E: HasKind + HasRectangle,
{
    fn observe(&mut self, event: &E) -> Option<A> {
        let kind = event.kind();
        let depth = event.depth();
        let rectangle = event.rectangle();
        match kind {
            EventKind::Found => debug!(depth, %rectangle, "found point"),
            _ => trace!(?kind, depth, %rectangle, "search event"),
        }
        None
    }
}
