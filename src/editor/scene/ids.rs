//! Session id allocation for text elements.

use super::element::ElementId;

/// Hands out element ids from a counter that only moves forward.
///
/// The counter is owned by the scene store, not by scene snapshots, so
/// restoring an older scene through undo never rewinds it.
#[derive(Debug, Default)]
pub struct IdAllocator {
    issued: u32,
}

impl IdAllocator {
    pub fn allocate(&mut self) -> ElementId {
        self.issued += 1;
        ElementId(self.issued)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_first_id_is_one() {
        let mut ids = IdAllocator::default();
        assert_eq!(ids.allocate(), ElementId(1));
    }

    #[test]
    fn test_ids_strictly_increase() {
        let mut ids = IdAllocator::default();
        let mut previous = ids.allocate();
        for _ in 0..20 {
            let next = ids.allocate();
            assert!(next > previous);
            previous = next;
        }
        assert_eq!(previous, ElementId(21));
    }
}
