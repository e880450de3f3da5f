use crate::controls::ControlId;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TabStop {
    pub control: ControlId,
    pub position: usize,
}

/// Focus sequence of a view. Positions need not be contiguous; traversal follows them in
/// ascending order and wraps around.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TabOrder {
    stops: Vec<TabStop>,
}

impl TabOrder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Places `control` at `position`, replacing any earlier position it had.
    pub fn assign(&mut self, control: ControlId, position: usize) {
        self.stops.retain(|s| s.control != control);
        let at = self.stops.partition_point(|s| s.position <= position);
        self.stops.insert(at, TabStop { control, position });
    }

    /// Assigns consecutive positions from `start`; returns the position after the last one.
    pub fn append<I>(&mut self, start: usize, controls: I) -> usize
    where
        I: IntoIterator<Item = ControlId>,
    {
        let mut next = start;
        for control in controls {
            self.assign(control, next);
            next += 1;
        }
        next
    }

    pub fn clear(&mut self) {
        self.stops.clear();
    }

    pub fn stops(&self) -> &[TabStop] {
        &self.stops
    }

    pub fn controls(&self) -> impl Iterator<Item = ControlId> + '_ {
        self.stops.iter().map(|s| s.control)
    }

    pub fn position_of(&self, control: ControlId) -> Option<usize> {
        self.stops.iter().find(|s| s.control == control).map(|s| s.position)
    }

    pub fn contains(&self, control: ControlId) -> bool {
        self.position_of(control).is_some()
    }

    pub fn is_strictly_increasing(&self) -> bool {
        self.stops.windows(2).all(|w| w[0].position < w[1].position)
    }

    pub fn next_after(&self, control: ControlId) -> Option<ControlId> {
        let idx = self.stops.iter().position(|s| s.control == control);
        let next = match idx {
            Some(i) => (i + 1) % self.stops.len(),
            None => 0,
        };
        self.stops.get(next).map(|s| s.control)
    }

    pub fn previous_before(&self, control: ControlId) -> Option<ControlId> {
        let idx = self.stops.iter().position(|s| s.control == control);
        let prev = match idx {
            Some(0) | None => self.stops.len().checked_sub(1)?,
            Some(i) => i - 1,
        };
        self.stops.get(prev).map(|s| s.control)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_append_returns_next_position() {
        let mut order = TabOrder::new();
        let next = order.append(4, [ControlId::Field("a"), ControlId::Field("b")]);
        assert_eq!(next, 6);
        assert_eq!(order.position_of(ControlId::Field("b")), Some(5));
    }

    #[test]
    fn test_gaps_are_tolerated_and_sorted() {
        let mut order = TabOrder::new();
        order.assign(ControlId::Notes, 10);
        order.assign(ControlId::ItemName, 0);
        order.assign(ControlId::Folder, 3);

        let controls: Vec<_> = order.controls().collect();
        assert_eq!(controls, vec![ControlId::ItemName, ControlId::Folder, ControlId::Notes]);
        assert!(order.is_strictly_increasing());
    }

    #[test]
    fn test_reassigning_moves_control() {
        let mut order = TabOrder::new();
        order.assign(ControlId::ItemName, 0);
        order.assign(ControlId::ItemName, 7);
        assert_eq!(order.stops().len(), 1);
        assert_eq!(order.position_of(ControlId::ItemName), Some(7));
    }

    #[test]
    fn test_duplicate_positions_are_not_strictly_increasing() {
        let mut order = TabOrder::new();
        order.assign(ControlId::ItemName, 1);
        order.assign(ControlId::Folder, 1);
        assert!(!order.is_strictly_increasing());
    }

    #[test]
    fn test_traversal_wraps() {
        let mut order = TabOrder::new();
        order.append(0, [ControlId::ItemName, ControlId::Folder, ControlId::Favorite]);

        assert_eq!(order.next_after(ControlId::Favorite), Some(ControlId::ItemName));
        assert_eq!(order.previous_before(ControlId::ItemName), Some(ControlId::Favorite));
        assert_eq!(order.next_after(ControlId::ItemName), Some(ControlId::Folder));
        assert_eq!(TabOrder::new().next_after(ControlId::ItemName), None);
        assert_eq!(TabOrder::new().previous_before(ControlId::ItemName), None);
    }
}
