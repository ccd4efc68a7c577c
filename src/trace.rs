/// A single step taken by a sorting routine.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    /// `first` and `second` were compared. `in_order` is true when no swap was needed.
    Compare { first: usize, second: usize, in_order: bool },
    Swap { first: usize, second: usize },
    Finish,
}

/// Receives the steps of a sort while it runs.
///
/// All hooks default to no-ops, so `()` can be passed when nothing should be recorded.
pub trait Observer {
    fn compare(&mut self, _first: usize, _second: usize, _in_order: bool) {}
    fn swap(&mut self, _first: usize, _second: usize) {}
    fn finish(&mut self) {}
}

impl Observer for () {}

impl Observer for Vec<Action> {
    fn compare(&mut self, first: usize, second: usize, in_order: bool) {
        self.push(Action::Compare { first, second, in_order });
    }

    fn swap(&mut self, first: usize, second: usize) {
        self.push(Action::Swap { first, second });
    }

    fn finish(&mut self) {
        self.push(Action::Finish);
    }
}

/// Applies every recorded swap to `arr`, in order.
pub fn replay<T>(arr: &mut [T], actions: &[Action]) {
    for action in actions {
        if let Action::Swap { first, second } = *action {
            arr.swap(first, second);
        }
    }
}

#[cfg(test)]
pub(crate) fn count_swaps(actions: &[Action]) -> usize {
    actions.iter().filter(|a| matches!(a, Action::Swap { .. })).count()
}

#[cfg(test)]
pub(crate) fn count_comparisons(actions: &[Action]) -> usize {
    actions.iter().filter(|a| matches!(a, Action::Compare { .. })).count()
}
