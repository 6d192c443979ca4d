//! An ordered sequence of stops identified by a bus/line id.

/// A bus route: an ordered stop sequence plus a circularity flag.
///
/// Circular routes form one loop; the last stored stop connects back to
/// the first. Linear routes are out-and-back: traversed forward, then in
/// reverse.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Route {
    /// Stop names in visiting order. Duplicates across positions are
    /// allowed (a stop visited twice mid-route appears twice).
    pub stops: Vec<String>,

    /// Whether the last stop connects back to the first.
    pub is_circular: bool,
}

impl Route {
    /// Build a route in canonical form.
    ///
    /// A circular input whose first and last stop are identical drops the
    /// trailing duplicate: the flag alone denotes the closing leg, so the
    /// stored sequence keeps each physical stop once per circuit.
    pub fn new(mut stops: Vec<String>, is_circular: bool) -> Self {
        if is_circular && stops.len() > 1 && stops.first() == stops.last() {
            stops.pop();
        }
        Self { stops, is_circular }
    }

    /// Number of stored stops (post-normalization sequence length).
    pub fn len(&self) -> usize {
        self.stops.len()
    }

    /// Whether the route has no stops at all.
    pub fn is_empty(&self) -> bool {
        self.stops.is_empty()
    }
}
