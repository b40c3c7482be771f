//! Output types for prediction queries.

use crate::point::Label;

/// A dataset point selected as one of the k nearest neighbors.
///
/// Carries the point's index in the original dataset rather than a copy of
/// the point, so callers can draw connecting lines (or look up labels and
/// values) without duplicating point data.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Neighbor {
    index: usize,
    distance: f64,
}

impl Neighbor {
    pub(crate) fn new(index: usize, distance: f64) -> Self {
        Self { index, distance }
    }

    /// Index of this neighbor in the original dataset.
    pub fn index(&self) -> usize {
        self.index
    }

    /// Euclidean distance from the query point.
    pub fn distance(&self) -> f64 {
        self.distance
    }
}

/// Vote counts per label among the k nearest neighbors.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct VoteTally {
    counts: [usize; 2],
}

impl VoteTally {
    /// Tallies votes from an iterator of neighbor labels.
    pub(crate) fn from_labels(labels: impl Iterator<Item = Label>) -> Self {
        let mut counts = [0usize; 2];
        for label in labels {
            counts[label.as_index()] += 1;
        }
        Self { counts }
    }

    /// Returns the number of votes for `label`.
    pub fn votes_for(&self, label: Label) -> usize {
        self.counts[label.as_index()]
    }

    /// Returns the total number of votes (equals k).
    pub fn total(&self) -> usize {
        self.counts[0] + self.counts[1]
    }

    /// Returns the label with strictly more votes, or `None` on a tie.
    pub fn leader(&self) -> Option<Label> {
        match self.counts[0].cmp(&self.counts[1]) {
            std::cmp::Ordering::Greater => Some(Label::A),
            std::cmp::Ordering::Less => Some(Label::B),
            std::cmp::Ordering::Equal => None,
        }
    }
}

/// Result of a classification query.
#[derive(Debug, Clone, PartialEq)]
pub struct Classification {
    label: Label,
    tally: VoteTally,
    neighbors: Vec<Neighbor>,
}

impl Classification {
    pub(crate) fn new(label: Label, tally: VoteTally, neighbors: Vec<Neighbor>) -> Self {
        Self {
            label,
            tally,
            neighbors,
        }
    }

    /// Returns the winning class label.
    pub fn label(&self) -> Label {
        self.label
    }

    /// Returns the per-label vote counts.
    pub fn tally(&self) -> VoteTally {
        self.tally
    }

    /// Returns (votes for the winning label, k) — an "N/K" confidence pair.
    pub fn confidence(&self) -> (usize, usize) {
        (self.tally.votes_for(self.label), self.tally.total())
    }

    /// Returns the k nearest neighbors, nearest first.
    pub fn neighbors(&self) -> &[Neighbor] {
        &self.neighbors
    }
}

/// Result of a regression query.
#[derive(Debug, Clone, PartialEq)]
pub struct Estimate {
    value: u32,
    neighbors: Vec<Neighbor>,
}

impl Estimate {
    pub(crate) fn new(value: u32, neighbors: Vec<Neighbor>) -> Self {
        Self { value, neighbors }
    }

    /// Returns the rounded average of the neighbor values.
    pub fn value(&self) -> u32 {
        self.value
    }

    /// Returns the k nearest neighbors, nearest first.
    pub fn neighbors(&self) -> &[Neighbor] {
        &self.neighbors
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn neighbor_accessors() {
        let n = Neighbor::new(3, 0.25);
        assert_eq!(n.index(), 3);
        assert_eq!(n.distance(), 0.25);
    }

    #[test]
    fn tally_counts_and_total() {
        let tally =
            VoteTally::from_labels([Label::A, Label::B, Label::A].into_iter());
        assert_eq!(tally.votes_for(Label::A), 2);
        assert_eq!(tally.votes_for(Label::B), 1);
        assert_eq!(tally.total(), 3);
    }

    #[test]
    fn tally_leader_majority() {
        let tally = VoteTally::from_labels([Label::B, Label::B, Label::A].into_iter());
        assert_eq!(tally.leader(), Some(Label::B));
    }

    #[test]
    fn tally_leader_tie_is_none() {
        let tally = VoteTally::from_labels([Label::A, Label::B].into_iter());
        assert_eq!(tally.leader(), None);
    }

    #[test]
    fn classification_confidence() {
        let tally = VoteTally::from_labels([Label::A, Label::A, Label::B].into_iter());
        let result = Classification::new(
            Label::A,
            tally,
            vec![Neighbor::new(0, 0.1), Neighbor::new(2, 0.2), Neighbor::new(1, 0.3)],
        );
        assert_eq!(result.confidence(), (2, 3));
        assert_eq!(result.neighbors().len(), 3);
        assert_eq!(result.label(), Label::A);
    }

    #[test]
    fn estimate_accessors() {
        let result = Estimate::new(50, vec![Neighbor::new(1, 0.4)]);
        assert_eq!(result.value(), 50);
        assert_eq!(result.neighbors().len(), 1);
    }
}
