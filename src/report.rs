//! JSON report structures for prediction runs.

use serde::Serialize;

use pinpoint_knn::{
    Classification, Estimate, Label, LabeledPoint, Neighbor, PlanePoint, Query, ValuedPoint,
};

/// Report for a `classify` run.
#[derive(Debug, Serialize)]
pub struct ClassifyReport {
    pub seed: Option<u64>,
    pub k: usize,
    pub query: QueryOut,
    pub label: usize,
    /// Votes per label, indexed by label.
    pub votes: [usize; 2],
    /// Winning votes over k, e.g. "2/3".
    pub confidence: String,
    pub dataset: Vec<LabeledPointOut>,
    pub neighbors: Vec<NeighborOut>,
}

/// Report for an `estimate` run.
#[derive(Debug, Serialize)]
pub struct EstimateReport {
    pub seed: Option<u64>,
    pub k: usize,
    pub query: QueryOut,
    pub value: u32,
    pub dataset: Vec<ValuedPointOut>,
    pub neighbors: Vec<NeighborOut>,
}

/// The (clamped) query location.
#[derive(Debug, Serialize)]
pub struct QueryOut {
    pub x: f64,
    pub y: f64,
}

/// A labeled dataset point.
#[derive(Debug, Serialize)]
pub struct LabeledPointOut {
    pub x: f64,
    pub y: f64,
    pub label: usize,
}

/// A valued dataset point.
#[derive(Debug, Serialize)]
pub struct ValuedPointOut {
    pub x: f64,
    pub y: f64,
    pub value: u32,
}

/// A selected neighbor, nearest-first position preserved by `Vec` order.
#[derive(Debug, Serialize)]
pub struct NeighborOut {
    pub index: usize,
    pub distance: f64,
}

fn neighbors_out(neighbors: &[Neighbor]) -> Vec<NeighborOut> {
    neighbors
        .iter()
        .map(|n| NeighborOut {
            index: n.index(),
            distance: n.distance(),
        })
        .collect()
}

/// Builds the JSON report for a classification run.
pub fn classify_report(
    dataset: &[LabeledPoint],
    query: &Query,
    result: &Classification,
    seed: Option<u64>,
) -> ClassifyReport {
    let (votes, k) = result.confidence();
    ClassifyReport {
        seed,
        k,
        query: QueryOut {
            x: query.x(),
            y: query.y(),
        },
        label: result.label().as_index(),
        votes: [
            result.tally().votes_for(Label::A),
            result.tally().votes_for(Label::B),
        ],
        confidence: format!("{votes}/{k}"),
        dataset: dataset
            .iter()
            .map(|p| LabeledPointOut {
                x: p.x(),
                y: p.y(),
                label: p.label().as_index(),
            })
            .collect(),
        neighbors: neighbors_out(result.neighbors()),
    }
}

/// Builds the JSON report for a regression run.
pub fn estimate_report(
    dataset: &[ValuedPoint],
    query: &Query,
    result: &Estimate,
    seed: Option<u64>,
) -> EstimateReport {
    EstimateReport {
        seed,
        k: result.neighbors().len(),
        query: QueryOut {
            x: query.x(),
            y: query.y(),
        },
        value: result.value(),
        dataset: dataset
            .iter()
            .map(|p| ValuedPointOut {
                x: p.x(),
                y: p.y(),
                value: p.value(),
            })
            .collect(),
        neighbors: neighbors_out(result.neighbors()),
    }
}
