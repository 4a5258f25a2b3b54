//! 2D k-d tree over scattered samples with k-nearest-neighbor queries.
//!
//! The tree is stored implicitly: each subtree is a slice whose middle
//! element is the splitting node, split on x at even depths and y at odd
//! depths. It is bulk-built once by median selection and never modified.

use std::cmp::Ordering;
use std::collections::{BinaryHeap, HashSet};

use contour_common::{ContourError, ContourResult, Sample};

#[derive(Debug, Clone, Copy)]
struct Entry {
    sample: Sample,
    /// Insertion order; breaks distance ties deterministically.
    order: usize,
}

impl Entry {
    fn coord(&self, depth: usize) -> f64 {
        if depth % 2 == 0 {
            self.sample.x
        } else {
            self.sample.y
        }
    }
}

/// Candidate in the bounded max-heap of a k-NN query.
#[derive(Debug, Clone, Copy)]
struct Candidate {
    dist_sq: f64,
    order: usize,
    slot: usize,
}

impl PartialEq for Candidate {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl Eq for Candidate {}

impl PartialOrd for Candidate {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Candidate {
    fn cmp(&self, other: &Self) -> Ordering {
        self.dist_sq
            .total_cmp(&other.dist_sq)
            .then(self.order.cmp(&other.order))
    }
}

/// Read-only index of samples keyed by their `(x, y)` location.
#[derive(Debug, Clone)]
pub struct SpatialIndex {
    entries: Vec<Entry>,
    duplicates_dropped: usize,
    non_finite_dropped: usize,
}

/// Key identifying an exact location; `-0.0` and `0.0` are the same place.
fn location_key(s: &Sample) -> (u64, u64) {
    ((s.x + 0.0).to_bits(), (s.y + 0.0).to_bits())
}

impl SpatialIndex {
    /// Build an index over `samples`.
    ///
    /// A sample at the same location as an earlier one is dropped, as is a
    /// sample with a non-finite coordinate. Fails if nothing is left.
    pub fn build(samples: &[Sample]) -> ContourResult<Self> {
        if samples.is_empty() {
            return Err(ContourError::invalid_input("no samples given"));
        }

        let mut seen = HashSet::with_capacity(samples.len());
        let mut entries = Vec::with_capacity(samples.len());
        let mut duplicates_dropped = 0;
        let mut non_finite_dropped = 0;

        for sample in samples {
            if !(sample.x.is_finite() && sample.y.is_finite()) {
                tracing::warn!(
                    x = sample.x,
                    y = sample.y,
                    "Dropping sample with non-finite coordinates"
                );
                non_finite_dropped += 1;
                continue;
            }
            if !seen.insert(location_key(sample)) {
                tracing::warn!(
                    x = sample.x,
                    y = sample.y,
                    f = sample.f,
                    "Dropping sample at duplicate location"
                );
                duplicates_dropped += 1;
                continue;
            }
            entries.push(Entry {
                sample: *sample,
                order: entries.len(),
            });
        }

        if entries.is_empty() {
            return Err(ContourError::invalid_input(
                "no sample has finite coordinates",
            ));
        }

        build_subtree(&mut entries, 0);

        Ok(Self {
            entries,
            duplicates_dropped,
            non_finite_dropped,
        })
    }

    /// Number of indexed samples.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Samples skipped because an earlier sample has the same location.
    pub fn duplicates_dropped(&self) -> usize {
        self.duplicates_dropped
    }

    /// Samples skipped because a coordinate is NaN or infinite.
    pub fn non_finite_dropped(&self) -> usize {
        self.non_finite_dropped
    }

    /// Up to `k` samples nearest to `(x, y)`, closest first.
    ///
    /// Samples at equal distance come back in insertion order.
    pub fn nearest(&self, x: f64, y: f64, k: usize) -> Vec<Sample> {
        if k == 0 || self.entries.is_empty() {
            return Vec::new();
        }

        let mut heap = BinaryHeap::with_capacity(k.min(self.entries.len()) + 1);
        self.search(0, self.entries.len(), 0, (x, y), k, &mut heap);

        heap.into_sorted_vec()
            .into_iter()
            .map(|c| self.entries[c.slot].sample)
            .collect()
    }

    fn search(
        &self,
        lo: usize,
        hi: usize,
        depth: usize,
        query: (f64, f64),
        k: usize,
        heap: &mut BinaryHeap<Candidate>,
    ) {
        if lo >= hi {
            return;
        }

        let mid = lo + (hi - lo) / 2;
        let node = &self.entries[mid];
        let candidate = Candidate {
            dist_sq: node.sample.distance_sq(query.0, query.1),
            order: node.order,
            slot: mid,
        };
        if heap.len() < k {
            heap.push(candidate);
        } else if heap.peek().is_some_and(|worst| candidate < *worst) {
            heap.pop();
            heap.push(candidate);
        }

        let q = if depth % 2 == 0 { query.0 } else { query.1 };
        let diff = q - node.coord(depth);
        let (near, far) = if diff < 0.0 {
            ((lo, mid), (mid + 1, hi))
        } else {
            ((mid + 1, hi), (lo, mid))
        };

        self.search(near.0, near.1, depth + 1, query, k, heap);

        let must_visit_far = heap.len() < k
            || heap
                .peek()
                .is_some_and(|worst| diff * diff <= worst.dist_sq);
        if must_visit_far {
            self.search(far.0, far.1, depth + 1, query, k, heap);
        }
    }
}

fn build_subtree(entries: &mut [Entry], depth: usize) {
    if entries.len() <= 1 {
        return;
    }

    let mid = entries.len() / 2;
    entries.select_nth_unstable_by(mid, |a, b| {
        a.coord(depth).total_cmp(&b.coord(depth))
    });

    let (left, rest) = entries.split_at_mut(mid);
    build_subtree(left, depth + 1);
    build_subtree(&mut rest[1..], depth + 1);
}

#[cfg(test)]
mod tests {
    use super::*;

    fn grid_samples(n: usize) -> Vec<Sample> {
        (0..n)
            .flat_map(|i| {
                (0..n).map(move |j| Sample::new(i as f64, j as f64, (i * n + j) as f64))
            })
            .collect()
    }

    #[test]
    fn test_empty_rejected() {
        assert!(SpatialIndex::build(&[]).is_err());
    }

    #[test]
    fn test_nearest_single() {
        let index = SpatialIndex::build(&grid_samples(5)).unwrap();
        let hits = index.nearest(2.1, 2.9, 1);
        assert_eq!(hits, vec![Sample::new(2.0, 3.0, 13.0)]);
    }

    #[test]
    fn test_k_larger_than_len() {
        let index = SpatialIndex::build(&grid_samples(2)).unwrap();
        assert_eq!(index.nearest(0.0, 0.0, 10).len(), 4);
        assert!(index.nearest(0.0, 0.0, 0).is_empty());
    }

    #[test]
    fn test_duplicates_dropped() {
        let samples = vec![
            Sample::new(1.0, 1.0, 5.0),
            Sample::new(2.0, 1.0, 6.0),
            Sample::new(1.0, 1.0, 7.0),
            Sample::new(-0.0, 0.0, 1.0),
            Sample::new(0.0, 0.0, 2.0),
        ];
        let index = SpatialIndex::build(&samples).unwrap();
        assert_eq!(index.len(), 3);
        assert_eq!(index.duplicates_dropped(), 2);
        assert_eq!(index.non_finite_dropped(), 0);
        // The first sample at a location wins
        assert_eq!(index.nearest(1.0, 1.0, 1)[0].f, 5.0);
    }

    #[test]
    fn test_non_finite_coordinates_dropped() {
        let samples = vec![
            Sample::new(f64::NAN, 0.0, 1.0),
            Sample::new(0.0, 0.0, 2.0),
            Sample::new(0.0, f64::NEG_INFINITY, 3.0),
        ];
        let index = SpatialIndex::build(&samples).unwrap();
        assert_eq!(index.len(), 1);
        assert_eq!(index.non_finite_dropped(), 2);
        assert_eq!(index.duplicates_dropped(), 0);

        let only_bad = vec![Sample::new(f64::INFINITY, 0.0, 1.0)];
        assert!(SpatialIndex::build(&only_bad).is_err());
    }

    #[test]
    fn test_equal_distance_ties_in_insertion_order() {
        let samples = vec![
            Sample::new(1.0, 0.0, 1.0),
            Sample::new(0.0, 1.0, 2.0),
            Sample::new(-1.0, 0.0, 3.0),
            Sample::new(0.0, -1.0, 4.0),
        ];
        let index = SpatialIndex::build(&samples).unwrap();
        let values: Vec<f64> = index.nearest(0.0, 0.0, 4).iter().map(|s| s.f).collect();
        assert_eq!(values, vec![1.0, 2.0, 3.0, 4.0]);
    }
}
