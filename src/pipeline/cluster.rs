use crate::color::Color;

/// Number of refinement rounds. Fixed by design: there is no convergence
/// check and no reseeding of empty clusters, which keeps the cost bounded
/// and the output reproducible for a given sample sequence.
pub const ITERATIONS: usize = 6;

/// One refined cluster: the running mean of its members plus the membership
/// count from the final assignment pass.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Cluster {
    pub centroid: [f32; 3],
    pub count: usize,
}

/// Index of the nearest centroid by squared Euclidean RGB distance.
/// Strict `<` comparison, so the lowest index wins exact ties.
fn nearest(centroids: &[[f32; 3]], p: Color) -> usize {
    let mut best = 0;
    let mut best_dist = f32::INFINITY;
    for (i, c) in centroids.iter().enumerate() {
        let dr = p.r as f32 - c[0];
        let dg = p.g as f32 - c[1];
        let db = p.b as f32 - c[2];
        let dist = dr * dr + dg * dg + db * db;
        if dist < best_dist {
            best_dist = dist;
            best = i;
        }
    }
    best
}

/// Refine up to `k` clusters over the sample sequence.
///
/// Seeds are drawn deterministically at index `(i + 1) * n / (k + 1)` for
/// each cluster `i`, spreading them across the arrival order of the samples.
/// Runs exactly [`ITERATIONS`] assign/recompute rounds, then one extra
/// assignment pass to produce membership counts.
///
/// Returns `min(k, samples.len())` clusters whose counts sum to
/// `samples.len()`.
pub fn refine(samples: &[Color], k: usize) -> Vec<Cluster> {
    if samples.is_empty() || k == 0 {
        return Vec::new();
    }

    let n = samples.len();
    let mut centroids: Vec<[f32; 3]> = (0..k.min(n))
        .map(|i| {
            let p = samples[(i + 1) * n / (k + 1)];
            [p.r as f32, p.g as f32, p.b as f32]
        })
        .collect();

    for _ in 0..ITERATIONS {
        // Accumulate channel sums and member counts per centroid.
        let mut sums = vec![[0.0f64; 3]; centroids.len()];
        let mut members = vec![0usize; centroids.len()];
        for &p in samples {
            let bi = nearest(&centroids, p);
            sums[bi][0] += p.r as f64;
            sums[bi][1] += p.g as f64;
            sums[bi][2] += p.b as f64;
            members[bi] += 1;
        }
        for (i, centroid) in centroids.iter_mut().enumerate() {
            // Empty clusters keep their previous position.
            if members[i] > 0 {
                let m = members[i] as f64;
                *centroid = [
                    (sums[i][0] / m) as f32,
                    (sums[i][1] / m) as f32,
                    (sums[i][2] / m) as f32,
                ];
            }
        }
    }

    // Final pass only counts membership; centroids no longer move.
    let mut counts = vec![0usize; centroids.len()];
    for &p in samples {
        counts[nearest(&centroids, p)] += 1;
    }

    centroids
        .into_iter()
        .zip(counts)
        .map(|(centroid, count)| Cluster { centroid, count })
        .collect()
}
