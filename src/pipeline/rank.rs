use crate::color::Color;

use super::cluster::Cluster;

/// Order clusters by descending membership and round their centroids to
/// integer RGB. The sort is stable, so clusters with equal counts keep
/// their original index order.
pub fn rank_palette(mut clusters: Vec<Cluster>) -> Vec<Color> {
    clusters.sort_by(|a, b| b.count.cmp(&a.count));
    clusters
        .into_iter()
        .map(|c| {
            Color::new(
                round_channel(c.centroid[0]),
                round_channel(c.centroid[1]),
                round_channel(c.centroid[2]),
            )
        })
        .collect()
}

fn round_channel(v: f32) -> u8 {
    v.round().clamp(0.0, 255.0) as u8
}
