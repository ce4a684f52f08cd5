//! K-means on synthetic 2D blobs.
//!
//! Points are scattered around random centers (uniform angle, uniform radius
//! up to `SPREAD`), clustered, and printed as `x y label` rows that can be fed
//! to any plotting tool.

use std::f32::consts::TAU;

use lloyd::{Kmeans, Metric};
use rand::prelude::*;

const N_CENTERS: usize = 3;
const POINTS_PER_CENTER: usize = 20;
const SPREAD: f32 = 1.5;

fn blobs(rng: &mut StdRng) -> Vec<Vec<f32>> {
    let mut data = Vec::with_capacity(N_CENTERS * POINTS_PER_CENTER);
    for _ in 0..N_CENTERS {
        let cx = rng.random_range(0.0..20.0f32);
        let cy = rng.random_range(0.0..20.0f32);
        for _ in 0..POINTS_PER_CENTER {
            let theta = TAU * rng.random::<f32>();
            let s = SPREAD * rng.random::<f32>();
            data.push(vec![cx + s * theta.cos(), cy + s * theta.sin()]);
        }
    }
    data
}

fn main() -> lloyd::Result<()> {
    let mut rng = StdRng::seed_from_u64(42);
    let data = blobs(&mut rng);

    for metric in ["euclidean", "manhattan"] {
        let metric: Metric = metric.parse()?;
        let fit = Kmeans::new(N_CENTERS)
            .with_metric(metric)
            .fit_with_rng(&data, &mut rng)?;

        println!("=== K-means (k={N_CENTERS}, metric={metric}) ===");
        println!(
            "status={:?} iterations={} inertia={:.3}",
            fit.status(),
            fit.n_iter(),
            fit.inertia()
        );
        for (k, (c, e)) in fit.centroids().iter().zip(fit.cluster_inertia()).enumerate() {
            println!("  cluster {k}: centroid ({:6.2}, {:6.2}) inertia {:.3}", c[0], c[1], e);
        }
        for (p, label) in data.iter().zip(fit.labels()) {
            println!("{:.3} {:.3} {}", p[0], p[1], label);
        }
        println!();
    }

    Ok(())
}
