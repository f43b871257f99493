//! Reproducible sampling with snapshots.
//!
//! Draws a few samples with each strategy, then rewinds the generator to show
//! that a snapshot plus `distance` is enough to replay a run exactly.

use hiku::pcg::Pcg32;
use hiku::sample::{sample, sample_with, Strategy};
use hiku::{canonical, CartesianProduct, Simplex};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let population: Vec<String> = (0..40).map(|i| format!("card-{i:02}")).collect();

    let mut rng = Pcg32::with_stream(42, 54);
    let snapshot = rng.clone();

    for k in [3usize, 10, 30] {
        let picked = sample(&population, k, &mut rng)?;
        println!("k={k:2} ({:?}): {picked:?}", Strategy::select(population.len(), k));
    }

    let used = snapshot
        .distance(&rng)
        .ok_or("snapshot is on a different stream")?;
    println!();
    println!("draws consumed: {used}");

    rng.backstep(used);
    let again = sample(&population, 3, &mut rng)?;
    println!("replayed k= 3: {again:?}");

    println!();
    for strategy in [Strategy::Rejection, Strategy::PartialShuffle, Strategy::Selection] {
        let mut rng = snapshot.clone();
        let picked = sample_with(strategy, &population, 5, &mut rng)?;
        println!("{strategy:?}: {picked:?}");
    }

    println!();
    println!("u = {:.6}", canonical(&mut rng));
    println!("grid 2x3: {:?}", CartesianProduct::new([2, 3]).collect::<Vec<_>>());
    println!("simplex(3, 2): {:?}", Simplex::new(3, 2).collect::<Vec<_>>());

    Ok(())
}
