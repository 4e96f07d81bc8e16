// Graduate admissions: GRE score, GPA and a 1-4 school rank predict admission.
// The records are generated here; GRE and GPA are standardized and the rank is
// split into four indicator columns, giving six features per applicant.
//   cargo run --example admissions
use std::error::Error;

use ferrite_ff::data::{one_hot, split_at_fraction, standardize_columns};
use ferrite_ff::{evaluate, logging, train, TrainConfig};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

struct Applicant {
    gre: f64,
    gpa: f64,
    rank: f64,
    admit: f64,
}

fn applicants(n: usize, seed: u64) -> Vec<Applicant> {
    let mut rng = StdRng::seed_from_u64(seed);
    (0..n)
        .map(|_| {
            let gre = (rng.gen_range(220.0..800.0_f64) / 20.0).round() * 20.0;
            let gpa = rng.gen_range(2.2..4.0_f64);
            let rank = rng.gen_range(1..=4) as f64;
            // better scores help, a lower-ranked school hurts
            let score = 0.004 * (gre - 580.0) + 1.5 * (gpa - 3.4) - 0.6 * (rank - 2.5)
                + rng.gen_range(-0.8..0.8);
            Applicant {
                gre,
                gpa,
                rank,
                admit: if score > 0.0 { 1.0 } else { 0.0 },
            }
        })
        .collect()
}

fn main() -> Result<(), Box<dyn Error>> {
    logging::install_logger()?;
    let config = TrainConfig::default();
    let records = applicants(400, config.seed);

    let mut features: Vec<Vec<f64>> = records.iter().map(|a| vec![a.gre, a.gpa]).collect();
    standardize_columns(&mut features)?;
    let ranks: Vec<f64> = records.iter().map(|a| a.rank).collect();
    for (row, indicators) in features.iter_mut().zip(one_hot(&ranks)?) {
        row.extend(indicators);
    }
    let targets: Vec<f64> = records.iter().map(|a| a.admit).collect();

    let (x_train, x_test) = split_at_fraction(&features, 0.9)?;
    let (y_train, y_test) = split_at_fraction(&targets, 0.9)?;

    let network = train(x_train, y_train, config)?;
    let accuracy = evaluate(x_test, y_test, &network)?;
    println!("Prediction accuracy: {accuracy:.3}");
    Ok(())
}
