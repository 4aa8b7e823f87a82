use std::path::Path;

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use serde::Serialize;

/// One property, columns in the order the app expects.
#[derive(Serialize)]
#[serde(rename_all = "UPPERCASE")]
struct HousingRow {
    crim: f64,
    zn: f64,
    indus: f64,
    chas: u8,
    nox: f64,
    rm: f64,
    age: f64,
    dis: f64,
    rad: u32,
    tax: f64,
    ptratio: f64,
    b: f64,
    lstat: f64,
    medv: f64,
}

/// Box-Muller transform for normal distribution
fn gauss(rng: &mut StdRng, mean: f64, std_dev: f64) -> f64 {
    let u1: f64 = rng.gen::<f64>().max(1e-15);
    let u2: f64 = rng.gen();
    let z = (-2.0 * u1.ln()).sqrt() * (2.0 * std::f64::consts::PI * u2).cos();
    mean + std_dev * z
}

fn round_to(v: f64, decimals: i32) -> f64 {
    let f = 10f64.powi(decimals);
    (v * f).round() / f
}

fn generate_row(rng: &mut StdRng) -> HousingRow {
    // Urban-ness drives most attributes so they correlate the way the
    // real table does.
    let urban: f64 = rng.gen();

    let crim = (gauss(rng, -2.5 + 4.5 * urban, 1.2)).exp().min(89.0);
    let zn = if urban < 0.35 && rng.gen_bool(0.6) {
        (rng.gen_range(1..=19) as f64) * 5.0
    } else {
        0.0
    };
    let indus = (2.0 + 20.0 * urban + gauss(rng, 0.0, 2.5)).clamp(0.46, 27.74);
    let chas = u8::from(rng.gen_bool(0.07));
    let nox = (0.40 + 0.35 * urban + gauss(rng, 0.0, 0.04)).clamp(0.385, 0.871);
    let rm = gauss(rng, 6.6 - 0.6 * urban, 0.6).clamp(3.5, 8.8);
    let age = (30.0 + 70.0 * urban + gauss(rng, 0.0, 15.0)).clamp(2.9, 100.0);
    let dis = (9.0 - 7.5 * urban + gauss(rng, 0.0, 1.0)).clamp(1.13, 12.13);
    let rad = if urban > 0.75 { 24 } else { rng.gen_range(1..=8) };
    let tax = (200.0 + 500.0 * urban + gauss(rng, 0.0, 40.0)).clamp(187.0, 711.0);
    let ptratio = (15.0 + 6.0 * urban + gauss(rng, 0.0, 1.0)).clamp(12.6, 22.0);
    let b = (396.9 - (rng.gen::<f64>().powi(8) * 390.0)).max(0.32);
    let lstat = (3.0 + 25.0 * urban + gauss(rng, 0.0, 3.0)).clamp(1.73, 37.97);

    let medv = (22.0 + 8.0 * (rm - 6.2) - 0.45 * (lstat - 12.0) - 0.8 * (ptratio - 18.5)
        - 0.1 * crim
        + 3.0 * chas as f64
        + gauss(rng, 0.0, 2.5))
    .clamp(5.0, 50.0);

    HousingRow {
        crim: round_to(crim, 5),
        zn,
        indus: round_to(indus, 2),
        chas,
        nox: round_to(nox, 3),
        rm: round_to(rm, 3),
        age: round_to(age, 1),
        dis: round_to(dis, 4),
        rad,
        tax: tax.round(),
        ptratio: round_to(ptratio, 1),
        b: round_to(b, 2),
        lstat: round_to(lstat, 2),
        medv: round_to(medv, 1),
    }
}

fn main() {
    let mut rng = StdRng::seed_from_u64(42);
    let n_rows = 506;

    let output_path = Path::new("data/data.csv");
    if let Some(dir) = output_path.parent() {
        std::fs::create_dir_all(dir).expect("Failed to create data directory");
    }

    let mut writer = csv::Writer::from_path(output_path).expect("Failed to create output file");
    for _ in 0..n_rows {
        writer
            .serialize(generate_row(&mut rng))
            .expect("Failed to write row");
    }
    writer.flush().expect("Failed to flush writer");

    println!("Wrote {n_rows} properties to {}", output_path.display());
}
