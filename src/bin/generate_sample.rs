//! Writes a deterministic demo CSV: a few sensor channels with injected
//! spikes, dropouts (missing cells) and a text/bool column that the
//! dashboard must skip.

/// SplitMix64: tiny, seedable, good enough for demo noise.
struct SplitMix64(u64);

impl SplitMix64 {
    fn next_u64(&mut self) -> u64 {
        self.0 = self.0.wrapping_add(0x9E37_79B9_7F4A_7C15);
        let mut z = self.0;
        z = (z ^ (z >> 30)).wrapping_mul(0xBF58_476D_1CE4_E5B9);
        z = (z ^ (z >> 27)).wrapping_mul(0x94D0_49BB_1331_11EB);
        z ^ (z >> 31)
    }

    /// Uniform in `[0, 1)`.
    fn unit(&mut self) -> f64 {
        (self.next_u64() >> 11) as f64 * (1.0 / (1u64 << 53) as f64)
    }

    /// Normal sample via the Marsaglia polar method.
    fn normal(&mut self, mean: f64, sd: f64) -> f64 {
        loop {
            let u = 2.0 * self.unit() - 1.0;
            let v = 2.0 * self.unit() - 1.0;
            let s = u * u + v * v;
            if s > 0.0 && s < 1.0 {
                return mean + sd * u * (-2.0 * s.ln() / s).sqrt();
            }
        }
    }

    fn chance(&mut self, p: f64) -> bool {
        self.unit() < p
    }
}

/// A reading with an occasional spike (±`spike` around `mean`) or dropout.
fn reading(rng: &mut SplitMix64, mean: f64, sd: f64, spike: f64) -> String {
    if rng.chance(0.02) {
        return String::new();
    }
    let mut value = rng.normal(mean, sd);
    if rng.chance(0.03) {
        value += if rng.chance(0.5) { spike } else { -spike };
    }
    format!("{value:.3}")
}

fn main() {
    let mut rng = SplitMix64(42);
    let output_path = std::env::args()
        .nth(1)
        .unwrap_or_else(|| "sample_data.csv".to_string());

    let sensors = ["north", "south", "east", "west"];
    let n_rows = 500;

    let mut writer = csv::Writer::from_path(&output_path).expect("Failed to create output file");
    writer
        .write_record(["reading_id", "sensor", "temperature", "pressure", "humidity", "calibrated"])
        .expect("Failed to write header");

    for id in 0..n_rows {
        let sensor = sensors[id % sensors.len()];
        let record = [
            id.to_string(),
            sensor.to_string(),
            reading(&mut rng, 21.0, 1.5, 15.0),
            reading(&mut rng, 1013.0, 4.0, 60.0),
            reading(&mut rng, 45.0, 6.0, 40.0),
            rng.chance(0.9).to_string(),
        ];
        writer.write_record(&record).expect("Failed to write row");
    }
    writer.flush().expect("Failed to flush output");

    println!("Wrote {n_rows} rows to {output_path}");
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn same_seed_gives_same_stream() {
        let mut a = SplitMix64(7);
        let mut b = SplitMix64(7);
        for _ in 0..100 {
            assert_eq!(a.next_u64(), b.next_u64());
        }
    }

    #[test]
    fn unit_stays_in_half_open_range() {
        let mut rng = SplitMix64(42);
        assert!((0..10_000).map(|_| rng.unit()).all(|u| (0.0..1.0).contains(&u)));
    }

    #[test]
    fn readings_are_numeric_or_blank() {
        let mut rng = SplitMix64(1);
        for _ in 0..1_000 {
            let cell = reading(&mut rng, 21.0, 1.5, 15.0);
            assert!(cell.is_empty() || cell.parse::<f64>().is_ok(), "cell {cell:?}");
        }
    }
}
