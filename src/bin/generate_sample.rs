//! Writes a synthetic `Usa_cars_datasets.csv` for trying the dashboard
//! without the real dataset.

/// Minimal deterministic PRNG (xoshiro256**)
struct SimpleRng {
    state: [u64; 4],
}

impl SimpleRng {
    fn new(seed: u64) -> Self {
        let mut s = [0u64; 4];
        let mut x = seed;
        for slot in &mut s {
            x = x.wrapping_mul(6364136223846793005).wrapping_add(1);
            *slot = x;
        }
        SimpleRng { state: s }
    }

    fn next_u64(&mut self) -> u64 {
        let result = (self.state[1].wrapping_mul(5))
            .rotate_left(7)
            .wrapping_mul(9);
        let t = self.state[1] << 17;
        self.state[2] ^= self.state[0];
        self.state[3] ^= self.state[1];
        self.state[1] ^= self.state[2];
        self.state[0] ^= self.state[3];
        self.state[2] ^= t;
        self.state[3] = self.state[3].rotate_left(45);
        result
    }

    fn next_f64(&mut self) -> f64 {
        (self.next_u64() >> 11) as f64 / (1u64 << 53) as f64
    }

    /// Box-Muller transform for normal distribution
    fn gauss(&mut self, mean: f64, std_dev: f64) -> f64 {
        let u1 = self.next_f64().max(1e-15);
        let u2 = self.next_f64();
        let z = (-2.0 * u1.ln()).sqrt() * (2.0 * std::f64::consts::PI * u2).cos();
        mean + std_dev * z
    }

    /// Pick from `(item, weight)` pairs.
    fn weighted<'a, T>(&mut self, items: &'a [(T, f64)]) -> &'a T {
        let total: f64 = items.iter().map(|(_, w)| w).sum();
        let mut target = self.next_f64() * total;
        for (item, w) in items {
            if target < *w {
                return item;
            }
            target -= w;
        }
        &items[items.len() - 1].0
    }
}

/// Brand, typical model, and a price multiplier.
const BRANDS: &[((&str, &str, f64), f64)] = &[
    (("ford", "f-150", 1.0), 40.0),
    (("dodge", "caravan", 0.9), 17.0),
    (("nissan", "altima", 0.8), 12.0),
    (("chevrolet", "silverado", 1.0), 12.0),
    (("gmc", "sierra", 1.3), 2.0),
    (("jeep", "cherokee", 1.0), 1.0),
    (("bmw", "x3", 1.6), 1.0),
    (("hyundai", "elantra", 0.7), 1.0),
    (("kia", "soul", 0.6), 1.0),
    (("buick", "encore", 0.9), 1.0),
    (("infiniti", "qx60", 1.4), 0.5),
    (("mercedes-benz", "gle", 2.2), 0.4),
    (("harley-davidson", "motorcycle", 2.5), 0.2),
    (("lexus", "rx", 1.8), 0.1),
];

const COLORS: &[(&str, f64)] = &[
    ("white", 28.0),
    ("black", 21.0),
    ("gray", 16.0),
    ("silver", 12.0),
    ("red", 8.0),
    ("blue", 6.0),
    ("no_color", 2.0),
    ("green", 1.0),
    ("orange", 0.8),
    ("gold", 0.6),
    ("charcoal", 0.5),
    ("brown", 0.4),
    ("yellow", 0.3),
];

const STATES: &[(&str, f64)] = &[
    ("pennsylvania", 12.0),
    ("florida", 10.0),
    ("texas", 9.0),
    ("california", 8.0),
    ("michigan", 7.0),
    ("north carolina", 6.0),
    ("illinois", 5.0),
    ("new york", 5.0),
    ("virginia", 4.0),
    ("georgia", 4.0),
    ("wisconsin", 3.0),
    ("ohio", 3.0),
    ("tennessee", 2.0),
    ("new jersey", 2.0),
];

const TITLE_STATUS: &[(&str, f64)] = &[("clean vehicle", 93.0), ("salvage insurance", 7.0)];

const CONDITIONS: &[(&str, f64)] = &[
    ("2 days left", 30.0),
    ("10 days left", 20.0),
    ("22 hours left", 20.0),
    ("listing expired", 10.0),
    ("6 hours left", 10.0),
    ("17 days left", 10.0),
];

const N_LISTINGS: usize = 2500;

fn main() {
    let mut rng = SimpleRng::new(42);

    let output_path = "Usa_cars_datasets.csv";
    let mut writer = csv::Writer::from_path(output_path).expect("Failed to create output file");

    writer
        .write_record([
            "", "price", "brand", "model", "year", "title_status", "mileage", "color", "vin",
            "lot", "state", "country", "condition",
        ])
        .expect("Failed to write header");

    for row in 0..N_LISTINGS {
        let (brand, model, multiplier) = *rng.weighted(BRANDS);

        // Skewed toward recent model years, with a thin tail back to 1973.
        let age = rng.gauss(0.0, 4.0).abs().min(47.0).floor() as i64;
        let year = 2020 - age;

        let base = 32_000.0 * multiplier * 0.88f64.powi(age as i32);
        let price = (base + rng.gauss(0.0, base * 0.25)).max(0.0).round() as i64;
        let mileage = (age as f64 * 12_000.0 + rng.gauss(0.0, 8_000.0)).max(0.0).round() as i64;

        let vin: String = (0..17)
            .map(|_| {
                const VIN_CHARS: &[u8] = b"ABCDEFGHJKLMNPRSTUVWXYZ0123456789";
                VIN_CHARS[(rng.next_u64() % VIN_CHARS.len() as u64) as usize] as char
            })
            .collect();
        let lot = 159_000_000 + rng.next_u64() % 9_000_000;

        let record = [
            row.to_string(),
            price.to_string(),
            brand.to_string(),
            model.to_string(),
            year.to_string(),
            rng.weighted(TITLE_STATUS).to_string(),
            mileage.to_string(),
            rng.weighted(COLORS).to_string(),
            vin.to_lowercase(),
            lot.to_string(),
            rng.weighted(STATES).to_string(),
            " usa".to_string(),
            rng.weighted(CONDITIONS).to_string(),
        ];
        writer.write_record(&record).expect("Failed to write listing");
    }

    writer.flush().expect("Failed to flush output");

    println!("Wrote {N_LISTINGS} listings to {output_path}");
}
