use rand::{Rng, SeedableRng, rngs::StdRng};
use rand_distr::{Distribution, Normal};

use crate::domain::{
    common::entities::app_errors::CoreError,
    dataset::{
        entities::{Record, Table, TableSchema},
        ports::DatasetRepository,
    },
};

pub const DEFAULT_SAMPLE_SEED: u64 = 42;
pub const DEFAULT_SAMPLE_SIZE: usize = 50;

const COORDINATE_STD_DEV: f64 = 2.0;

pub const MENUS: [(&str, [&str; 5]); 5] = [
    ("Italian", ["Pizza", "Pasta", "Risotto", "Lasagna", "Tiramisu"]),
    ("Japanese", ["Sushi", "Ramen", "Tempura", "Udon", "Miso Soup"]),
    ("Indian", ["Curry", "Biryani", "Dosa", "Samosa", "Naan"]),
    (
        "Mexican",
        ["Tacos", "Enchiladas", "Guacamole", "Quesadilla", "Burrito"],
    ),
    (
        "French",
        ["Croissant", "Ratatouille", "Coq au Vin", "Quiche", "Crêpe"],
    ),
];

/// Synthetic dishes scattered around the origin. Cuisines are assigned
/// round-robin; each dish is drawn from its own cuisine's menu.
#[derive(Debug, Clone, Copy)]
pub struct SampleDishRepository {
    seed: u64,
    size: usize,
}

impl Default for SampleDishRepository {
    fn default() -> Self {
        Self::new(DEFAULT_SAMPLE_SEED, DEFAULT_SAMPLE_SIZE)
    }
}

impl SampleDishRepository {
    pub fn new(seed: u64, size: usize) -> Self {
        Self { seed, size }
    }
}

impl DatasetRepository for SampleDishRepository {
    fn load_table(&self) -> Result<Table, CoreError> {
        let mut rng = StdRng::seed_from_u64(self.seed);
        let normal = Normal::new(0.0, COORDINATE_STD_DEV)
            .map_err(|e| CoreError::DatasetError(format!("Invalid distribution: {}", e)))?;

        let mut axes = [(); 3].map(|_| Vec::with_capacity(self.size));
        for values in axes.iter_mut() {
            values.extend((0..self.size).map(|_| normal.sample(&mut rng)));
        }

        let records = (0..self.size)
            .map(|i| {
                let (cuisine, menu) = MENUS[i % MENUS.len()];
                let dish = menu[rng.gen_range(0..menu.len())];
                Record {
                    coordinates: [axes[0][i], axes[1][i], axes[2][i]],
                    label: dish.to_string(),
                    group: Some(cuisine.to_string()),
                    metric: None,
                }
            })
            .collect();

        tracing::info!(seed = self.seed, size = self.size, "generated sample dishes");

        Table::new(TableSchema::dishes(), records)
    }
}
