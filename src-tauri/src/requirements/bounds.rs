/// Inclusive range plus slider step for one numeric requirement.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Bounds {
    pub min: f64,
    pub max: f64,
    pub step: f64,
}

pub const ROOMS: Bounds = Bounds {
    min: 1.0,
    max: 6.0,
    step: 1.0,
};

pub const BATHROOMS: Bounds = Bounds {
    min: 1.0,
    max: 4.0,
    step: 0.5,
};

pub const FLOORS: Bounds = Bounds {
    min: 1.0,
    max: 3.0,
    step: 1.0,
};

pub const BUDGET: Bounds = Bounds {
    min: 200_000.0,
    max: 2_000_000.0,
    step: 50_000.0,
};

pub const SQFT: Bounds = Bounds {
    min: 1_000.0,
    max: 5_000.0,
    step: 100.0,
};

impl Bounds {
    /// Clamps into `[min, max]`, then snaps to the nearest step counted from
    /// `min`. Ties round up. NaN lands on `min`.
    pub fn normalize(&self, value: f64) -> f64 {
        if value.is_nan() {
            return self.min;
        }
        let clamped = value.clamp(self.min, self.max);
        let steps = ((clamped - self.min) / self.step).round();
        (self.min + steps * self.step).min(self.max)
    }

    pub fn normalize_int(&self, value: i64) -> i64 {
        self.normalize(value as f64) as i64
    }
}
