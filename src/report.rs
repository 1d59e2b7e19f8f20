use crate::stats::{Interval, Normal};
use std::fmt::Display;

const SEPARATOR_LEN: usize = 45;

/// The console summary of a single interval computation.
pub struct Report<'a> {
    pub title: &'a str,
    pub unit: &'a str,
    pub normal: Normal,
    pub interval: Interval,
    pub probability: f64,
}

impl<'a> Report<'a> {
    pub fn new(title: &'a str, unit: &'a str, normal: Normal, interval: Interval) -> Self {
        let probability = normal.probability(&interval);
        Self {
            title,
            unit,
            normal,
            interval,
            probability,
        }
    }

    pub fn percentage(&self) -> f64 {
        self.probability * 100.0
    }
}

impl<'a> Display for Report<'a> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let sep = "-".repeat(SEPARATOR_LEN);
        let (a, b) = (self.interval.lower(), self.interval.upper());
        let u = self.unit;
        writeln!(f, "--- {} ANALYSIS ---", self.title.to_uppercase())?;
        writeln!(f, "Normal distribution parameters:")?;
        writeln!(f, "  - Mean (μ): {:?}{}", self.normal.mean(), u)?;
        writeln!(f, "  - Standard deviation (σ): {:?}{}", self.normal.std_dev(), u)?;
        writeln!(f, "{}", sep)?;
        writeln!(f, "Probability for the interval [{:?}{}, {:?}{}]:", a, u, b, u)?;
        writeln!(f, "  - P({:?} <= X <= {:?}) = {:.4}", a, b, self.probability)?;
        writeln!(f, "  - Probability: {:.2}%", self.percentage())?;
        writeln!(f, "{}", sep)?;
        writeln!(f, "Conclusion: the probability that the value lies")?;
        let between = if u.is_empty() {
            format!("between {:?} and {:?}", a, b)
        } else {
            format!("between {:?} and {:?} {}", a, b, u)
        };
        writeln!(
            f,
            "{} is approximately {:.2}%.",
            between,
            self.percentage()
        )
    }
}
