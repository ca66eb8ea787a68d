/// Price band used to pick catalogue buckets and template granularity.
///
/// Bands are half-open and upper-exclusive, so an amount sitting exactly on
/// a boundary belongs to the higher band.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum BudgetTier {
    /// `[0, 100)`
    VeryLow,
    /// `[100, 500)`
    Low,
    /// `[500, 5000)`
    Medium,
    /// `[5000, ∞)`
    High,
}

const LOW_FLOOR: f64 = 100.0;
const MEDIUM_FLOOR: f64 = 500.0;
const HIGH_FLOOR: f64 = 5000.0;

impl BudgetTier {
    pub const ALL: [BudgetTier; 4] = [
        BudgetTier::VeryLow,
        BudgetTier::Low,
        BudgetTier::Medium,
        BudgetTier::High,
    ];

    /// Classifies a non-negative amount.
    pub fn classify(amount: f64) -> Self {
        if amount < LOW_FLOOR {
            BudgetTier::VeryLow
        } else if amount < MEDIUM_FLOOR {
            BudgetTier::Low
        } else if amount < HIGH_FLOOR {
            BudgetTier::Medium
        } else {
            BudgetTier::High
        }
    }

    /// Inclusive lower bound and exclusive upper bound (`None` when unbounded).
    pub fn bounds(&self) -> (f64, Option<f64>) {
        match self {
            BudgetTier::VeryLow => (0.0, Some(LOW_FLOOR)),
            BudgetTier::Low => (LOW_FLOOR, Some(MEDIUM_FLOOR)),
            BudgetTier::Medium => (MEDIUM_FLOOR, Some(HIGH_FLOOR)),
            BudgetTier::High => (HIGH_FLOOR, None),
        }
    }

    pub fn contains(&self, amount: f64) -> bool {
        let (floor, ceiling) = self.bounds();
        amount >= floor && ceiling.is_none_or(|c| amount < c)
    }

    pub fn label(&self) -> &'static str {
        match self {
            BudgetTier::VeryLow => "very-low",
            BudgetTier::Low => "low",
            BudgetTier::Medium => "medium",
            BudgetTier::High => "high",
        }
    }
}

impl std::fmt::Display for BudgetTier {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.label())
    }
}

impl std::str::FromStr for BudgetTier {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "very-low" => Ok(BudgetTier::VeryLow),
            "low" => Ok(BudgetTier::Low),
            "medium" => Ok(BudgetTier::Medium),
            "high" => Ok(BudgetTier::High),
            _ => Err(format!("Invalid budget tier: {}", s)),
        }
    }
}
