#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScoreTier {
    Excellent,
    Good,
    Fair,
    Poor,
}

impl ScoreTier {
    pub fn classify(score: f64) -> ScoreTier {
        if score >= 80.0 {
            return ScoreTier::Excellent;
        }
        if score >= 60.0 {
            return ScoreTier::Good;
        }
        if score >= 40.0 {
            return ScoreTier::Fair;
        }
        ScoreTier::Poor
    }

    pub fn label(self) -> &'static str {
        match self {
            ScoreTier::Excellent => "excellent",
            ScoreTier::Good => "good",
            ScoreTier::Fair => "fair",
            ScoreTier::Poor => "poor",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tier_boundaries() {
        assert_eq!(ScoreTier::classify(100.0), ScoreTier::Excellent);
        assert_eq!(ScoreTier::classify(80.0), ScoreTier::Excellent);
        assert_eq!(ScoreTier::classify(79.9), ScoreTier::Good);
        assert_eq!(ScoreTier::classify(60.0), ScoreTier::Good);
        assert_eq!(ScoreTier::classify(59.9), ScoreTier::Fair);
        assert_eq!(ScoreTier::classify(40.0), ScoreTier::Fair);
        assert_eq!(ScoreTier::classify(39.9), ScoreTier::Poor);
        assert_eq!(ScoreTier::classify(0.0), ScoreTier::Poor);
    }

    #[test]
    fn test_tier_is_monotonic() {
        let mut last = ScoreTier::classify(0.0);
        for step in 0..=1000 {
            let tier = ScoreTier::classify(step as f64 / 10.0);
            let rank = |t: ScoreTier| match t {
                ScoreTier::Poor => 0,
                ScoreTier::Fair => 1,
                ScoreTier::Good => 2,
                ScoreTier::Excellent => 3,
            };
            assert!(rank(tier) >= rank(last));
            last = tier;
        }
    }
}
