#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RiskBucket {
    Low,
    Medium,
    High,
}

impl RiskBucket {
    pub fn label(&self) -> &'static str {
        match self {
            RiskBucket::Low => "low",
            RiskBucket::Medium => "medium",
            RiskBucket::High => "high",
        }
    }
}

#[derive(Debug, Clone)]
pub struct RiskThresholds {
    pub tier1_weight: u32,
    pub tier2_weight: u32,
    pub medium_cutoff: u32,
    pub high_cutoff: u32,
}

impl RiskThresholds {
    pub fn default_v1() -> Self {
        Self {
            tier1_weight: 10,
            tier2_weight: 1,
            medium_cutoff: 20,
            high_cutoff: 50,
        }
    }

    pub fn bucket(&self, score: u32) -> RiskBucket {
        if score > self.high_cutoff {
            RiskBucket::High
        } else if score > self.medium_cutoff {
            RiskBucket::Medium
        } else {
            RiskBucket::Low
        }
    }
}
