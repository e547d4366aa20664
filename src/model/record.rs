use std::collections::HashMap;

use crate::model::range::{RangeSpec, Status};
use crate::tiers::Tier;

#[derive(Debug, Clone)]
pub struct BiomarkerReading {
    pub name: String,
    pub value: f64,
    pub range: RangeSpec,
    pub status: Status,
    pub tier: Tier,
}

/// Insertion-ordered map of biomarker readings keyed by marker name.
/// A later insert with a duplicate name overwrites the earlier reading
/// in place, keeping its original position.
#[derive(Debug, Clone, Default)]
pub struct BiomarkerMap {
    readings: Vec<BiomarkerReading>,
    index: HashMap<String, usize>,
}

impl BiomarkerMap {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, reading: BiomarkerReading) {
        if let Some(&pos) = self.index.get(reading.name.as_str()) {
            self.readings[pos] = reading;
            return;
        }
        self.index.insert(reading.name.clone(), self.readings.len());
        self.readings.push(reading);
    }

    pub fn get(&self, name: &str) -> Option<&BiomarkerReading> {
        self.index.get(name).map(|&pos| &self.readings[pos])
    }

    pub fn iter(&self) -> impl Iterator<Item = &BiomarkerReading> {
        self.readings.iter()
    }

    pub fn iter_mut(&mut self) -> impl Iterator<Item = &mut BiomarkerReading> {
        self.readings.iter_mut()
    }

    pub fn len(&self) -> usize {
        self.readings.len()
    }
}

#[derive(Debug, Clone)]
pub struct SampleRecord {
    pub sample_id: String,
    pub patient_code: Option<String>,
    pub name: Option<String>,
    pub age: Option<u32>,
    pub gender: Option<String>,
    pub biomarkers: BiomarkerMap,
    pub risk_score: u32,
}

impl SampleRecord {
    pub fn new(sample_id: String) -> Self {
        Self {
            sample_id,
            patient_code: None,
            name: None,
            age: None,
            gender: None,
            biomarkers: BiomarkerMap::new(),
            risk_score: 0,
        }
    }

    pub fn identifier(&self) -> &str {
        self.patient_code.as_deref().unwrap_or(&self.sample_id)
    }
}
