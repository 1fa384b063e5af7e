//! Trajectory storage for a single body
//!
//! Positions are appended once per rendered frame. How much of the past is kept is
//! decided by a [`RetentionPolicy`]; the default keeps everything, so memory grows
//! for the whole process lifetime unless a cap is configured

use std::collections::VecDeque;

use serde::Deserialize;

use crate::simulation::error::ConfigError;
use crate::simulation::states::NVec3;

/// How a [`PositionHistory`] decides what to keep
#[derive(Deserialize, Debug, Clone, Copy, PartialEq, Default)]
#[serde(tag = "policy", rename_all = "lowercase")]
pub enum RetentionPolicy {
    /// Keep every appended position
    #[default]
    Unbounded,
    /// Keep the most recent `capacity` positions, dropping the oldest
    Ring { capacity: usize },
    /// Keep one of every `every` appended positions
    Decimate { every: usize },
}

impl RetentionPolicy {
    pub fn validate(&self) -> Result<(), ConfigError> {
        match *self {
            RetentionPolicy::Ring { capacity: 0 } | RetentionPolicy::Decimate { every: 0 } => {
                Err(ConfigError::InvalidHistoryCapacity)
            }
            _ => Ok(()),
        }
    }
}

#[derive(Debug, Clone)]
pub struct PositionHistory {
    points: VecDeque<NVec3>,
    policy: RetentionPolicy,
    offered: u64, // appends seen so far, kept or not
}

impl PositionHistory {
    /// Start a history holding only `initial`
    pub fn new(initial: NVec3, policy: RetentionPolicy) -> Result<Self, ConfigError> {
        policy.validate()?;
        let mut points = VecDeque::new();
        points.push_back(initial);
        Ok(Self {
            points,
            policy,
            offered: 0,
        })
    }

    pub fn push(&mut self, p: NVec3) {
        self.offered += 1;
        match self.policy {
            RetentionPolicy::Unbounded => self.points.push_back(p),
            RetentionPolicy::Ring { capacity } => {
                if self.points.len() == capacity {
                    self.points.pop_front();
                }
                self.points.push_back(p);
            }
            RetentionPolicy::Decimate { every } => {
                if self.offered % every as u64 == 0 {
                    self.points.push_back(p);
                }
            }
        }
    }

    pub fn len(&self) -> usize {
        self.points.len()
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    pub fn policy(&self) -> RetentionPolicy {
        self.policy
    }

    /// Oldest first
    pub fn iter(&self) -> impl Iterator<Item = &NVec3> + '_ {
        self.points.iter()
    }

    pub fn last(&self) -> Option<&NVec3> {
        self.points.back()
    }
}
