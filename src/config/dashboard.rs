//! Dashboard configuration

use serde::Deserialize;

use super::error::ValidationError;
use crate::domain::dashboard::DEFAULT_TIME_RESERVE_COEF;

/// Dashboard warning settings
#[derive(Debug, Clone, Deserialize)]
pub struct DashboardConfig {
    /// Multiplier widening the soft warning window ahead of the hard one
    #[serde(default = "default_time_reserve_coef")]
    pub time_reserve_coef: f64,
}

impl DashboardConfig {
    pub fn validate(&self) -> Result<(), ValidationError> {
        if !self.time_reserve_coef.is_finite() || self.time_reserve_coef < 1.0 {
            return Err(ValidationError::InvalidTimeReserveCoef(self.time_reserve_coef));
        }
        Ok(())
    }
}

impl Default for DashboardConfig {
    fn default() -> Self {
        Self {
            time_reserve_coef: default_time_reserve_coef(),
        }
    }
}

fn default_time_reserve_coef() -> f64 {
    DEFAULT_TIME_RESERVE_COEF
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_coefficient_is_valid() {
        let config = DashboardConfig::default();
        assert_eq!(config.time_reserve_coef, 1.5);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn coefficient_below_one_is_rejected() {
        let config = DashboardConfig {
            time_reserve_coef: 0.5,
        };
        assert!(config.validate().is_err());
    }

    #[test]
    fn non_finite_coefficient_is_rejected() {
        let config = DashboardConfig {
            time_reserve_coef: f64::NAN,
        };
        assert!(config.validate().is_err());
    }
}
