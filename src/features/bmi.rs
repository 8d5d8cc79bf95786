//! Body-mass index calculator.

use serde::Serialize;

use crate::error::DeskError;

/// Weight band for a BMI value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum BmiCategory {
    Underweight,
    Normal,
    Overweight,
    Obese,
}

impl BmiCategory {
    /// Classify a BMI value. Bands are contiguous: `< 18.5`, `< 25`, `< 30`.
    #[must_use]
    pub fn from_bmi(bmi: f64) -> Self {
        if bmi < 18.5 {
            Self::Underweight
        } else if bmi < 25.0 {
            Self::Normal
        } else if bmi < 30.0 {
            Self::Overweight
        } else {
            Self::Obese
        }
    }

    #[must_use]
    pub const fn display_name(self) -> &'static str {
        match self {
            Self::Underweight => "Underweight",
            Self::Normal => "Normal weight",
            Self::Overweight => "Overweight",
            Self::Obese => "Obese",
        }
    }

    /// Advice shown under the result.
    #[must_use]
    pub const fn feedback(self) -> &'static str {
        match self {
            Self::Underweight => {
                "You are underweight. Consider consulting with a healthcare provider."
            }
            Self::Normal => "You have a normal weight. Keep up the good work!",
            Self::Overweight => {
                "You are overweight. Consider a balanced diet and regular exercise."
            }
            Self::Obese => {
                "You are in the obese range. It is advisable to consult with a healthcare provider."
            }
        }
    }
}

impl std::fmt::Display for BmiCategory {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.display_name())
    }
}

/// A computed BMI.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct BmiReading {
    pub weight_kg: f64,
    pub height_cm: f64,
    pub bmi: f64,
    pub category: BmiCategory,
}

impl BmiReading {
    /// Compute BMI from weight in kilograms and height in centimetres.
    ///
    /// # Errors
    ///
    /// Returns `DeskError::InvalidInput` if either value is not a positive
    /// finite number.
    pub fn calculate(weight_kg: f64, height_cm: f64) -> Result<Self, DeskError> {
        if !weight_kg.is_finite() || weight_kg <= 0.0 {
            return Err(DeskError::InvalidInput(
                "Please enter a valid weight.".to_string(),
            ));
        }
        if !height_cm.is_finite() || height_cm <= 0.0 {
            return Err(DeskError::InvalidInput(
                "Please enter a valid height.".to_string(),
            ));
        }

        let height_m = height_cm / 100.0;
        let bmi = weight_kg / (height_m * height_m);

        Ok(Self {
            weight_kg,
            height_cm,
            bmi,
            category: BmiCategory::from_bmi(bmi),
        })
    }

    /// Parse free-text inputs, as typed into a form, then calculate.
    ///
    /// # Errors
    ///
    /// Returns `DeskError::InvalidInput` for blank or non-numeric input.
    pub fn from_inputs(weight: &str, height: &str) -> Result<Self, DeskError> {
        if weight.trim().is_empty() || height.trim().is_empty() {
            return Err(DeskError::InvalidInput(
                "Please enter both weight and height.".to_string(),
            ));
        }
        let weight_kg = weight.trim().parse::<f64>().map_err(|_| {
            DeskError::InvalidInput("Please enter a valid weight.".to_string())
        })?;
        let height_cm = height.trim().parse::<f64>().map_err(|_| {
            DeskError::InvalidInput("Please enter a valid height.".to_string())
        })?;
        Self::calculate(weight_kg, height_cm)
    }

    /// BMI rounded to two decimals, for display.
    #[must_use]
    pub fn formatted(&self) -> String {
        format!("{:.2}", self.bmi)
    }
}
