//! Configuration types for fiscal tax schedules.
//!
//! This module contains the strongly-typed configuration structures that
//! are deserialized from YAML schedule files. Brackets and rates live in
//! configuration so annual fiscal updates never touch calculation code.

use rust_decimal::Decimal;
use serde::Deserialize;

use crate::error::{EngineError, EngineResult};

/// Metadata about a fiscal schedule.
///
/// Identifies the jurisdiction and fiscal year the bracket and rate
/// tables were taken from.
#[derive(Debug, Clone, Deserialize)]
pub struct ScheduleMetadata {
    /// The jurisdiction code (e.g., "JP").
    pub jurisdiction: String,
    /// The human-readable name of the schedule.
    pub name: String,
    /// The fiscal year the schedule applies to.
    pub fiscal_year: u16,
    /// URL to the official schedule documentation.
    pub source_url: String,
}

/// One row of the progressive income-tax schedule.
///
/// Brackets use the standard marginal-accumulation form:
/// `tax = base_tax + (income - lower_bound) * marginal_rate`.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct TaxBracket {
    /// The lower bound of the bracket (exclusive, except for the first row).
    pub lower_bound: Decimal,
    /// The upper bound of the bracket (inclusive); `None` for the top row.
    pub upper_bound: Option<Decimal>,
    /// Tax accumulated over all lower brackets.
    pub base_tax: Decimal,
    /// The marginal rate applied to income above `lower_bound`.
    pub marginal_rate: Decimal,
}

impl TaxBracket {
    /// Returns true if the given income falls into this bracket.
    ///
    /// An income at or below the first bracket's upper bound selects the
    /// first bracket; this includes negative incomes, whose tax is the
    /// first-row formula applied verbatim.
    pub fn covers(&self, income: Decimal) -> bool {
        match self.upper_bound {
            Some(upper) => income <= upper,
            None => true,
        }
    }

    /// Applies this bracket's formula to the given income.
    pub fn tax_for(&self, income: Decimal) -> Decimal {
        self.base_tax + (income - self.lower_bound) * self.marginal_rate
    }
}

/// Bracket table configuration file structure.
#[derive(Debug, Clone, Deserialize)]
pub struct BracketTableConfig {
    /// Bracket rows, ordered from lowest to highest income.
    pub brackets: Vec<TaxBracket>,
}

/// Social-insurance premium rates, applied as fractions of taxable income.
#[derive(Debug, Clone, Deserialize)]
pub struct InsuranceRates {
    /// Health insurance premium rate (employee share).
    pub health_rate: Decimal,
    /// Employees' pension insurance premium rate (employee share).
    pub pension_rate: Decimal,
    /// Employment insurance premium rate.
    pub employment_rate: Decimal,
    /// Long-term-care insurance premium rate (ages 40-64 only).
    pub care_rate: Decimal,
}

/// Resident tax configuration.
#[derive(Debug, Clone, Deserialize)]
pub struct ResidentTaxConfig {
    /// Flat resident tax rate applied to taxable income.
    pub rate: Decimal,
}

/// Insurance configuration file structure.
#[derive(Debug, Clone, Deserialize)]
pub struct InsuranceConfig {
    /// Premium rates.
    pub insurance: InsuranceRates,
    /// Resident tax section.
    pub resident_tax: ResidentTaxConfig,
}

/// The complete fiscal tax schedule loaded from YAML files.
///
/// This struct aggregates all configuration loaded from a schedule
/// directory and is the only rate source the calculation layer sees.
#[derive(Debug, Clone)]
pub struct TaxSchedule {
    /// Schedule metadata.
    metadata: ScheduleMetadata,
    /// Income-tax brackets, ascending by upper bound.
    brackets: Vec<TaxBracket>,
    /// Social-insurance premium rates.
    insurance: InsuranceRates,
    /// Flat resident tax rate.
    resident_tax_rate: Decimal,
}

impl TaxSchedule {
    /// Creates a new TaxSchedule from its component parts.
    ///
    /// Brackets are sorted ascending, unbounded row last. Returns
    /// [`EngineError::InvalidSchedule`] if the table or rates are
    /// structurally invalid (see [`TaxSchedule::validate`]).
    pub fn new(
        metadata: ScheduleMetadata,
        brackets: Vec<TaxBracket>,
        insurance: InsuranceRates,
        resident_tax_rate: Decimal,
    ) -> EngineResult<Self> {
        let mut sorted_brackets = brackets;
        sorted_brackets.sort_by(|a, b| match (a.upper_bound, b.upper_bound) {
            (Some(x), Some(y)) => x.cmp(&y),
            (Some(_), None) => std::cmp::Ordering::Less,
            (None, Some(_)) => std::cmp::Ordering::Greater,
            (None, None) => std::cmp::Ordering::Equal,
        });
        let schedule = Self {
            metadata,
            brackets: sorted_brackets,
            insurance,
            resident_tax_rate,
        };
        schedule.validate()?;
        Ok(schedule)
    }

    /// Validates the schedule's structural invariants.
    ///
    /// - the bracket table is non-empty
    /// - exactly the last bracket is unbounded
    /// - upper bounds are strictly increasing
    /// - each bracket's lower bound equals the previous upper bound
    /// - all rates are non-negative
    fn validate(&self) -> EngineResult<()> {
        let last_index = match self.brackets.len().checked_sub(1) {
            Some(i) => i,
            None => {
                return Err(EngineError::InvalidSchedule {
                    message: "bracket table is empty".to_string(),
                });
            }
        };

        let mut previous_upper: Option<Decimal> = None;
        for (i, bracket) in self.brackets.iter().enumerate() {
            match bracket.upper_bound {
                None if i != last_index => {
                    return Err(EngineError::InvalidSchedule {
                        message: "unbounded bracket must be the last row".to_string(),
                    });
                }
                Some(upper) if i == last_index => {
                    return Err(EngineError::InvalidSchedule {
                        message: format!(
                            "last bracket must be unbounded, found upper bound {}",
                            upper
                        ),
                    });
                }
                Some(upper) => {
                    if let Some(prev) = previous_upper {
                        if upper <= prev {
                            return Err(EngineError::InvalidSchedule {
                                message: format!(
                                    "bracket upper bounds must be strictly increasing ({} after {})",
                                    upper, prev
                                ),
                            });
                        }
                    }
                    previous_upper = Some(upper);
                }
                None => {}
            }

            let expected_lower = if i == 0 {
                Decimal::ZERO
            } else {
                self.brackets[i - 1].upper_bound.unwrap_or(Decimal::ZERO)
            };
            if bracket.lower_bound != expected_lower {
                return Err(EngineError::InvalidSchedule {
                    message: format!(
                        "bracket lower bound {} does not continue from {}",
                        bracket.lower_bound, expected_lower
                    ),
                });
            }

            if bracket.marginal_rate.is_sign_negative() {
                return Err(EngineError::InvalidSchedule {
                    message: format!("negative marginal rate {}", bracket.marginal_rate),
                });
            }
        }

        let rates = [
            self.insurance.health_rate,
            self.insurance.pension_rate,
            self.insurance.employment_rate,
            self.insurance.care_rate,
            self.resident_tax_rate,
        ];
        if rates.iter().any(|r| r.is_sign_negative() && !r.is_zero()) {
            return Err(EngineError::InvalidSchedule {
                message: "insurance and resident tax rates must be non-negative".to_string(),
            });
        }

        Ok(())
    }

    /// Returns the schedule metadata.
    pub fn metadata(&self) -> &ScheduleMetadata {
        &self.metadata
    }

    /// Returns the income-tax bracket table, ascending.
    pub fn brackets(&self) -> &[TaxBracket] {
        &self.brackets
    }

    /// Returns the social-insurance premium rates.
    pub fn insurance(&self) -> &InsuranceRates {
        &self.insurance
    }

    /// Returns the flat resident tax rate.
    pub fn resident_tax_rate(&self) -> Decimal {
        self.resident_tax_rate
    }

    /// Finds the bracket covering the given income.
    ///
    /// Selection picks the first row whose upper bound is at or above the
    /// income; the validated trailing unbounded row covers everything else,
    /// so lookup cannot fail on a valid schedule.
    pub fn bracket_for(&self, income: Decimal) -> EngineResult<&TaxBracket> {
        self.brackets
            .iter()
            .find(|b| b.covers(income))
            .ok_or_else(|| EngineError::InvalidSchedule {
                message: format!("no bracket covers income {}", income),
            })
    }
}
