use crate::types::errors::TypeError;

/// Hour index of the simulation a transaction belongs to (one month of hours).
#[derive(Debug, Clone, Copy, Eq, PartialEq, Ord, PartialOrd)]
pub struct Step(u16);

impl Step {
    pub const MAX: u16 = 744;

    pub fn value(&self) -> u16 {
        self.0
    }
}

impl Default for Step {
    fn default() -> Self {
        Step(1)
    }
}

impl TryFrom<i64> for Step {
    type Error = TypeError;

    fn try_from(value: i64) -> Result<Self, Self::Error> {
        if !(0..=Step::MAX as i64).contains(&value) {
            return Err(TypeError::StepOutOfRange(value));
        }

        Ok(Step(value as u16))
    }
}

/// Whether the upstream rule engine already flagged the transaction.
#[derive(Debug, Clone, Copy, Eq, PartialEq, Default)]
pub struct FlaggedFraud(bool);

impl FlaggedFraud {
    pub fn indicator(&self) -> i64 {
        i64::from(self.0)
    }
}

impl TryFrom<i64> for FlaggedFraud {
    type Error = TypeError;

    fn try_from(value: i64) -> Result<Self, Self::Error> {
        match value {
            0 => Ok(FlaggedFraud(false)),
            1 => Ok(FlaggedFraud(true)),
            other => Err(TypeError::InvalidFlag(other))
        }
    }
}
