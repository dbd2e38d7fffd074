use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Error)]
pub enum InvalidConfiguration {
    #[error("retirement age {retirement_age} must be greater than current age {current_age}")]
    RetirementNotAfterCurrentAge {
        current_age: u32,
        retirement_age: u32,
    },
    #[error(
        "life expectancy {life_expectancy} must be greater than retirement age {retirement_age}"
    )]
    LifeExpectancyNotAfterRetirement {
        retirement_age: u32,
        life_expectancy: u32,
    },
    #[error("life expectancy {life_expectancy} exceeds the maximum projectable age {max_age}")]
    HorizonTooLong { life_expectancy: u32, max_age: u32 },
    #[error("{field} must be a finite number")]
    NonFinite { field: &'static str },
}
