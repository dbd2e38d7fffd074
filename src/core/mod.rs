mod calendar;
mod engine;
mod error;
mod types;

pub use calendar::first_year_fraction;
pub use engine::{
    MAX_PROJECTION_AGE, deflate, price_index, project, resolve_configuration, run_projection,
};
pub use error::InvalidConfiguration;
pub use types::{Configuration, Inputs, ProjectionResult, YearRecord};
