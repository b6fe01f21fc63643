mod analysis;
mod errors;
mod generate;
mod logging;
mod mutate;
mod query;
pub mod support;
