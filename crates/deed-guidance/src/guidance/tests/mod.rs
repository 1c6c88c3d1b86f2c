mod common;

mod aggregator;
mod validation;
