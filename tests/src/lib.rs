//! Integration tests across the report and curtailment pipelines.

pub mod fixtures;

#[cfg(test)]
mod extraction {
    mod integration;
}

#[cfg(test)]
mod curtailment {
    mod integration;
}
