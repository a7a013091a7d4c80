pub mod constants;
pub mod deadline;
#[cfg(test)]
pub mod test_helpers;
pub mod types;
