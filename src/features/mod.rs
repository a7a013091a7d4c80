pub mod pandals;
