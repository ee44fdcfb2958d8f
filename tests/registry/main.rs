//! Registry integration tests.
//!
//! Exercises the workspace components end to end against an in-memory or
//! on-disk store, with a scripted gateway standing in for the model.

mod support;
mod exemptions;
mod persistence;
mod surveyors;
