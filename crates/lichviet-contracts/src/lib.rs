//! Boundary contracts around `lichviet_core`.
//!
//! The HTTP layer, calculator forms and storage all talk to the engines
//! through the plain-JSON shapes in this crate. Everything caller-supplied
//! is parsed and validated here, before any calculation runs: the core is
//! total for admitted input, so a request either fails fast with a
//! `ContractError` or produces a complete record, never partial pillar or
//! lunar data.

pub mod adapter;
pub mod error;
pub mod records;

pub use adapter::{
    astrology_record, lunar_date_record, lunar_date_records, numerology_record, SupportedRange,
};
pub use error::ContractError;
pub use records::{
    AstrologyReadingRecord, AstrologyRequest, LunarDateRecord, NumerologyRequest,
};
