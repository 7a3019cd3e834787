//! Numerology profiles over the Vietnamese alphabet.

pub mod engine;
pub mod meanings;
pub mod types;

pub use engine::{
    calculate_numerology, consonant_sum, letter_sum, reduce_to_master_number,
    reduce_to_single_digit,
};
pub use types::NumerologyProfile;
