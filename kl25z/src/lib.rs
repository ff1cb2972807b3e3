//! Minimal HAL crate for the NXP MKL25Z4 microcontroller (FRDM-KL25Z).
//!
//! Covers the TPM peripheral in PWM mode: pick one of the wired output
//! pins, set a prescaler/period pair and a compare value, and start the
//! counter. All register addresses are derived from the pin constant, so
//! no direct register interaction is needed.
//!
//! It is minimal in the sense that it does not follow strict guidelines on
//! HAL crate design, e.g. two channel objects for the same pin can be
//! created without complaint.

#![no_std]

pub mod clock;
pub mod delay;
pub mod tpm;
