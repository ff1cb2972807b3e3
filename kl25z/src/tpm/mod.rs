//! TPM peripheral (Timer/PWM Module).
//!
//! Example usage:
//!
//! ```ignore
//! use kl25z::tpm::{self, pwm};
//!
//! let mut channel = pwm::Pwm::new(tpm::PTD1);
//!
//! channel.set_frequency(pwm::Prescaler::Div16, 999);
//! channel.set_duty_cycle(750);
//! channel.enable();
//! ```

pub mod pwm;

mod pac;
mod pin;

pub use pin::*;
