//! System clock constants.
//!
//! The crate relies on the reset clock configuration (FEI mode): the FLL
//! output feeds the core, and is routed to the TPM counters when a channel
//! opens its peripheral clock gate.

/// Core clock speed in Hertz.
pub const SPEED: u32 = 20_970_000;

/// TPM counter clock in Hertz.
///
/// MCGFLLCLK as measured on the board; use it as the source term when
/// computing a [generated frequency][crate::tpm::pwm::frequency].
pub const TPM_CLOCK: u32 = 20_940_000;
