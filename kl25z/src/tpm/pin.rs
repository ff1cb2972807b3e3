//! PWM output pins.
//!
//! Each constant packs the five hardware facts of one wired pin into a
//! single descriptor: pin number, port, TPM channel, TPM instance and the
//! mux alternative that routes the pin to the timer. The constants below
//! are the full set of pins the board can drive PWM on; no other
//! descriptor can be constructed.

/// Packed PWM pin descriptor.
///
/// Field layout, low to high: pin number (5 bits), port index (3 bits),
/// channel index (3 bits), TPM instance (2 bits), mux alternative (3 bits).
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Pin(u16);

/// Decoded descriptor fields.
#[derive(Clone, Copy, Debug)]
pub(crate) struct PinFields {
    pub pin: u8,
    pub port: u8,
    pub channel: u8,
    pub instance: u8,
    pub mux: u8,
}

impl Pin {
    /// Pack a descriptor.
    ///
    /// Field order: pin number, port index, channel, instance, mux.
    const fn new(pin: u16, port: u16, channel: u16, instance: u16, mux: u16) -> Self {
        Self(pin | port << 5 | channel << 8 | instance << 11 | mux << 13)
    }

    /// Unpack the five descriptor fields.
    #[inline]
    pub(crate) fn decode(self) -> PinFields {
        PinFields {
            pin: (self.0 & 0x1F) as u8,
            port: (self.0 >> 5 & 0x7) as u8,
            channel: (self.0 >> 8 & 0x7) as u8,
            instance: (self.0 >> 11 & 0x3) as u8,
            mux: (self.0 >> 13 & 0x7) as u8,
        }
    }
}

// Port indices.
const A: u16 = 0;
const B: u16 = 1;
const C: u16 = 2;
const D: u16 = 3;
const E: u16 = 4;

// TPM0 pins.
pub const PTA0: Pin = Pin::new(0, A, 5, 0, 3);
pub const PTA4: Pin = Pin::new(4, A, 1, 0, 3);
pub const PTA5: Pin = Pin::new(5, A, 2, 0, 3);
pub const PTC1: Pin = Pin::new(1, C, 0, 0, 4);
pub const PTC2: Pin = Pin::new(2, C, 1, 0, 4);
pub const PTC3: Pin = Pin::new(3, C, 2, 0, 4);
pub const PTC4: Pin = Pin::new(4, C, 3, 0, 4);
pub const PTC8: Pin = Pin::new(8, C, 4, 0, 3);
pub const PTC9: Pin = Pin::new(9, C, 5, 0, 3);
pub const PTD0: Pin = Pin::new(0, D, 0, 0, 4);
pub const PTD1: Pin = Pin::new(1, D, 1, 0, 4);
pub const PTD2: Pin = Pin::new(2, D, 2, 0, 4);
pub const PTD3: Pin = Pin::new(3, D, 3, 0, 4);
pub const PTD4: Pin = Pin::new(4, D, 4, 0, 4);
pub const PTD5: Pin = Pin::new(5, D, 5, 0, 4);
pub const PTE29: Pin = Pin::new(29, E, 2, 0, 3);
pub const PTE30: Pin = Pin::new(30, E, 3, 0, 3);

// TPM1 pins.
pub const PTA12: Pin = Pin::new(12, A, 0, 1, 3);
pub const PTA13: Pin = Pin::new(13, A, 1, 1, 3);
pub const PTB0: Pin = Pin::new(0, B, 0, 1, 3);
pub const PTB1: Pin = Pin::new(1, B, 1, 1, 3);
pub const PTE20: Pin = Pin::new(20, E, 0, 1, 3);
pub const PTE21: Pin = Pin::new(21, E, 1, 1, 3);

// TPM2 pins.
pub const PTA1: Pin = Pin::new(1, A, 0, 2, 3);
pub const PTA2: Pin = Pin::new(2, A, 1, 2, 3);
pub const PTE22: Pin = Pin::new(22, E, 0, 2, 3);
pub const PTE23: Pin = Pin::new(23, E, 1, 2, 3);
