//! Register-level access to the TPM peripheral.
//!
//! Derives the register addresses of one TPM channel from its decoded pin
//! descriptor and owns the volatile reads and writes against them. Also
//! drives the SIM clock gates and the port pin-control word that route the
//! timer to the outside world.

use core::ptr;

use super::pin::PinFields;

// TPM instance region: TPM0 base plus a fixed stride per instance.
const TPM0_BASE: u32 = 0x4003_8000;
const TPM_STRIDE: u32 = 0x1000;

// Peripheral-wide register offsets.
const SC: u32 = 0x0;
const CNT: u32 = 0x4;
const MOD: u32 = 0x8;

// Channel register slots: 8 bytes apart, first slot at 0xC/0x10.
const C0SC: u32 = 0xC;
const C0V: u32 = 0x10;
const CHANNEL_STRIDE: u32 = 8;

// Pin-control region: one page per port, one word per pin.
const PCR_BASE: u32 = 0x4004_9000;
const PCR_PORT_STRIDE: u32 = 0x1000;

// SIM system registers.
const SIM_SOPT2: u32 = 0x4004_8004;
const SIM_SCGC5: u32 = 0x4004_8038;
const SIM_SCGC6: u32 = 0x4004_803C;

// Clock gate masks for port A and TPM0; shift left by the port or
// instance index for the others.
const SCGC5_PORTA: u32 = 1 << 9;
const SCGC6_TPM0: u32 = 1 << 24;

// SOPT2 TPMSRC = 01: MCGFLLCLK drives the TPM counters.
const SOPT2_TPMSRC_MCG: u32 = 1 << 24;

// SC CMOD = 01: counter runs on the TPM counter clock.
const SC_CMOD: u32 = 0x8;

// CnSC MSB | ELSB: edge-aligned, high-true PWM pulses.
const CNSC_MSB: u32 = 0x20;
const CNSC_ELSB: u32 = 0x8;

// PCR MUX field position.
const PCR_MUX_SHIFT: u32 = 8;

#[inline]
const fn base_address(instance: u8) -> u32 {
    TPM0_BASE + TPM_STRIDE * instance as u32
}

#[inline]
const fn channel_value_address(base: u32, channel: u8) -> u32 {
    base + C0V + CHANNEL_STRIDE * channel as u32
}

#[inline]
const fn channel_status_address(base: u32, channel: u8) -> u32 {
    base + C0SC + CHANNEL_STRIDE * channel as u32
}

#[inline]
const fn pin_control_address(port: u8, pin: u8) -> u32 {
    PCR_BASE + PCR_PORT_STRIDE * port as u32 + 4 * pin as u32
}

#[inline]
fn write(address: u32, value: u32) {
    unsafe { ptr::write_volatile(address as *mut u32, value) }
}

#[inline]
fn read(address: u32) -> u32 {
    unsafe { ptr::read_volatile(address as *const u32) }
}

/// Register addresses of one TPM channel, bound once at construction.
///
/// Covers the peripheral-wide registers (SC, CNT, MOD), the channel pair
/// (CnSC, CnV) and the pin-control word of the output pin. The owning
/// channel object is the sole writer of these addresses for its lifetime.
#[derive(Clone, Copy, Debug)]
pub(crate) struct TpmRegisters {
    sc: u32,
    cnt: u32,
    modulo: u32,
    cnsc: u32,
    cnv: u32,
    pcr: u32,
}

impl TpmRegisters {
    /// Bind the address set for the given decoded pin.
    pub(crate) const fn bind(fields: PinFields) -> Self {
        let base = base_address(fields.instance);
        Self {
            sc: base + SC,
            cnt: base + CNT,
            modulo: base + MOD,
            cnsc: channel_status_address(base, fields.channel),
            cnv: channel_value_address(base, fields.channel),
            pcr: pin_control_address(fields.port, fields.pin),
        }
    }

    /// Stop the counter by clearing the CMOD field.
    #[inline]
    pub(crate) fn stop_counter(&self) {
        write(self.sc, read(self.sc) & !SC_CMOD);
    }

    /// Start the counter on the internal TPM clock.
    #[inline]
    pub(crate) fn start_counter(&self) {
        write(self.sc, read(self.sc) | SC_CMOD);
    }

    /// Full SC write: sets the prescaler field and stops the counter.
    #[inline]
    pub(crate) fn write_prescaler(&self, ps: u8) {
        write(self.sc, ps as u32);
    }

    #[inline]
    pub(crate) fn write_period(&self, period: u16) {
        write(self.modulo, period as u32);
    }

    #[inline]
    pub(crate) fn read_period(&self) -> u16 {
        read(self.modulo) as u16
    }

    #[inline]
    pub(crate) fn write_compare(&self, compare: u16) {
        write(self.cnv, compare as u32);
    }

    #[inline]
    pub(crate) fn read_compare(&self) -> u16 {
        read(self.cnv) as u16
    }

    #[inline]
    pub(crate) fn read_counter(&self) -> u16 {
        read(self.cnt) as u16
    }

    /// Configure the channel for edge-aligned, high-true PWM pulses.
    #[inline]
    pub(crate) fn select_pwm_mode(&self) {
        write(self.cnsc, CNSC_MSB | CNSC_ELSB);
    }

    /// Route the pin to the TPM.
    ///
    /// Full-register write: any other pin-control bits are overwritten.
    #[inline]
    pub(crate) fn select_mux(&self, alt: u8) {
        write(self.pcr, (alt as u32) << PCR_MUX_SHIFT);
    }
}

/// Open the clock gate of a TPM instance and select its counter clock.
///
/// Both registers are process-wide shared state; the writes only ever set
/// bits, so channels sharing a gate may construct in any order.
#[inline]
pub(crate) fn enable_tpm_clock(instance: u8) {
    write(SIM_SCGC6, read(SIM_SCGC6) | SCGC6_TPM0 << instance);
    write(SIM_SOPT2, read(SIM_SOPT2) | SOPT2_TPMSRC_MCG);
}

/// Open the clock gate of the port holding the output pin.
#[inline]
pub(crate) fn enable_port_clock(port: u8) {
    write(SIM_SCGC5, read(SIM_SCGC5) | SCGC5_PORTA << port);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn instance_bases_are_evenly_spaced() {
        assert_eq!(base_address(0), 0x4003_8000);
        assert_eq!(base_address(1) - base_address(0), 0x1000);
        assert_eq!(base_address(2) - base_address(1), 0x1000);
    }

    #[test]
    fn channel_slots_are_eight_bytes_apart() {
        let base = base_address(0);
        for n in 0..6u8 {
            assert_eq!(channel_value_address(base, n), base + 0x10 + 8 * n as u32);
            assert_eq!(channel_status_address(base, n), base + 0xC + 8 * n as u32);
            // The status word sits directly below the value word.
            assert_eq!(
                channel_value_address(base, n) - channel_status_address(base, n),
                4
            );
        }
    }

    #[test]
    fn pin_control_words_are_page_and_word_spaced() {
        assert_eq!(pin_control_address(0, 0), 0x4004_9000);
        assert_eq!(pin_control_address(1, 0) - pin_control_address(0, 0), 0x1000);
        assert_eq!(pin_control_address(3, 1), 0x4004_c004);
        assert_eq!(pin_control_address(4, 30), 0x4004_d078);
    }

    #[test]
    fn bind_lays_out_the_peripheral_block() {
        let regs = TpmRegisters::bind(super::super::pin::PTC1.decode());
        assert_eq!(regs.sc, 0x4003_8000);
        assert_eq!(regs.cnt, regs.sc + 0x4);
        assert_eq!(regs.modulo, regs.sc + 0x8);
        assert_eq!(regs.cnsc, regs.sc + 0xC);
        assert_eq!(regs.cnv, regs.sc + 0x10);
        assert_eq!(regs.pcr, 0x4004_b004);
    }

    #[test]
    fn bind_follows_the_instance() {
        // PTE22 is TPM2 channel 0 on port E pin 22.
        let regs = TpmRegisters::bind(super::super::pin::PTE22.decode());
        assert_eq!(regs.sc, 0x4003_a000);
        assert_eq!(regs.cnsc, 0x4003_a00c);
        assert_eq!(regs.cnv, 0x4003_a010);
        assert_eq!(regs.pcr, 0x4004_d058);
    }
}
