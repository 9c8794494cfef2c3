//! Register map and bit layouts for AS5047/AS5147 sensors.

/// Register addresses
///
/// The volatile registers hold transient sensor state and are read-only;
/// the non-volatile registers (zero position and settings) accept writes,
/// although the sensor only persists them through its OTP programming
/// sequence.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[non_exhaustive]
#[repr(u16)]
pub enum Register {
    /// No operation
    Nop = 0x0000,
    /// Error flags, cleared by the read itself
    ErrFl = 0x0001,
    /// OTP programming control
    Prog = 0x0003,

    /// Zero position MSB
    ZPosM = 0x0016,
    /// Zero position LSB and error-flag enables
    ZPosL = 0x0017,
    /// Custom setting register 1
    Settings1 = 0x0018,
    /// Custom setting register 2
    Settings2 = 0x0019,

    /// Diagnostics and AGC
    DiaAgc = 0x3FFC,
    /// CORDIC magnitude (14-bit)
    Mag = 0x3FFD,
    /// Measured angle without dynamic angle error compensation (14-bit)
    Angle = 0x3FFE,
    /// Measured angle with dynamic angle error compensation (14-bit)
    AngleCom = 0x3FFF,
}

impl From<Register> for u16 {
    fn from(reg: Register) -> u16 {
        reg as u16
    }
}

bitfield::bitfield! {
    /// ERRFL
    ///
    /// Reading the ERRFL register automatically clears its contents
    pub struct ErrorFlags(u16);
    impl Debug;
    /// Parity error detected on the sensor's receive side
    pub parerr, _: 2;
    /// Invalid command error: set to 1 by reading or writing an invalid
    /// register address
    pub invcomm, _: 1;
    /// Framing error: set to 1 when a non-compliant SPI frame is detected
    pub frerr, _: 0;
}

bitfield::bitfield! {
    /// PROG
    ///
    /// Controls programming of the OTP memory
    pub struct Programming(u16);
    impl Debug;
    /// Program verify: must be set to 1 for verifying the correctness of
    /// the OTP programming
    pub progver, set_progver: 6;
    /// Start OTP programming cycle
    pub progotp, set_progotp: 3;
    /// Refreshes the non-volatile memory content with the OTP programmed
    /// content
    pub otpref, set_otpref: 2;
    /// Program OTP enable: enables programming the entire OTP memory
    pub progen, set_progen: 0;
}

bitfield::bitfield! {
    /// DIAAGC
    pub struct DiagnosticsAgc(u16);
    impl Debug;
    u8;
    /// Magnetic field strength too low; AGC=0xFF
    pub magl, _: 11;
    /// Magnetic field strength too high; AGC=0x00
    pub magh, _: 10;
    /// CORDIC overflow
    pub cof, _: 9;
    /// Offset compensation
    ///
    /// - `0` = internal offset loops not ready regulated
    /// - `1` = internal offset loop finished
    pub lf, _: 8;
    /// Automatic gain control value
    pub agc, _: 7, 0;
}

impl DiagnosticsAgc {
    /// Check if the magnetic field strength is within acceptable range
    #[must_use]
    #[inline(always)]
    pub fn magnetic_field_ok(&self) -> bool {
        !self.magh() && !self.magl()
    }

    /// Check if angle and magnitude data is valid
    #[must_use]
    #[inline(always)]
    pub fn is_valid(&self) -> bool {
        !self.cof() && self.magnetic_field_ok()
    }
}

bitfield::bitfield! {
    /// MAG
    pub struct CordicMagnitude(u16);
    impl Debug;
    u16;
    /// CORDIC magnitude information
    pub cmag, _: 13, 0;
}

bitfield::bitfield! {
    /// ANGLE
    pub struct UncompensatedAngle(u16);
    impl Debug;
    u16;
    /// Angle information without dynamic angle error compensation
    pub cordicang, _: 13, 0;
}

bitfield::bitfield! {
    /// ANGLECOM
    pub struct CompensatedAngle(u16);
    impl Debug;
    u16;
    /// Angle information with dynamic angle error compensation
    pub daecang, _: 13, 0;
}

bitfield::bitfield! {
    /// ZPOSM
    pub struct ZeroPositionMsb(u8);
    impl Debug;
    u8;
    /// 8 most significant bits of the zero position
    pub zposm, set_zposm: 7, 0;
}

bitfield::bitfield! {
    /// ZPOSL
    pub struct ZeroPositionLsb(u8);
    impl Debug;
    u8;
    /// Enables the contribution of MAGH (magnetic field strength too high)
    /// to the error flag
    pub comp_h_error_en, set_comp_h_error_en: 7;
    /// Enables the contribution of MAGL (magnetic field strength too low)
    /// to the error flag
    pub comp_l_error_en, set_comp_l_error_en: 6;
    /// 6 least significant bits of the zero position
    pub zposl, set_zposl: 5, 0;
}

bitfield::bitfield! {
    /// SETTINGS1
    pub struct Settings1(u8);
    impl Debug;
    /// Enables PWM (setting of UVW_ABI bit necessary)
    pub pwmon, set_pwmon: 7;
    /// Selects which angle is read from address 0x3FFF
    ///
    /// - `0` = DAECANG
    /// - `1` = CORDICANG
    pub dataselect, set_dataselect: 6;
    /// ABI decimal or binary selection of the ABI pulses per revolution
    pub abibin, set_abibin: 5;
    /// Disable dynamic angle error compensation
    ///
    /// - `0` = DAE compensation ON
    /// - `1` = DAE compensation OFF
    pub daecdis, set_daecdis: 4;
    /// Defines the PWM output
    ///
    /// - `0` = ABI is operating, W is used as PWM
    /// - `1` = UVW is operating, I is used as PWM
    pub uvw_abi, set_uvw_abi: 3;
    /// Rotation direction
    pub dir, set_dir: 2;
    /// Noise setting
    pub noiseset, set_noiseset: 1;
    /// Factory setting, pre-programmed; leave as read
    pub factory_setting, _: 0;
}

bitfield::bitfield! {
    /// SETTINGS2
    pub struct Settings2(u8);
    impl Debug;
    u8;
    /// Resolution of ABI
    pub abires, set_abires: 7, 5;
    /// Hysteresis setting
    pub hys, set_hys: 4, 3;
    /// UVW number of pole pairs
    ///
    /// - `000` = 1
    /// - `001` = 2
    /// - `010` = 3
    /// - `011` = 4
    /// - `100` = 5
    /// - `101` = 6
    /// - `110` = 7
    /// - `111` = 7
    pub uvwpp, set_uvwpp: 2, 0;
}
