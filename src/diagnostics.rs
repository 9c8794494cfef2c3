//! Human-readable dump of the full register map.

use core::fmt;

use crate::{
    frame::ReadDataFrame,
    register::{
        CompensatedAngle, CordicMagnitude, DiagnosticsAgc, ErrorFlags, Programming, Settings1,
        Settings2, UncompensatedAngle, ZeroPositionLsb, ZeroPositionMsb,
    },
};

/// Snapshot of every register, captured via [`As5x47::dump_registers`]
///
/// Holds the raw data frames so each register's own error-flag bit stays
/// visible. The `Display` implementation renders the decoded fields.
///
/// [`As5x47::dump_registers`]: crate::As5x47::dump_registers
#[derive(Debug)]
pub struct RegisterDump {
    /// ERRFL frame
    pub errfl: ReadDataFrame,
    /// PROG frame
    pub prog: ReadDataFrame,
    /// DIAAGC frame
    pub diaagc: ReadDataFrame,
    /// MAG frame
    pub mag: ReadDataFrame,
    /// ANGLE frame
    pub angle: ReadDataFrame,
    /// ANGLECOM frame
    pub anglecom: ReadDataFrame,
    /// ZPOSM frame
    pub zposm: ReadDataFrame,
    /// ZPOSL frame
    pub zposl: ReadDataFrame,
    /// SETTINGS1 frame
    pub settings1: ReadDataFrame,
    /// SETTINGS2 frame
    pub settings2: ReadDataFrame,
}

impl fmt::Display for RegisterDump {
    #[allow(clippy::cast_possible_truncation, clippy::too_many_lines)]
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "======== AS5x47 register dump ========")?;

        let errfl = ErrorFlags(self.errfl.data());
        writeln!(f, "ERRFL (0x0001)")?;
        writeln!(f, "  reading error: {}", self.errfl.error_flag())?;
        writeln!(f, "  FRERR: {}", errfl.frerr())?;
        writeln!(f, "  INVCOMM: {}", errfl.invcomm())?;
        writeln!(f, "  PARERR: {}", errfl.parerr())?;

        let prog = Programming(self.prog.data());
        writeln!(f, "PROG (0x0003)")?;
        writeln!(f, "  reading error: {}", self.prog.error_flag())?;
        writeln!(f, "  PROGEN: {}", prog.progen())?;
        writeln!(f, "  OTPREF: {}", prog.otpref())?;
        writeln!(f, "  PROGOTP: {}", prog.progotp())?;
        writeln!(f, "  PROGVER: {}", prog.progver())?;

        let diaagc = DiagnosticsAgc(self.diaagc.data());
        writeln!(f, "DIAAGC (0x3FFC)")?;
        writeln!(f, "  reading error: {}", self.diaagc.error_flag())?;
        writeln!(f, "  AGC: {}", diaagc.agc())?;
        writeln!(f, "  LF: {}", diaagc.lf())?;
        writeln!(f, "  COF: {}", diaagc.cof())?;
        writeln!(f, "  MAGH: {}", diaagc.magh())?;
        writeln!(f, "  MAGL: {}", diaagc.magl())?;

        let mag = CordicMagnitude(self.mag.data());
        writeln!(f, "MAG (0x3FFD)")?;
        writeln!(f, "  reading error: {}", self.mag.error_flag())?;
        writeln!(f, "  CMAG: {}", mag.cmag())?;

        let angle = UncompensatedAngle(self.angle.data());
        writeln!(f, "ANGLE (0x3FFE)")?;
        writeln!(f, "  reading error: {}", self.angle.error_flag())?;
        writeln!(f, "  CORDICANG: {}", angle.cordicang())?;

        let anglecom = CompensatedAngle(self.anglecom.data());
        writeln!(f, "ANGLECOM (0x3FFF)")?;
        writeln!(f, "  reading error: {}", self.anglecom.error_flag())?;
        writeln!(f, "  DAECANG: {}", anglecom.daecang())?;

        let zposm = ZeroPositionMsb(self.zposm.data() as u8);
        writeln!(f, "ZPOSM (0x0016)")?;
        writeln!(f, "  reading error: {}", self.zposm.error_flag())?;
        writeln!(f, "  ZPOSM: {}", zposm.zposm())?;

        let zposl = ZeroPositionLsb(self.zposl.data() as u8);
        writeln!(f, "ZPOSL (0x0017)")?;
        writeln!(f, "  reading error: {}", self.zposl.error_flag())?;
        writeln!(f, "  ZPOSL: {}", zposl.zposl())?;
        writeln!(f, "  COMP_L_ERROR_EN: {}", zposl.comp_l_error_en())?;
        writeln!(f, "  COMP_H_ERROR_EN: {}", zposl.comp_h_error_en())?;

        let settings1 = Settings1(self.settings1.data() as u8);
        writeln!(f, "SETTINGS1 (0x0018)")?;
        writeln!(f, "  reading error: {}", self.settings1.error_flag())?;
        writeln!(f, "  NOISESET: {}", settings1.noiseset())?;
        writeln!(f, "  DIR: {}", settings1.dir())?;
        writeln!(f, "  UVW_ABI: {}", settings1.uvw_abi())?;
        writeln!(f, "  DAECDIS: {}", settings1.daecdis())?;
        writeln!(f, "  ABIBIN: {}", settings1.abibin())?;
        writeln!(f, "  DATASELECT: {}", settings1.dataselect())?;
        writeln!(f, "  PWMON: {}", settings1.pwmon())?;

        let settings2 = Settings2(self.settings2.data() as u8);
        writeln!(f, "SETTINGS2 (0x0019)")?;
        writeln!(f, "  reading error: {}", self.settings2.error_flag())?;
        writeln!(f, "  UVWPP: {}", settings2.uvwpp())?;
        writeln!(f, "  HYS: {}", settings2.hys())?;
        writeln!(f, "  ABIRES: {}", settings2.abires())?;

        write!(f, "======================================")
    }
}
