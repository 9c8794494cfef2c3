//! Blocking driver for AS5047/AS5147 magnetic position sensors

use embedded_hal::spi::SpiDevice;

use crate::{
    diagnostics::RegisterDump,
    error::Error,
    frame::{CommandFrame, ReadDataFrame, WriteDataFrame},
    register::{
        CompensatedAngle, CordicMagnitude, DiagnosticsAgc, ErrorFlags, Register, Settings1,
        Settings2, UncompensatedAngle, ZeroPositionLsb, ZeroPositionMsb,
    },
};

/// One revolution in angle counts (14-bit: 0-16383, representing 0-360°)
pub const ANGLE_MAX: u16 = 0x3FFF + 1;

/// AS5047/AS5147 driver instance
///
/// Owns the SPI device of one sensor; the chip-select line belongs to the
/// injected [`SpiDevice`] and frames every transfer. A logical read is two
/// chip-select-framed transfers that must not be interleaved with other
/// traffic to the same sensor; exclusive access through `&mut self`
/// guarantees that.
#[derive(Debug)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct As5x47<SPI> {
    spi: SPI,
}

impl<SPI, E> As5x47<SPI>
where
    SPI: SpiDevice<u8, Error = E>,
{
    /// Create a new driver instance
    pub fn new(spi: SPI) -> Self {
        Self { spi }
    }

    /// Release the SPI bus, consuming the driver
    pub fn release(self) -> SPI {
        self.spi
    }

    /// Exchange one 16-bit word with the sensor
    fn transfer(&mut self, frame: u16) -> Result<u16, Error<E>> {
        let tx = frame.to_be_bytes();
        let mut rx = [0u8; 2];
        self.spi
            .transfer(&mut rx, &tx)
            .map_err(Error::Communication)?;
        Ok(u16::from_be_bytes(rx))
    }

    /// Read a register
    ///
    /// The bus is pipelined: the response to a command only becomes
    /// available one transfer later. A read therefore issues two transfers,
    /// the read command itself (whose response belongs to the previous
    /// transaction and is discarded) followed by a NOP command that pumps
    /// the actual data out.
    ///
    /// The returned frame is undecoded. Its error-flag and parity bits are
    /// the sensor's, untouched; judge them with
    /// [`ReadDataFrame::error_flag`] and [`ReadDataFrame::parity_ok`].
    ///
    /// # Errors
    ///
    /// Returns an error only if the SPI transport fails.
    pub fn read_register(&mut self, register: Register) -> Result<ReadDataFrame, Error<E>> {
        let address = u16::from(register);
        let command = CommandFrame::read(address);

        #[cfg(feature = "defmt")]
        defmt::trace!(
            "Reading register 0x{:04X}, command: 0x{:04X}",
            address,
            command.raw()
        );

        let _stale = self.transfer(command.raw())?;
        let response = self.transfer(CommandFrame::nop().raw())?;

        #[cfg(feature = "defmt")]
        defmt::trace!("Received response: 0x{:04X}", response);

        Ok(ReadDataFrame::from(response))
    }

    /// Write a register
    ///
    /// Fire and forget: the write command and the data frame are
    /// transmitted back to back and no response is captured. Values wider
    /// than 14 bits are silently truncated. Callers wanting verification
    /// must read the register back themselves; the non-volatile registers
    /// only persist once the sensor runs its OTP programming sequence,
    /// which this driver does not drive.
    ///
    /// # Errors
    ///
    /// Returns an error only if the SPI transport fails.
    pub fn write_register(&mut self, register: Register, value: u16) -> Result<(), Error<E>> {
        let address = u16::from(register);

        #[cfg(feature = "defmt")]
        defmt::debug!("Writing 0x{:04X} to register 0x{:04X}", value, address);

        let command = CommandFrame::write(address);
        let data = WriteDataFrame::new(value);

        self.transfer(command.raw())?;
        self.transfer(data.raw())?;

        Ok(())
    }

    /// Read a register and validate frame integrity
    fn read_checked(&mut self, register: Register) -> Result<u16, Error<E>> {
        let frame = self.read_register(register)?;

        if !frame.parity_ok() {
            #[cfg(feature = "defmt")]
            defmt::warn!("Parity error in response: 0x{:04X}", frame.raw());
            return Err(Error::Parity);
        }

        if frame.error_flag() {
            #[cfg(feature = "defmt")]
            defmt::warn!("Sensor error flag set in response");
            return Err(Error::SensorError);
        }

        Ok(frame.data())
    }

    /// Read the uncompensated angle in degrees
    ///
    /// The 14-bit ANGLE register value is scaled to [0.0, 360.0).
    ///
    /// # Errors
    ///
    /// Returns an error if SPI communication fails, the response parity is
    /// wrong, or the sensor reports an error
    pub fn read_angle(&mut self) -> Result<f32, Error<E>> {
        let angle = UncompensatedAngle(self.read_checked(Register::Angle)?);
        Ok(f32::from(angle.cordicang()) / f32::from(ANGLE_MAX) * 360.0)
    }

    /// Read the dynamic-angle-error-compensated angle in degrees
    ///
    /// # Errors
    ///
    /// Returns an error if SPI communication fails, the response parity is
    /// wrong, or the sensor reports an error
    pub fn read_compensated_angle(&mut self) -> Result<f32, Error<E>> {
        let angle = CompensatedAngle(self.read_checked(Register::AngleCom)?);
        Ok(f32::from(angle.daecang()) / f32::from(ANGLE_MAX) * 360.0)
    }

    /// Read the 14-bit CORDIC magnitude
    ///
    /// Useful for checking magnet presence and strength
    ///
    /// # Errors
    ///
    /// Returns an error if SPI communication fails, the response parity is
    /// wrong, or the sensor reports an error
    pub fn read_magnitude(&mut self) -> Result<u16, Error<E>> {
        self.read_checked(Register::Mag)
            .map(|raw| CordicMagnitude(raw).cmag())
    }

    /// Read the diagnostics and AGC register
    ///
    /// # Errors
    ///
    /// Returns an error if SPI communication fails, the response parity is
    /// wrong, or the sensor reports an error
    pub fn read_diagnostics(&mut self) -> Result<DiagnosticsAgc, Error<E>> {
        self.read_checked(Register::DiaAgc).map(DiagnosticsAgc)
    }

    /// Read the error flags, which the read itself clears on the sensor
    ///
    /// # Errors
    ///
    /// Returns an error if SPI communication fails, the response parity is
    /// wrong, or the sensor reports an error
    pub fn clear_error_flags(&mut self) -> Result<ErrorFlags, Error<E>> {
        self.read_checked(Register::ErrFl).map(ErrorFlags)
    }

    /// Write the zero position registers, MSB register first
    ///
    /// The two writes are sequential; the sensor offers no atomicity
    /// between them.
    ///
    /// # Errors
    ///
    /// Returns an error only if the SPI transport fails.
    pub fn write_zero_position(
        &mut self,
        msb: ZeroPositionMsb,
        lsb: ZeroPositionLsb,
    ) -> Result<(), Error<E>> {
        self.write_register(Register::ZPosM, u16::from(msb.0))?;
        self.write_register(Register::ZPosL, u16::from(lsb.0))
    }

    /// Set a 14-bit zero position, with both error-flag enables cleared
    ///
    /// # Errors
    ///
    /// Returns an error only if the SPI transport fails.
    #[allow(clippy::cast_possible_truncation)]
    pub fn set_zero_position(&mut self, value: u16) -> Result<(), Error<E>> {
        let mut msb = ZeroPositionMsb(0);
        msb.set_zposm(((value >> 6) & 0xFF) as u8);

        let mut lsb = ZeroPositionLsb(0);
        lsb.set_zposl((value & 0x3F) as u8);

        self.write_zero_position(msb, lsb)
    }

    /// Read back the 14-bit zero position
    ///
    /// # Errors
    ///
    /// Returns an error if SPI communication fails, the response parity is
    /// wrong, or the sensor reports an error
    #[allow(clippy::cast_possible_truncation)]
    pub fn read_zero_position(&mut self) -> Result<u16, Error<E>> {
        let msb = ZeroPositionMsb(self.read_checked(Register::ZPosM)? as u8);
        let lsb = ZeroPositionLsb(self.read_checked(Register::ZPosL)? as u8);

        Ok((u16::from(msb.zposm()) << 6) | u16::from(lsb.zposl()))
    }

    /// Write the SETTINGS1 register
    ///
    /// # Errors
    ///
    /// Returns an error only if the SPI transport fails.
    pub fn write_settings1(&mut self, settings: Settings1) -> Result<(), Error<E>> {
        self.write_register(Register::Settings1, u16::from(settings.0))
    }

    /// Write the SETTINGS2 register
    ///
    /// # Errors
    ///
    /// Returns an error only if the SPI transport fails.
    pub fn write_settings2(&mut self, settings: Settings2) -> Result<(), Error<E>> {
        self.write_register(Register::Settings2, u16::from(settings.0))
    }

    /// Snapshot every register for diagnostics
    ///
    /// Captures the raw data frames over the fixed register map; render the
    /// result with `core::fmt::Display`. Each frame keeps its own
    /// error-flag bit, no validation is applied.
    ///
    /// # Errors
    ///
    /// Returns an error only if the SPI transport fails.
    pub fn dump_registers(&mut self) -> Result<RegisterDump, Error<E>> {
        Ok(RegisterDump {
            errfl: self.read_register(Register::ErrFl)?,
            prog: self.read_register(Register::Prog)?,
            diaagc: self.read_register(Register::DiaAgc)?,
            mag: self.read_register(Register::Mag)?,
            angle: self.read_register(Register::Angle)?,
            anglecom: self.read_register(Register::AngleCom)?,
            zposm: self.read_register(Register::ZPosM)?,
            zposl: self.read_register(Register::ZPosL)?,
            settings1: self.read_register(Register::Settings1)?,
            settings2: self.read_register(Register::Settings2)?,
        })
    }
}
