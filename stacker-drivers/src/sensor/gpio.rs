//! GPIO presence sensor sampler
//!
//! Reads the three presence sensors as digital input pins. Beam-break
//! sensors are usually active-low, so each channel carries its own
//! polarity. The sampler contract requires a determinate boolean even
//! when a pin read fails, so a failing channel latches its previous
//! reading (initially no-ball).

use embedded_hal::digital::InputPin;

use stacker_core::state::SensorTriple;
use stacker_core::traits::PresenceSensors;

/// Electrical polarity of a presence sensor
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum PinPolarity {
    /// Pin high means ball present
    #[default]
    ActiveHigh,
    /// Pin low means ball present (beam-break style)
    ActiveLow,
}

/// One sensor channel: pin, polarity, latched reading
struct Channel<P> {
    pin: P,
    polarity: PinPolarity,
    last: bool,
}

impl<P: InputPin> Channel<P> {
    fn new(pin: P, polarity: PinPolarity) -> Self {
        Self {
            pin,
            polarity,
            last: false,
        }
    }

    fn read(&mut self) -> bool {
        match self.pin.is_high() {
            Ok(level) => {
                self.last = match self.polarity {
                    PinPolarity::ActiveHigh => level,
                    PinPolarity::ActiveLow => !level,
                };
                self.last
            }
            Err(_) => self.last,
        }
    }
}

/// Sampler over three digital input pins (low, mid, high positions)
pub struct GpioSensors<L, M, H> {
    low: Channel<L>,
    mid: Channel<M>,
    high: Channel<H>,
}

impl<L, M, H> GpioSensors<L, M, H>
where
    L: InputPin,
    M: InputPin,
    H: InputPin,
{
    /// Create a sampler with one polarity for all three channels
    pub fn new(low: L, mid: M, high: H, polarity: PinPolarity) -> Self {
        Self {
            low: Channel::new(low, polarity),
            mid: Channel::new(mid, polarity),
            high: Channel::new(high, polarity),
        }
    }

    /// Create a sampler with per-channel polarities
    pub fn with_polarities(
        low: (L, PinPolarity),
        mid: (M, PinPolarity),
        high: (H, PinPolarity),
    ) -> Self {
        Self {
            low: Channel::new(low.0, low.1),
            mid: Channel::new(mid.0, mid.1),
            high: Channel::new(high.0, high.1),
        }
    }
}

impl<L, M, H> PresenceSensors for GpioSensors<L, M, H>
where
    L: InputPin,
    M: InputPin,
    H: InputPin,
{
    fn sample(&mut self) -> SensorTriple {
        SensorTriple::new(self.low.read(), self.mid.read(), self.high.read())
    }
}
