//! Bridge: split "which device" from "which audio format".
//!
//! With one type per combination, adding a device or a format multiplies the
//! number of types. Bridging the two hierarchies makes it additive.

pub trait Player {
    fn play(&self, song: &str) -> String;
}

// ============================================================================
// Bad: one type per (device, format) pair
// ============================================================================

pub struct SmartphoneMp3Player;

impl Player for SmartphoneMp3Player {
    fn play(&self, song: &str) -> String {
        format!("Playing MP3 file on smartphone: {}", song)
    }
}

pub struct SmartphoneWavPlayer;

impl Player for SmartphoneWavPlayer {
    fn play(&self, song: &str) -> String {
        format!("Playing WAV file on smartphone: {}", song)
    }
}

pub struct TabletMp3Player;

impl Player for TabletMp3Player {
    fn play(&self, song: &str) -> String {
        format!("Playing MP3 file on tablet: {}", song)
    }
}

pub struct TabletWavPlayer;

impl Player for TabletWavPlayer {
    fn play(&self, song: &str) -> String {
        format!("Playing WAV file on tablet: {}", song)
    }
}

// ============================================================================
// Good: device abstraction holding a format implementation
// ============================================================================

pub trait AudioFormat {
    fn label(&self) -> &str;
}

pub struct Mp3;

impl AudioFormat for Mp3 {
    fn label(&self) -> &str {
        "MP3"
    }
}

pub struct Wav;

impl AudioFormat for Wav {
    fn label(&self) -> &str {
        "WAV"
    }
}

pub trait Device {
    fn name(&self) -> &str;
}

pub struct Smartphone;

impl Device for Smartphone {
    fn name(&self) -> &str {
        "smartphone"
    }
}

pub struct Tablet;

impl Device for Tablet {
    fn name(&self) -> &str {
        "tablet"
    }
}

pub struct BridgedPlayer<D> {
    device: D,
    format: Box<dyn AudioFormat>,
}

impl<D: Device> BridgedPlayer<D> {
    pub fn new(device: D, format: Box<dyn AudioFormat>) -> Self {
        Self { device, format }
    }

    /// Same device, different format.
    pub fn switch_format(&mut self, format: Box<dyn AudioFormat>) {
        self.format = format;
    }
}

impl<D: Device> Player for BridgedPlayer<D> {
    fn play(&self, song: &str) -> String {
        format!(
            "Playing {} file on {}: {}",
            self.format.label(),
            self.device.name(),
            song
        )
    }
}
