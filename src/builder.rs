//! Builder: assemble a computer step by step.
//!
//! A [`ComputerBuilder`] knows how to install parts, a
//! [`GamingComputerBuilder`] adds gaming-only steps on top, and the
//! [`ComputerAssembler`] (the director) knows which parts make up a standard,
//! a gaming or a custom machine.

use crate::error::PatternError;
use serde::Deserialize;
use std::fmt;

pub const WARNING_STANDARD_FOR_GAMING: &str =
    "Warning: Using standard builder for gaming computer. Some features may not be available.";

#[derive(Debug, Clone, Default, PartialEq)]
pub struct Computer {
    pub cpu: String,
    pub ram: String,
    pub storage: String,
    pub gpu: Option<String>,
    pub sound_card: Option<String>,
}

impl fmt::Display for Computer {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(
            f,
            "CPU: {}, RAM: {}, Storage: {}",
            self.cpu, self.ram, self.storage
        )?;
        if let Some(gpu) = &self.gpu {
            write!(f, ", GPU: {}", gpu)?;
        }
        if let Some(sound_card) = &self.sound_card {
            write!(f, ", Sound Card: {}", sound_card)?;
        }
        Ok(())
    }
}

/// Installation steps shared by every computer builder.
///
/// Implementors only expose their work-in-progress computer; the chaining
/// setters come for free.
pub trait BuildSteps {
    fn computer_mut(&mut self) -> &mut Computer;

    fn reset(&mut self) -> &mut Self
    where
        Self: Sized,
    {
        *self.computer_mut() = Computer::default();
        self
    }

    fn cpu(&mut self, cpu: impl Into<String>) -> &mut Self
    where
        Self: Sized,
    {
        self.computer_mut().cpu = cpu.into();
        self
    }

    fn ram(&mut self, ram: impl Into<String>) -> &mut Self
    where
        Self: Sized,
    {
        self.computer_mut().ram = ram.into();
        self
    }

    fn storage(&mut self, storage: impl Into<String>) -> &mut Self
    where
        Self: Sized,
    {
        self.computer_mut().storage = storage.into();
        self
    }

    fn gpu(&mut self, gpu: impl Into<String>) -> &mut Self
    where
        Self: Sized,
    {
        self.computer_mut().gpu = Some(gpu.into());
        self
    }

    fn sound_card(&mut self, sound_card: impl Into<String>) -> &mut Self
    where
        Self: Sized,
    {
        self.computer_mut().sound_card = Some(sound_card.into());
        self
    }

    /// Hands over the finished computer and leaves the builder reset.
    fn build(&mut self) -> Computer {
        std::mem::take(self.computer_mut())
    }
}

#[derive(Debug, Default)]
pub struct ComputerBuilder {
    computer: Computer,
}

impl ComputerBuilder {
    pub fn new() -> Self {
        Self::default()
    }
}

impl BuildSteps for ComputerBuilder {
    fn computer_mut(&mut self) -> &mut Computer {
        &mut self.computer
    }
}

/// A builder with extra skills only gaming rigs need.
#[derive(Debug, Default)]
pub struct GamingComputerBuilder {
    base: ComputerBuilder,
}

impl GamingComputerBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn overclock_cpu(&mut self) -> &mut Self {
        self.base.computer.cpu.push_str(" (Overclocked)");
        self
    }

    pub fn add_rgb_lighting(&mut self) -> &mut Self {
        let sound_card = &mut self.base.computer.sound_card;
        *sound_card = Some(match sound_card.take() {
            Some(card) => format!("{} with RGB Lighting", card),
            None => "RGB Lighting".to_string(),
        });
        self
    }
}

impl BuildSteps for GamingComputerBuilder {
    fn computer_mut(&mut self) -> &mut Computer {
        self.base.computer_mut()
    }
}

/// The builders a director can be handed. Matching on the variant replaces
/// asking a builder what class it is.
#[derive(Debug)]
pub enum AssemblyLine {
    Standard(ComputerBuilder),
    Gaming(GamingComputerBuilder),
}

impl AssemblyLine {
    pub fn standard() -> Self {
        AssemblyLine::Standard(ComputerBuilder::new())
    }

    pub fn gaming() -> Self {
        AssemblyLine::Gaming(GamingComputerBuilder::new())
    }
}

/// Optional parts for a made-to-order machine. Missing fields are skipped.
#[derive(Debug, Clone, Default, Deserialize, PartialEq)]
#[serde(default, deny_unknown_fields)]
pub struct CustomSpec {
    pub cpu: Option<String>,
    pub ram: Option<String>,
    pub storage: Option<String>,
    pub gpu: Option<String>,
    pub sound_card: Option<String>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct GamingBuild {
    pub computer: Computer,
    pub warning: Option<&'static str>,
}

/// Director: owns the recipes, not the parts.
#[derive(Debug, Default)]
pub struct ComputerAssembler {
    builder: Option<AssemblyLine>,
}

impl ComputerAssembler {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set_builder(&mut self, builder: AssemblyLine) {
        self.builder = Some(builder);
    }

    pub fn has_builder(&self) -> bool {
        self.builder.is_some()
    }

    pub fn build_standard_computer(&mut self) -> Result<Computer, PatternError> {
        match self.builder.as_mut() {
            Some(AssemblyLine::Standard(builder)) => Ok(standard_recipe(builder)),
            Some(AssemblyLine::Gaming(builder)) => Ok(standard_recipe(builder)),
            None => Err(PatternError::NoBuilderConfigured),
        }
    }

    pub fn build_gaming_computer(&mut self) -> Result<GamingBuild, PatternError> {
        match self.builder.as_mut() {
            Some(AssemblyLine::Gaming(builder)) => {
                let computer = builder
                    .reset()
                    .cpu("Intel i9-11900K")
                    .ram("32GB DDR4")
                    .storage("1TB NVMe SSD")
                    .gpu("NVIDIA RTX 3080")
                    .sound_card("Creative Sound Blaster AE-9")
                    .overclock_cpu()
                    .add_rgb_lighting()
                    .build();
                Ok(GamingBuild {
                    computer,
                    warning: None,
                })
            }
            Some(AssemblyLine::Standard(builder)) => {
                tracing::warn!("gaming computer requested from a standard builder");
                let computer = builder
                    .reset()
                    .cpu("Intel i7")
                    .ram("16GB")
                    .storage("512GB SSD")
                    .gpu("NVIDIA RTX 3070")
                    .sound_card("High-quality Audio")
                    .build();
                Ok(GamingBuild {
                    computer,
                    warning: Some(WARNING_STANDARD_FOR_GAMING),
                })
            }
            None => Err(PatternError::NoBuilderConfigured),
        }
    }

    /// Always assembles on a fresh standard builder, replacing whatever
    /// builder was set before.
    pub fn build_custom_computer(&mut self, spec: &CustomSpec) -> Computer {
        let mut builder = ComputerBuilder::new();
        builder.reset();
        if let Some(cpu) = &spec.cpu {
            builder.cpu(cpu.as_str());
        }
        if let Some(ram) = &spec.ram {
            builder.ram(ram.as_str());
        }
        if let Some(storage) = &spec.storage {
            builder.storage(storage.as_str());
        }
        if let Some(gpu) = &spec.gpu {
            builder.gpu(gpu.as_str());
        }
        if let Some(sound_card) = &spec.sound_card {
            builder.sound_card(sound_card.as_str());
        }
        let computer = builder.build();
        self.builder = Some(AssemblyLine::Standard(builder));
        computer
    }
}

fn standard_recipe<B: BuildSteps>(builder: &mut B) -> Computer {
    builder
        .reset()
        .cpu("Intel i5")
        .ram("8GB")
        .storage("256GB SSD")
        .gpu("Integrated Graphics")
        .sound_card("Basic Audio")
        .build()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_skips_missing_parts() {
        let computer = Computer {
            cpu: "i3".to_string(),
            ram: "4GB".to_string(),
            storage: "128GB".to_string(),
            gpu: None,
            sound_card: None,
        };
        assert_eq!(computer.to_string(), "CPU: i3, RAM: 4GB, Storage: 128GB");
    }

    #[test]
    fn test_builder_chaining() {
        let computer = ComputerBuilder::new()
            .cpu("Intel i5")
            .ram("8GB")
            .storage("256GB SSD")
            .gpu("Integrated Graphics")
            .build();
        assert_eq!(
            computer.to_string(),
            "CPU: Intel i5, RAM: 8GB, Storage: 256GB SSD, GPU: Integrated Graphics"
        );
    }

    #[test]
    fn test_build_leaves_builder_reset() {
        let mut builder = ComputerBuilder::new();
        builder.cpu("Intel i5").ram("8GB");
        let first = builder.build();
        let second = builder.build();
        assert_eq!(first.cpu, "Intel i5");
        assert_eq!(second, Computer::default());
    }

    #[test]
    fn test_gaming_extras() {
        let computer = GamingComputerBuilder::new()
            .cpu("Ryzen 7")
            .sound_card("Onboard")
            .overclock_cpu()
            .add_rgb_lighting()
            .build();
        assert_eq!(computer.cpu, "Ryzen 7 (Overclocked)");
        assert_eq!(computer.sound_card.as_deref(), Some("Onboard with RGB Lighting"));
    }

    #[test]
    fn test_rgb_lighting_without_sound_card() {
        let computer = GamingComputerBuilder::new().add_rgb_lighting().build();
        assert_eq!(computer.sound_card.as_deref(), Some("RGB Lighting"));
    }

    #[test]
    fn test_assembler_without_builder() {
        let mut assembler = ComputerAssembler::new();
        assert_eq!(
            assembler.build_standard_computer(),
            Err(PatternError::NoBuilderConfigured)
        );
        assert_eq!(
            assembler.build_gaming_computer(),
            Err(PatternError::NoBuilderConfigured)
        );
    }

    #[test]
    fn test_standard_computer() {
        let mut assembler = ComputerAssembler::new();
        assembler.set_builder(AssemblyLine::standard());
        let computer = assembler.build_standard_computer().unwrap();
        assert_eq!(
            computer.to_string(),
            "CPU: Intel i5, RAM: 8GB, Storage: 256GB SSD, GPU: Integrated Graphics, Sound Card: Basic Audio"
        );
    }

    #[test]
    fn test_gaming_computer_on_gaming_line() {
        let mut assembler = ComputerAssembler::new();
        assembler.set_builder(AssemblyLine::gaming());
        let build = assembler.build_gaming_computer().unwrap();
        assert_eq!(build.warning, None);
        assert_eq!(build.computer.cpu, "Intel i9-11900K (Overclocked)");
        assert_eq!(
            build.computer.sound_card.as_deref(),
            Some("Creative Sound Blaster AE-9 with RGB Lighting")
        );
    }

    #[test]
    fn test_gaming_computer_on_standard_line_downgrades() {
        let mut assembler = ComputerAssembler::new();
        assembler.set_builder(AssemblyLine::standard());
        let build = assembler.build_gaming_computer().unwrap();
        assert_eq!(build.warning, Some(WARNING_STANDARD_FOR_GAMING));
        assert_eq!(build.computer.cpu, "Intel i7");
        assert_eq!(build.computer.gpu.as_deref(), Some("NVIDIA RTX 3070"));
    }

    #[test]
    fn test_gaming_line_builds_standard_recipe_too() {
        let mut assembler = ComputerAssembler::new();
        assembler.set_builder(AssemblyLine::gaming());
        let computer = assembler.build_standard_computer().unwrap();
        assert_eq!(computer.cpu, "Intel i5");
    }

    #[test]
    fn test_custom_computer_applies_given_fields_only() {
        let mut assembler = ComputerAssembler::new();
        let spec = CustomSpec {
            cpu: Some("AMD Ryzen 9 5950X".to_string()),
            storage: Some("2TB NVMe SSD".to_string()),
            ..CustomSpec::default()
        };
        let computer = assembler.build_custom_computer(&spec);
        assert_eq!(
            computer.to_string(),
            "CPU: AMD Ryzen 9 5950X, RAM: , Storage: 2TB NVMe SSD"
        );
        assert!(assembler.has_builder());
    }

    #[test]
    fn test_custom_computer_replaces_gaming_line() {
        let mut assembler = ComputerAssembler::new();
        assembler.set_builder(AssemblyLine::gaming());
        assembler.build_custom_computer(&CustomSpec::default());
        let build = assembler.build_gaming_computer().unwrap();
        assert!(build.warning.is_some());
    }
}
