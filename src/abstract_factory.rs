//! Abstract Factory: one factory per product family.
//!
//! The application asks its factory for a button or a checkbox and never
//! learns which operating system they were made for.

use crate::error::PatternError;
use std::str::FromStr;

pub trait Button {
    fn click(&self) -> String;
}

pub trait Checkbox {
    fn check(&self) -> String;
}

pub struct WinButton;

impl Button for WinButton {
    fn click(&self) -> String {
        "window button is clicked".to_string()
    }
}

pub struct MacButton;

impl Button for MacButton {
    fn click(&self) -> String {
        "mac button is clicked".to_string()
    }
}

pub struct WinCheckbox;

impl Checkbox for WinCheckbox {
    fn check(&self) -> String {
        "window checkbox is checked".to_string()
    }
}

pub struct MacCheckbox;

impl Checkbox for MacCheckbox {
    fn check(&self) -> String {
        "mac checkbox is checked".to_string()
    }
}

pub trait GuiFactory {
    fn create_button(&self) -> Box<dyn Button>;
    fn create_checkbox(&self) -> Box<dyn Checkbox>;
}

pub struct WinFactory;

impl GuiFactory for WinFactory {
    fn create_button(&self) -> Box<dyn Button> {
        Box::new(WinButton)
    }

    fn create_checkbox(&self) -> Box<dyn Checkbox> {
        Box::new(WinCheckbox)
    }
}

pub struct MacFactory;

impl GuiFactory for MacFactory {
    fn create_button(&self) -> Box<dyn Button> {
        Box::new(MacButton)
    }

    fn create_checkbox(&self) -> Box<dyn Checkbox> {
        Box::new(MacCheckbox)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Platform {
    Windows,
    Mac,
}

impl Platform {
    /// The only place that maps a platform to its concrete family.
    pub fn factory(self) -> Box<dyn GuiFactory> {
        match self {
            Platform::Windows => Box::new(WinFactory),
            Platform::Mac => Box::new(MacFactory),
        }
    }

    /// Platform of the machine running the demo; anything not macOS gets
    /// the Windows family.
    pub fn current() -> Self {
        if cfg!(target_os = "macos") {
            Platform::Mac
        } else {
            Platform::Windows
        }
    }
}

impl FromStr for Platform {
    type Err = PatternError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "windows" | "win" => Ok(Platform::Windows),
            "mac" | "macos" => Ok(Platform::Mac),
            _ => Err(PatternError::unsupported("platform", s)),
        }
    }
}

/// Client code: depends on [`GuiFactory`] only.
pub struct Application {
    factory: Box<dyn GuiFactory>,
}

impl Application {
    pub fn new(factory: Box<dyn GuiFactory>) -> Self {
        Self { factory }
    }

    pub fn for_platform(platform: Platform) -> Self {
        Self::new(platform.factory())
    }

    pub fn create_button(&self) -> Box<dyn Button> {
        self.factory.create_button()
    }

    pub fn create_checkbox(&self) -> Box<dyn Checkbox> {
        self.factory.create_checkbox()
    }

    /// Clicks a fresh button and checks a fresh checkbox.
    pub fn render(&self) -> Vec<String> {
        vec![self.create_button().click(), self.create_checkbox().check()]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_windows_family() {
        let app = Application::new(Box::new(WinFactory));
        assert_eq!(
            app.render(),
            vec!["window button is clicked", "window checkbox is checked"]
        );
    }

    #[test]
    fn test_mac_family() {
        let app = Application::for_platform(Platform::Mac);
        assert_eq!(app.create_button().click(), "mac button is clicked");
        assert_eq!(app.create_checkbox().check(), "mac checkbox is checked");
    }

    #[test]
    fn test_families_never_mix() {
        for platform in [Platform::Windows, Platform::Mac] {
            let rendered = Application::for_platform(platform).render();
            let prefix = rendered[0].split_whitespace().next().unwrap().to_string();
            assert!(rendered.iter().all(|line| line.starts_with(&prefix)));
        }
    }

    #[test]
    fn test_platform_parsing() {
        assert_eq!("MacOS".parse::<Platform>().unwrap(), Platform::Mac);
        assert_eq!("win".parse::<Platform>().unwrap(), Platform::Windows);
        assert!(matches!(
            "linux".parse::<Platform>(),
            Err(PatternError::UnsupportedType { kind: "platform", .. })
        ));
    }
}
