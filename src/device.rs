//! Devices share power handling through [`PowerState`]; each kind only
//! supplies its model name.

#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct PowerState {
    on: bool,
}

impl PowerState {
    pub fn is_on(&self) -> bool {
        self.on
    }

    pub fn status(&self) -> &'static str {
        if self.on {
            "On"
        } else {
            "Off"
        }
    }
}

pub trait Device {
    fn model(&self) -> &str;
    fn power(&self) -> &PowerState;
    fn power_mut(&mut self) -> &mut PowerState;

    fn turn_on(&mut self) {
        self.power_mut().on = true;
    }

    fn turn_off(&mut self) {
        self.power_mut().on = false;
    }

    fn status(&self) -> &'static str {
        self.power().status()
    }
}

#[derive(Debug, Default)]
pub struct Smartphone {
    power: PowerState,
}

impl Smartphone {
    pub fn new() -> Self {
        Self::default()
    }
}

impl Device for Smartphone {
    fn model(&self) -> &str {
        "Smartphone X"
    }

    fn power(&self) -> &PowerState {
        &self.power
    }

    fn power_mut(&mut self) -> &mut PowerState {
        &mut self.power
    }
}

#[derive(Debug)]
pub struct Laptop {
    model: String,
    power: PowerState,
}

impl Laptop {
    pub fn new(model: impl Into<String>) -> Self {
        Self {
            model: model.into(),
            power: PowerState::default(),
        }
    }
}

impl Device for Laptop {
    fn model(&self) -> &str {
        &self.model
    }

    fn power(&self) -> &PowerState {
        &self.power
    }

    fn power_mut(&mut self) -> &mut PowerState {
        &mut self.power
    }
}
