//! Compositor infrastructure module

mod hyprctl;
mod slurp;

pub use hyprctl::HyprctlCompositor;
pub use slurp::SlurpRegionPicker;
