//! Vela - screen recording toggle for Wayland desktops
//!
//! This crate records the screen on Hyprland-style Wayland sessions with
//! wl-screenrec or wf-recorder, toggling a detached recorder process on and
//! off and driving the desktop notification around it.
//!
//! # Architecture
//!
//! The crate follows hexagonal (ports & adapters) architecture:
//!
//! - **Domain**: Recorder model, capture regions, session descriptor, config
//! - **Application**: Use cases and port interfaces (traits)
//! - **Infrastructure**: Adapter implementations (hyprctl, slurp, pactl,
//!   notify-send, lspci, recorder processes, the session file)
//! - **CLI**: Command-line interface and output formatting

pub mod application;
pub mod cli;
pub mod domain;
pub mod infrastructure;
