//! Floater Core - Headless Display State Machine for the Floater Overlay
//!
//! This crate provides the display logic for floater, completely
//! independent of any window system. It decides *what* the overlay widget
//! shows; the surrounding host process owns *where* and *how* it is shown
//! (window chrome, always-on-top behavior, the socket the events arrive
//! over).
//!
//! # Architecture
//!
//! ```text
//! ┌──────────────────────────────────────────────────────────────┐
//! │                        Host process                          │
//! │   (window chrome, socket server, content production)         │
//! │                                                              │
//! │      initial_content()              UpdateEvent (push)       │
//! └───────────┬──────────────────────────────┬───────────────────┘
//!             │                              │
//! ┌───────────┼──────────────────────────────┼───────────────────┐
//! │           ▼        DISPLAY CORE          ▼                   │
//! │  ┌────────────────────────────────────────────────────────┐  │
//! │  │                 DisplayController                      │  │
//! │  │   ┌──────────────┐          ┌───────────────────────┐  │  │
//! │  │   │ DisplayState │          │ TimeKeeper (Timer     │  │  │
//! │  │   │ mode + text  │          │ mode only, 1s ticks)  │  │  │
//! │  │   └──────────────┘          └───────────────────────┘  │  │
//! │  └───────────────────────────┬────────────────────────────┘  │
//! │                              │ rendered frames (watch)       │
//! └──────────────────────────────┼───────────────────────────────┘
//!                                ▼
//!                        rendering surface
//! ```
//!
//! # Key Types
//!
//! - [`DisplayController`]: the event loop owning all display state
//! - [`FloaterHandle`]: the host-facing side - push events, watch frames
//! - [`UpdateEvent`]: the `{content?, timer?}` payload pushed by the host
//! - [`DisplayState`]: current mode plus static text, with the merge rule
//! - [`TimeKeeper`]: the elapsed-time counter active in timer mode
//! - [`ContentHost`]: the initial-content fetch boundary
//!
//! # Quick Start
//!
//! ```ignore
//! use floater_core::{DisplayController, FixedHost, FloaterConfig, UpdateEvent};
//!
//! #[tokio::main]
//! async fn main() {
//!     let host = FixedHost::new("hello from the host");
//!     let (controller, handle) = DisplayController::new(host, FloaterConfig::from_env());
//!
//!     let mut frames = handle.frames();
//!     tokio::spawn(controller.run());
//!
//!     handle.push(UpdateEvent::timer()).await.unwrap();
//!     while frames.changed().await.is_ok() {
//!         println!("{}", *frames.borrow_and_update());
//!     }
//! }
//! ```
//!
//! # Module Overview
//!
//! - [`config`]: controller configuration with env overrides
//! - [`controller`]: the display controller and its handle
//! - [`event`]: the update-event wire type
//! - [`host`]: the host boundary trait and in-process implementation
//! - [`state`]: display state and the event merge rule
//! - [`timekeeper`]: elapsed-time counter, formatting, tick task
//!
//! # No Window Dependencies
//!
//! This crate has **zero** dependencies on any window system, GUI toolkit,
//! or IPC mechanism. It is pure display logic that any surface can embed.

#![deny(missing_docs)]
#![deny(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]

pub mod config;
pub mod controller;
pub mod event;
pub mod host;
pub mod state;
pub mod timekeeper;

// Re-exports for convenience
pub use config::{FloaterConfig, DEFAULT_PLACEHOLDER};
pub use controller::{DisplayController, FloaterHandle};
pub use event::UpdateEvent;
pub use host::{ContentHost, FixedHost, HostError};
pub use state::{DisplayMode, DisplayState, ModeChange};
pub use timekeeper::{format_elapsed, TimeKeeper, TICK_PERIOD};
