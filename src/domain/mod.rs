// SPDX-License-Identifier: MPL-2.0
//! Domain layer - Core value types with ZERO external dependencies.
//!
//! This module contains pure domain types and the rules that keep them
//! valid. It has no dependencies on external crates (except `std`) so the
//! compositing arithmetic can be tested in isolation.
//!
//! # Modules
//!
//! - [`compositing`]: Icon generation types ([`BackgroundColor`](compositing::BackgroundColor),
//!   [`ScaleFactor`](compositing::ScaleFactor), [`CanvasSize`](compositing::CanvasSize),
//!   [`Offset`](compositing::Offset))

pub mod compositing;
