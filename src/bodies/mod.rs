//! Body registry
//!
//! This module holds the components describing orbital and rotational
//! state, plus the authored parameter tables every body is spawned from.

pub mod components;
pub mod registry;

pub use components::{
    AxialSpin, AxialTilt, Backdrop, BodySurface, OrbitalMotion, Planet, PlanetRing, Satellite,
    Star, Wobble,
};
pub use registry::{BodySpec, PLANETS};
