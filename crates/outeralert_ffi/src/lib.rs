//! FFI bindings crate for the OuterAlert mobile app.
//! Generated bridge code is injected at build time by flutter_rust_bridge.

pub mod api;
