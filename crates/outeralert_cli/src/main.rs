//! CLI smoke entry point.
//!
//! # Responsibility
//! - Provide a minimal executable to verify `outeralert_core` linkage.
//! - Keep output deterministic for quick local sanity checks.

fn main() {
    // Tiny probe validating core crate wiring independently from the
    // Flutter/FFI runtime setup.
    println!("outeralert_core ping={}", outeralert_core::ping());
    println!(
        "outeralert_core version={}",
        outeralert_core::core_version()
    );
}
