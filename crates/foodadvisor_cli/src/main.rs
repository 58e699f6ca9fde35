//! CLI smoke entry point.
//!
//! # Responsibility
//! - Provide a minimal executable to verify `foodadvisor_core` linkage.
//! - Keep output deterministic for quick local sanity checks.

fn main() {
    println!(
        "foodadvisor_core version={}",
        foodadvisor_core::core_version()
    );
    println!(
        "foodadvisor_core default_log_level={}",
        foodadvisor_core::default_log_level()
    );
}
