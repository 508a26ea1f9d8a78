//! CLI smoke entry point.
//!
//! # Responsibility
//! - Provide a minimal executable to verify `trailjournal_core` linkage.
//! - Keep output deterministic for quick local sanity checks.

fn main() {
    println!("trailjournal_core ping={}", trailjournal_core::ping());
    println!("trailjournal_core version={}", trailjournal_core::core_version());
}
