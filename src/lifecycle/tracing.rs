//! # Observability & Tracing
//!
//! [`setup_tracing`] installs the global subscriber: compact lines, no module
//! prefix (the store logs an `entity_type` field instead), level chosen through
//! `RUST_LOG`.
//!
//! ```bash
//! RUST_LOG=info cargo run     # one line per state change
//! RUST_LOG=debug cargo run    # request payloads and store lookups
//! ```
//!
//! With `RUST_LOG=info`, placing an order reads:
//!
//! ```text
//! INFO place_order:create_order: Sending create_order to actor order_number="PED-0001"
//! INFO Created entity_type="Order" id=order_1 size=1
//! INFO place_order:create_order: Order placed order=order_1 total=45.00
//! ```
//!
//! Password hashes are redacted from every `Debug` rendering of user payloads.

/// Installs the global subscriber. Call once, from the binary.
pub fn setup_tracing() {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_target(false)
        .compact()
        .init();
}
