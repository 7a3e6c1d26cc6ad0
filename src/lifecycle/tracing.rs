//! # Tracing
//!
//! [`setup_tracing`] installs a compact `tracing-subscriber` formatter filtered
//! by `RUST_LOG`. Module paths are hidden; actor logs carry an `entity_type`
//! field instead.
//!
//! ```bash
//! RUST_LOG=info cargo run                       # one line per operation
//! RUST_LOG=debug cargo run                      # request payloads too
//! RUST_LOG=cafe_order::checkout=debug cargo run # checkout only
//! ```
//!
//! Placing an order at `info` reads roughly:
//!
//! ```text
//! INFO checkout:place_order:create_order: Sending create_order to actor
//! INFO Action ok entity_type="MenuItem" id=item_1
//! INFO Stock reserved order_id=order_1 lines=2
//! INFO Created entity_type="Order" id=order_1 size=1
//! INFO checkout:place_order: Redirecting to Messenger order_number="001"
//! ```

/// Installs the global subscriber. Call once, before the system starts.
pub fn setup_tracing() {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_target(false)
        .compact()
        .init();
}
