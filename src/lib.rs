//! # Cafe Order
//!
//! Ordering for a small café: browse the menu, customize drinks, fill a cart
//! and check out either at the counter or by paying online and handing the
//! order summary to the café's Messenger page.
//!
//! ## Design
//!
//! State lives in actors. Each [`ResourceActor`](framework::ResourceActor)
//! owns one kind of resource (menu items, carts, orders) in its own tokio task
//! and handles requests one at a time, so nothing needs a lock. The generic
//! message loop is written once in [`framework`]; each resource only
//! implements [`ActorEntity`](framework::ActorEntity).
//!
//! Dependencies are injected when an actor starts (`run(context)`), not when
//! it is built. Carts and the order desk both get a
//! [`MenuClient`](clients::MenuClient) that way.
//!
//! Everything outside the process (the order API, Cloudinary, the payment
//! method list) sits behind the async traits in [`services`], so the checkout
//! runs the same against REST or against the in-process order desk.
//!
//! ## Module Tour
//!
//! | Layer | Modules |
//! |---|---|
//! | Engine | [`framework`] |
//! | Data | [`model`], [`pricing`], [`customization`] |
//! | Actors | [`menu_actor`], [`cart_actor`], [`order_actor`] |
//! | Clients | [`clients`] |
//! | Outside world | [`services`], [`config`] |
//! | Flow | [`checkout`], [`storefront`] |
//! | Wiring | [`lifecycle`] |
//!
//! ## Running
//!
//! ```bash
//! RUST_LOG=info cargo run
//! cargo test
//! ```

pub mod cart_actor;
pub mod checkout;
pub mod clients;
pub mod config;
pub mod customization;
pub mod framework;
pub mod lifecycle;
pub mod menu_actor;
pub mod model;
pub mod order_actor;
pub mod pricing;
pub mod services;
pub mod storefront;
