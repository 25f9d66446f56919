//! Checkout

pub mod view;

pub use view::{CheckoutHandoff, CheckoutView};
