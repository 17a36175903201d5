//! Driving adapters that expose the domain to the outside world.

pub mod http;
