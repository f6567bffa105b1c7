pub mod seed;

#[cfg(feature = "ssr")]
pub mod config;

#[cfg(feature = "ssr")]
pub mod security;

#[cfg(feature = "ssr")]
pub mod simulation;
