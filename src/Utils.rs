//! different utility modules used throughout the project
/// TOML configuration of the domain, the figure and logging
pub mod config;
/// tiny module to save the curves of a plot into a file
pub mod logger;
/// simplelog setup: terminal and optional file sink
pub mod logging;
/// plotters-backed renderer writing PNG or SVG
pub mod plots;
/// tables of curves and rejected lines (tabled)
pub mod summary;
