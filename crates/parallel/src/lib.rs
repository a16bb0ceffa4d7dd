//! # rastermask parallel
//!
//! Scheduling and partitioning helpers for window-based raster algorithms.
//!
//! This crate provides:
//! - Window grids that split a raster into disjoint square windows
//! - Exclusive mutable sub-views per window for lock-free parallel writes
//! - Sequential, Rayon, and fixed-size pool execution strategies

pub mod strategy;
pub mod window;

pub use strategy::{ParallelStrategy, ProcessingMode};
pub use window::{Window, WindowGrid, WindowIterator};
