//! **voxnav-core** — Core types for voxel navigation.
//!
//! This crate provides the foundational types shared across the *voxnav*
//! workspace: 3D integer geometry, the block-category classification, the
//! read-only [`VoxelQuery`] world capability, and a dense [`VoxelGrid`]
//! implementation of it for embedders that own their terrain.

pub mod block;
pub mod geom;
pub mod grid;

pub use block::{BlockCategory, VoxelQuery};
pub use geom::{Position, Volume};
pub use grid::VoxelGrid;
