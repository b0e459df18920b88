//! Central system ordering labels to make the per-frame sequence explicit.
//! Stages (high-level):
//! 1. CircleSetUpdate (regeneration / recolor of the working set)
//! 2. MotionUpdate (phase advance + position computation)
//! 3. GooSync (pack circle data into the goo material uniform)
use bevy::prelude::*;

#[derive(SystemSet, Debug, Hash, PartialEq, Eq, Clone)]
pub struct CircleSetUpdateSet;

#[derive(SystemSet, Debug, Hash, PartialEq, Eq, Clone)]
pub struct MotionUpdateSet;

#[derive(SystemSet, Debug, Hash, PartialEq, Eq, Clone)]
pub struct GooSyncSet;
