//! Lines Intersection Editor Library.
//! Core-Funktionalität als Library exportiert für Tests und Wiederverwendung.

pub mod app;
pub mod core;
pub mod render;
pub mod shared;
pub mod ui;

pub use app::{AppCommand, AppController, AppIntent, AppState, CommandLog, FrameScheduler};
pub use core::{
    compute_intersections, find_intersection, find_midpoint, marker_positions, CollapseAnimation,
    CollapseState, CollapseStep, DrawingState, IntersectionPoint, Segment,
};
pub use render::{DrawPrimitive, Surface};
pub use shared::EditorOptions;
