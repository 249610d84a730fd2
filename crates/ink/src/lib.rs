//! Ink trace replay - decoding and raster playback of handwriting logs
//!
//! This crate turns an InkML-style pen log into a grayscale raster:
//! - [`decode`] - document parsing, the sample group state machine and
//!   duplicate collapsing
//! - [`mapping`] - digitizer to raster coordinate conversion
//! - [`width`] - per-brush stroke width quantization
//! - [`interpolate`] - integer line walk between samples with eraser thinning
//! - [`stamps`] - stamp bitmaps and the provider trait
//! - [`surface`] - the one byte per pixel canvas
//! - [`compositor`] - priority stamping of traces onto the canvas
//! - [`playback`] - forward/backward stepping over the trace list

pub mod compositor;
pub mod constants;
pub mod decode;
pub mod interpolate;
pub mod mapping;
pub mod playback;
pub mod stamps;
pub mod surface;
pub mod types;
pub mod width;

pub use compositor::*;
pub use constants::*;
pub use decode::*;
pub use interpolate::*;
pub use mapping::*;
pub use playback::*;
pub use stamps::*;
pub use surface::*;
pub use types::*;
pub use width::*;
