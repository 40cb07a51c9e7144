//! Numerical geometry of a discretized **Möbius strip**: parametric sampling,
//! surface area by integrating the area element `|∂P/∂u × ∂P/∂v|` with a
//! composite Simpson's rule, boundary edge length, and export of the sampled
//! mesh as STL or a rendered PNG.
//!
//! ```
//! use mobius_strip::{MobiusParams, MobiusStrip};
//!
//! let strip = MobiusStrip::from_params(&MobiusParams::default()).unwrap();
//! assert!((strip.edge_length() - 6.2908).abs() < 1e-3);
//! ```
//!
//! # Features
//! #### Default
//! - **f64**: use f64 as Real
//! - [**stl-io**](https://en.wikipedia.org/wiki/STL_(file_format)): `.stl` export of the sampled mesh
//! - **image-io**: software rendering of the surface to PNG
//!
//! #### Optional
//! - **f32**: use f32 as Real, this conflicts with f64

#![forbid(unsafe_code)]
#![deny(unused)]
#![warn(clippy::missing_const_for_fn, clippy::approx_constant, clippy::all)]

pub mod errors;
pub mod float_types;
pub mod grid;
pub mod io;
pub mod numeric;
pub mod surface;
pub mod triangulated;
pub mod vertex;

#[cfg(feature = "image-io")]
pub mod render;

#[cfg(any(all(feature = "f64", feature = "f32"), not(any(feature = "f64", feature = "f32"))))]
compile_error!("Either 'f64' or 'f32' feature must be specified, but not both");

pub use errors::MobiusError;
pub use surface::mobius::{Boundary, MobiusParams, MobiusStrip, MobiusSurface};
pub use surface::{ParametricSurface, SampledSurface};
pub use triangulated::Triangulated3D;
pub use vertex::Vertex;
