pub mod bezier;

pub use bezier::{Bezier, CurvatureVector};
