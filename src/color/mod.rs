//! Color-space helpers shared by the conversion kernels.

pub mod transfer;
