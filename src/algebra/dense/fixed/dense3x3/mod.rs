// Unrolled kernels for 3x3 symmetric matrices.
mod core;
