//! Gramschmidt is a step-by-step engine for the Gram-Schmidt process on 2 or
//! 3 real vectors. The orthogonalizer eagerly computes the orthogonal basis,
//! the orthonormal basis, and the trace of every projection it subtracted.
//! A separate step model decides how much of that result is disclosed at a
//! given point of an interactive walkthrough. Linearly dependent input is
//! never an error: the affected basis vectors come out as the zero vector,
//! which consumers treat as an undefined direction.

pub mod codec;
pub mod error;
pub mod input;
pub mod num_vec;
pub mod orthogonalize;
pub mod report;
pub mod session;
pub mod step;
