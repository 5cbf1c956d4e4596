//! Public library API for coercing loosely-typed values into template-defined shapes.

/// Value model, shape classification, and the template-driven coercer.
pub mod shape;
