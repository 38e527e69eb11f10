pub mod grouping;
pub mod normalize;
pub mod validation;
