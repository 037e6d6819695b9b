// Domain layer: the courier wire shapes.

pub mod model;
