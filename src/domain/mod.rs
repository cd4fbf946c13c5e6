// Domain layer: the user record and the checks every registration goes through.

pub mod model;
pub mod validators;
