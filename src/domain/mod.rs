// Domain layer: the entity shapes consumed by the helpers. No dependencies beyond std/serde/chrono.

pub mod model;
