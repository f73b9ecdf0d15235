// Domain layer: actions, request/response models and the backend port.

pub mod action;
pub mod model;
pub mod ports;
pub mod records;
