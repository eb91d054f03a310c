// Domain layer: routes, request payloads and ports (interfaces). No I/O happens here.

pub mod model;
pub mod ports;
pub mod requests;
