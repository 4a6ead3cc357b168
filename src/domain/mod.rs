// Domain layer: the record contract, closed enumerations and the transport port.

pub mod ports;
pub mod record;
pub mod string_enum;
