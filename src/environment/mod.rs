/// GPU device properties and worker identifier parsing
pub mod device;
