pub mod climate;
pub mod reference;
