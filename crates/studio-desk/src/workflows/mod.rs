pub mod offers;
pub mod trends;
