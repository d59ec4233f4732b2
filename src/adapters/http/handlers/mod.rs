pub mod company;
pub mod invoice;
