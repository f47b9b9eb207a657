pub mod peek;
