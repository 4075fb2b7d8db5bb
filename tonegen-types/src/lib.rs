pub mod block;
pub mod config;
pub mod data_type;
pub mod error;
pub mod sample_type;

pub use block::*;
pub use config::*;
pub use data_type::*;
pub use error::*;
pub use sample_type::*;

pub use num_complex::Complex;
