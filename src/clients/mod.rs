pub mod kkphim;

pub use kkphim::KkphimClient;
