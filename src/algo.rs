pub mod distance_oracle;

pub use distance_oracle::DistanceOracle;
