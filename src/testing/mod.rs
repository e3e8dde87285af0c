pub mod ports;

pub use ports::MapEnvironment;
pub use ports::MockRepositoryFs;
pub use ports::TestFiles;
