mod map_environment;
mod test_files;
mod test_repository_fs;

pub use self::map_environment::MapEnvironment;
pub use self::test_files::TestFiles;
pub use self::test_repository_fs::MockRepositoryFs;
