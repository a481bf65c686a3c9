mod release_file;

pub use release_file::ReleaseFile;
