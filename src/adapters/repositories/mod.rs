mod memory_file_repository;

pub use memory_file_repository::InMemoryFileRepository;
