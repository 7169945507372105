//! Application services for user directory orchestration.

mod directory;

pub use directory::{
    CreateUserRequest, DirectoryError, DirectoryResult, UpdateUserRequest, UserDirectoryService,
};
