pub mod publisher;
pub mod scan;
pub mod workdir;

pub use crate::domain::model::{CandidateDirectory, DirectoryOutcome, PublishReport};
pub use crate::domain::ports::{CommandRunner, PublishSettings};
pub use crate::utils::error::Result;
