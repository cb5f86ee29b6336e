/// Row models and their query operations
///
/// One module per table:
///
/// - `user`: The single profile row (id 1)
/// - `mentor`: Mentorship directory entries
/// - `job`: Job-board listings
/// - `notification`: Append-only messages for the profile user

pub mod job;
pub mod mentor;
pub mod notification;
pub mod user;
