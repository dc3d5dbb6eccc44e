mod course;
pub mod credentials;
mod ids;
mod session;
mod stats;

pub use course::{COMPLETE_PROGRESS, Course, CourseDraft, ProgressSnapshotDraft};
pub use credentials::{Credentials, CredentialsDraft, CredentialsError, MIN_PASSWORD_LEN};
pub use ids::{CourseId, ParseIdError, UserId};
pub use session::{LOGGED_IN_KEY, LOGGED_IN_VALUE, Session, SessionToken, TOKEN_KEY};
pub use stats::{CompletionBreakdown, DashboardStats};
