mod local_completion;
mod remote_session;

pub use local_completion::{LocalCompletionGenerator, SamplingParameters};
pub use remote_session::RemoteSessionGenerator;
