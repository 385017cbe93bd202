//! Backend commands queued from UI to backend worker.

use shared::protocol::ContactSubmission;

#[derive(Debug)]
pub enum BackendCommand {
    ForwardContact { submission: ContactSubmission },
}

impl BackendCommand {
    pub fn name(&self) -> &'static str {
        match self {
            BackendCommand::ForwardContact { .. } => "forward_contact",
        }
    }
}
