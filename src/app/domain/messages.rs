use crate::app::services::upload::UploadOutcome;

/// All messages that can be sent through the FLTK channel.
/// Each menu or widget callback sends one of these; the dispatch loop in main handles them.
#[derive(Debug, Clone)]
pub enum Message {
    // File
    FileOpen,
    FileQuit,

    // Gist
    RunCommand(&'static str),
    OpenSettings,
    GithubTokenChanged(String),

    // Background upload, error already rendered for display
    UploadFinished(Result<UploadOutcome, String>),
}
