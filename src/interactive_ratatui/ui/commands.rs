#[derive(Clone, Debug, PartialEq)]
pub enum Command {
    None,
    SubmitSearch(String),
    MountSearch,
    CopyToClipboard(String),
    ClearMessage,
    ScheduleClearMessage(u64), // delay in milliseconds
}
