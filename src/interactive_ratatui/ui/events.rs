use crate::boot::BootEvent;
use std::time::Duration;

#[derive(Clone, Debug)]
pub enum Message {
    // Boot events
    Boot(BootEvent),

    // Search events
    QueryChanged(String),
    SubmitQuery,
    SearchResolved { result_count: usize },
    SelectResult(usize),

    // Mode changes
    ShowHelp,
    CloseHelp,

    // Clipboard
    CopyUrl(String),

    // Timer events
    GreetingTick(Duration),
}
