#[cfg(test)]
mod tests {
    use super::super::app_state::*;
    use super::super::commands::Command;
    use super::super::events::Message;
    use crate::boot::BootEvent;
    use std::time::Duration;

    fn search_state() -> AppState {
        AppState::without_boot()
    }

    #[test]
    fn test_initial_state() {
        let state = AppState::new();

        assert_eq!(state.mode, Mode::Boot);
        assert!(state.boot.transcript.is_empty());
        assert!(!state.boot.complete);
        assert_eq!(state.search.query, "");
        assert_eq!(state.search.selected_index, 0);
        assert_eq!(state.ui.message, None);
        assert_eq!(state.ui.greeting.visible(), "");
    }

    #[test]
    fn test_boot_events_build_transcript_then_mount_search() {
        let mut state = AppState::new();

        let command = state.update(Message::Boot(BootEvent::Line("[ OK ] one".to_string())));
        assert_eq!(command, Command::None);
        state.update(Message::Boot(BootEvent::Line("Ready.".to_string())));
        assert_eq!(state.boot.transcript, vec!["[ OK ] one", "Ready."]);
        assert_eq!(state.mode, Mode::Boot);

        state.update(Message::Boot(BootEvent::BeginTransition));
        assert!(state.boot.transitioning);
        assert_eq!(state.mode, Mode::Boot);

        let command = state.update(Message::Boot(BootEvent::Complete));
        assert_eq!(command, Command::MountSearch);
        assert_eq!(state.mode, Mode::Search);
        assert!(state.boot.complete);
    }

    #[test]
    fn test_handoff_happens_once() {
        let mut state = AppState::new();
        state.update(Message::Boot(BootEvent::Complete));

        let command = state.update(Message::Boot(BootEvent::Complete));
        assert_eq!(command, Command::None);

        let command = state.update(Message::Boot(BootEvent::Line("late".to_string())));
        assert_eq!(command, Command::None);
        assert!(state.boot.transcript.is_empty());
    }

    #[test]
    fn test_blank_submit_is_ignored() {
        let mut state = search_state();
        state.update(Message::QueryChanged("   ".to_string()));

        let command = state.update(Message::SubmitQuery);

        assert_eq!(command, Command::None);
        assert_eq!(state.ui.message, None);
    }

    #[test]
    fn test_submit_trims_query() {
        let mut state = search_state();
        state.update(Message::QueryChanged("  zero trust  ".to_string()));
        state.search.selected_index = 3;

        let command = state.update(Message::SubmitQuery);

        assert_eq!(command, Command::SubmitSearch("zero trust".to_string()));
        assert_eq!(state.search.selected_index, 0);
        assert_eq!(state.ui.message, Some("[searching...]".to_string()));
        // The input keeps what the user typed
        assert_eq!(state.search.query, "  zero trust  ");
    }

    #[test]
    fn test_search_resolved_clears_message() {
        let mut state = search_state();
        state.ui.message = Some("[searching...]".to_string());

        let command = state.update(Message::SearchResolved { result_count: 2 });

        assert_eq!(command, Command::None);
        assert_eq!(state.ui.message, None);
        assert_eq!(state.search.result_count, 2);
    }

    #[test]
    fn test_select_result_bounds() {
        let mut state = search_state();
        state.update(Message::SearchResolved { result_count: 3 });

        state.update(Message::SelectResult(2));
        assert_eq!(state.search.selected_index, 2);

        state.update(Message::SelectResult(3));
        assert_eq!(state.search.selected_index, 2);

        state.update(Message::SelectResult(0));
        assert_eq!(state.search.selected_index, 0);
    }

    #[test]
    fn test_help_toggles_only_from_search() {
        let mut boot = AppState::new();
        boot.update(Message::ShowHelp);
        assert_eq!(boot.mode, Mode::Boot);

        let mut state = search_state();
        state.update(Message::ShowHelp);
        assert_eq!(state.mode, Mode::Help);
        state.update(Message::CloseHelp);
        assert_eq!(state.mode, Mode::Search);
    }

    #[test]
    fn test_copy_placeholder_url_is_refused() {
        let mut state = search_state();

        let command = state.update(Message::CopyUrl("#".to_string()));

        assert_eq!(command, Command::ScheduleClearMessage(3000));
        assert_eq!(state.ui.message, Some("Result is not navigable".to_string()));
    }

    #[test]
    fn test_copy_real_url() {
        let mut state = search_state();

        let command = state.update(Message::CopyUrl("https://owasp.org/top10/".to_string()));

        assert_eq!(
            command,
            Command::CopyToClipboard("https://owasp.org/top10/".to_string())
        );
    }

    #[test]
    fn test_greeting_tick_reveals_text() {
        let mut state = search_state();

        state.update(Message::GreetingTick(Duration::from_millis(200)));
        assert_eq!(state.ui.greeting.visible(), "root");

        state.update(Message::GreetingTick(Duration::from_secs(60)));
        assert!(state.ui.greeting.is_done());
    }
}
