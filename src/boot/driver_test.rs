#[cfg(test)]
mod tests {
    use super::super::driver::*;
    use crate::boot::{BootEvent, BootSequencer, DEFAULT_BOOT_MESSAGES};
    use std::time::Duration;
    use tokio::runtime::Handle;
    use tokio::time::Instant;

    fn script(lines: &[&str]) -> BootSequencer {
        BootSequencer::new(lines.iter().map(|l| l.to_string()).collect())
    }

    #[tokio::test(start_paused = true)]
    async fn test_event_timeline_matches_fixed_delays() {
        let start = Instant::now();
        let mut handle = BootHandle::start(script(&["a", "b", "c"]), &Handle::current());

        let mut timeline = Vec::new();
        while let Some(event) = handle.next().await {
            timeline.push((start.elapsed(), event));
        }

        assert_eq!(
            timeline,
            vec![
                (Duration::from_millis(300), BootEvent::Line("a".to_string())),
                (Duration::from_millis(600), BootEvent::Line("b".to_string())),
                (Duration::from_millis(900), BootEvent::Line("c".to_string())),
                // exhausted tick at 1200ms, then settle
                (Duration::from_millis(2200), BootEvent::BeginTransition),
                (Duration::from_millis(5200), BootEvent::Complete),
            ]
        );
        assert!(handle.is_finished());
    }

    #[tokio::test(start_paused = true)]
    async fn test_default_script_emits_every_line_then_one_completion() {
        let mut handle = BootHandle::start(BootSequencer::default(), &Handle::current());

        let mut events = Vec::new();
        while let Some(event) = handle.next().await {
            events.push(event);
        }

        let lines: Vec<String> = events
            .iter()
            .filter_map(|e| match e {
                BootEvent::Line(l) => Some(l.clone()),
                _ => None,
            })
            .collect();
        assert_eq!(lines, DEFAULT_BOOT_MESSAGES.to_vec());

        let transition_at = events
            .iter()
            .position(|e| *e == BootEvent::BeginTransition)
            .unwrap();
        assert_eq!(transition_at, DEFAULT_BOOT_MESSAGES.len());
        assert_eq!(
            events.iter().filter(|e| **e == BootEvent::Complete).count(),
            1
        );
        assert_eq!(events.last(), Some(&BootEvent::Complete));
    }

    #[tokio::test(start_paused = true)]
    async fn test_try_next_does_not_block() {
        let mut handle = BootHandle::start(script(&["only"]), &Handle::current());

        assert_eq!(handle.try_next(), None);

        tokio::time::sleep(Duration::from_millis(301)).await;
        assert_eq!(handle.try_next(), Some(BootEvent::Line("only".to_string())));
        assert_eq!(handle.try_next(), None);
    }

    #[tokio::test(start_paused = true)]
    async fn test_no_events_after_cancel() {
        let mut handle = BootHandle::start(script(&["a", "b", "c"]), &Handle::current());

        assert_eq!(handle.next().await, Some(BootEvent::Line("a".to_string())));
        handle.cancel();

        tokio::time::sleep(Duration::from_secs(30)).await;
        assert_eq!(handle.next().await, None);
        assert!(handle.is_finished());
    }

    #[tokio::test(start_paused = true)]
    async fn test_dropping_handle_stops_the_sequence() {
        let start = Instant::now();
        let mut handle = BootHandle::start(script(&["a", "b", "c"]), &Handle::current());
        assert_eq!(handle.next().await, Some(BootEvent::Line("a".to_string())));

        let task = handle.abort_handle();
        drop(handle);

        // Far earlier than the sequence would finish on its own
        tokio::time::sleep(Duration::from_millis(10)).await;
        assert!(task.is_finished());
        assert!(start.elapsed() < Duration::from_millis(600));
    }
}
