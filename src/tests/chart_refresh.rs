#[cfg(test)]
mod tests {
    use futures::executor::block_on;

    use crate::charts::{ ChartRoute, HOURLY_CHART_ID, SUMMARY_CHART_ID };
    use crate::tests::common::{ mocks::{ scoreboard, Harness, RecordingSource, RecordingSurface }, setup };
    use crate::theme::{ MemoryStore, Theme };

    #[test]
    fn test_switching_to_dark_reloads_both_charts() {
        setup();
        let source = RecordingSource::default();
        let surface = RecordingSurface::default();
        let mut harness = Harness::new(MemoryStore::with(Theme::Light), Theme::Light);
        block_on(harness.controller.attach_scoreboard(scoreboard(ChartRoute::new(3, 7), &source, &surface)));

        let refresh = harness.controller.on_change(true).expect("scoreboard attached");

        assert_eq!(surface.cleared()[2..], [HOURLY_CHART_ID.to_string(), SUMMARY_CHART_ID.to_string()]);
        assert_eq!(source.requested()[2..], [
            "/chart/hourly/r3h7?theme=dark".to_string(),
            "/chart/summary?theme=dark".to_string(),
        ]);

        block_on(refresh);
        let embedded: Vec<String> = surface.embedded().into_iter().map(|(container, _)| container).collect();
        assert_eq!(embedded.len(), 4);
        assert!(embedded[2..].contains(&HOURLY_CHART_ID.to_string()));
        assert!(embedded[2..].contains(&SUMMARY_CHART_ID.to_string()));
    }

    #[test]
    fn test_attach_loads_charts_for_current_theme() {
        setup();
        let source = RecordingSource::default();
        let surface = RecordingSurface::default();
        let mut harness = Harness::new(MemoryStore::default(), Theme::Dark);

        block_on(harness.controller.attach_scoreboard(scoreboard(ChartRoute::new(1, 2), &source, &surface)));

        assert_eq!(source.requested(), vec![
            "/chart/hourly/r1h2?theme=dark".to_string(),
            "/chart/summary?theme=dark".to_string(),
        ]);
        assert_eq!(surface.embedded().len(), 2);
    }

    #[test]
    fn test_no_scoreboard_means_no_fetch() {
        setup();
        let mut harness = Harness::new(MemoryStore::default(), Theme::Light);

        assert!(!harness.controller.has_scoreboard());
        assert!(harness.controller.on_change(true).is_none());
        assert_eq!(harness.controller.theme(), Theme::Dark);
    }

    #[test]
    fn test_detached_scoreboard_stops_refreshing() {
        setup();
        let source = RecordingSource::default();
        let surface = RecordingSurface::default();
        let mut harness = Harness::new(MemoryStore::default(), Theme::Light);
        block_on(harness.controller.attach_scoreboard(scoreboard(ChartRoute::new(1, 1), &source, &surface)));

        harness.controller.detach_scoreboard();

        assert!(harness.controller.on_change(true).is_none());
        assert_eq!(source.requested().len(), 2);
    }

    #[test]
    fn test_missing_containers_skip_the_refresh() {
        setup();
        let source = RecordingSource::default();
        let surface = RecordingSurface::without_containers();
        let mut harness = Harness::new(MemoryStore::default(), Theme::Light);
        block_on(harness.controller.attach_scoreboard(scoreboard(ChartRoute::new(1, 1), &source, &surface)));

        let refresh = harness.controller.on_change(true);
        block_on(refresh.expect("scoreboard attached"));

        assert!(source.requested().is_empty());
        assert!(surface.embedded().is_empty());
        assert_eq!(harness.controller.theme(), Theme::Dark);
    }

    #[test]
    fn test_failed_fetch_embeds_nothing() {
        setup();
        let source = RecordingSource::failing();
        let surface = RecordingSurface::default();
        let mut harness = Harness::new(MemoryStore::default(), Theme::Light);

        block_on(harness.controller.attach_scoreboard(scoreboard(ChartRoute::new(4, 9), &source, &surface)));

        assert_eq!(source.requested().len(), 2);
        assert_eq!(surface.cleared().len(), 2);
        assert!(surface.embedded().is_empty());
    }

    #[test]
    fn test_switch_theme_sequence_uses_latest_theme() {
        setup();
        let source = RecordingSource::default();
        let surface = RecordingSurface::default();
        let mut harness = Harness::new(MemoryStore::with(Theme::Dark), Theme::Light);
        block_on(harness.controller.attach_scoreboard(scoreboard(ChartRoute::new(2, 5), &source, &surface)));

        let first = harness.controller.on_change(false).expect("scoreboard attached");
        let second = harness.controller.on_change(true).expect("scoreboard attached");
        block_on(async {
            futures::join!(first, second);
        });

        let requested = source.requested();
        assert_eq!(requested.len(), 6);
        assert_eq!(requested[4], "/chart/hourly/r2h5?theme=dark");
        assert_eq!(requested[5], "/chart/summary?theme=dark");
        assert!(requested[2..4].iter().all(|path| path.ends_with("theme=light")));
    }
}
