use std::sync::Arc;
use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};
use std::time::Duration;

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use pokedex_core::{CatalogEntry, CatalogPage, CatalogSource, EntryDetail, FetchError};
use pokedex_tui::app::state::{AppMode, DetailState, FetchResult};
use pokedex_tui::{App, KeyAction, ThemeVariant, TuiConfig};

/// In-memory catalogue of `mon-1`, `mon-2`, ...
struct FakeCatalog {
    names: Vec<String>,
    fail_pages: AtomicBool,
    hold_details: AtomicBool,
    details_started: Arc<AtomicUsize>,
    details_dropped: Arc<AtomicUsize>,
}

/// Counts drops of a held detail request.
struct DropFlag(Arc<AtomicUsize>);

impl Drop for DropFlag {
    fn drop(&mut self) {
        self.0.fetch_add(1, Ordering::SeqCst);
    }
}

impl FakeCatalog {
    fn new(count: usize) -> Arc<Self> {
        Arc::new(Self {
            names: (1..=count).map(|i| format!("mon-{i}")).collect(),
            fail_pages: AtomicBool::new(false),
            hold_details: AtomicBool::new(false),
            details_started: Arc::new(AtomicUsize::new(0)),
            details_dropped: Arc::new(AtomicUsize::new(0)),
        })
    }
}

impl CatalogSource for FakeCatalog {
    async fn fetch_page(&self, page: u32, page_size: u32) -> Result<CatalogPage, FetchError> {
        let url = format!("fake://pokemon?page={page}");
        if self.fail_pages.load(Ordering::SeqCst) {
            return Err(FetchError::Status { url, status: 500 });
        }

        let start = ((page - 1) * page_size) as usize;
        let entries = self
            .names
            .iter()
            .enumerate()
            .skip(start)
            .take(page_size as usize)
            .map(|(i, name)| CatalogEntry::new(name.clone(), format!("ref/{}", i + 1)))
            .collect();

        Ok(CatalogPage {
            entries,
            total_count: self.names.len() as u32,
        })
    }

    async fn fetch_detail(&self, detail_ref: &str) -> Result<EntryDetail, FetchError> {
        if self.hold_details.load(Ordering::SeqCst) {
            self.details_started.fetch_add(1, Ordering::SeqCst);
            let _flag = DropFlag(Arc::clone(&self.details_dropped));
            std::future::pending::<()>().await;
        }

        Ok(EntryDetail {
            display_name: format!("Detail {detail_ref}"),
            image_uri: None,
            types: vec!["normal".to_string()],
            height: 3,
            weight: 40,
        })
    }
}

/// Catalogue whose listing requests panic mid-fetch.
struct PanickingCatalog;

impl CatalogSource for PanickingCatalog {
    async fn fetch_page(&self, page: u32, _page_size: u32) -> Result<CatalogPage, FetchError> {
        panic!("listing backend crashed on page {page}");
    }

    async fn fetch_detail(&self, detail_ref: &str) -> Result<EntryDetail, FetchError> {
        Err(FetchError::Status {
            url: format!("fake://pokemon/{detail_ref}"),
            status: 500,
        })
    }
}

/// Apply fetch results until nothing is in flight.
async fn settle(app: &mut App<FakeCatalog>) {
    while app.has_pending_fetch() {
        let result = tokio::time::timeout(Duration::from_secs(5), app.wait_for_fetch())
            .await
            .expect("fetch did not finish");
        app.handle_fetch_result(result);
    }
}

/// Apply fetch results until the listing has loaded.
async fn settle_page(app: &mut App<FakeCatalog>) {
    while app.is_loading() {
        let result = tokio::time::timeout(Duration::from_secs(5), app.wait_for_fetch())
            .await
            .expect("page fetch did not finish");
        app.handle_fetch_result(result);
    }
}

async fn wait_until(counter: &AtomicUsize, value: usize) {
    for _ in 0..200 {
        if counter.load(Ordering::SeqCst) >= value {
            return;
        }
        tokio::time::sleep(Duration::from_millis(10)).await;
    }
    panic!("counter never reached {value}");
}

fn key(c: char) -> KeyEvent {
    KeyEvent::new(KeyCode::Char(c), KeyModifiers::NONE)
}

fn names(app: &App<FakeCatalog>) -> Vec<String> {
    app.entries().iter().map(|e| e.name.clone()).collect()
}

#[tokio::test]
async fn test_initial_load() {
    let catalog = FakeCatalog::new(23);
    let mut app = App::new(Arc::clone(&catalog), TuiConfig::default());
    assert_eq!(app.total_pages(), 0);

    app.start();
    assert!(app.is_loading());
    assert!(app.is_navigation_disabled());

    settle(&mut app).await;
    assert!(!app.is_loading());
    assert!(!app.is_navigation_disabled());
    assert_eq!(app.current_page(), 1);
    assert_eq!(app.total_pages(), 5);
    assert_eq!(names(&app), ["mon-1", "mon-2", "mon-3", "mon-4", "mon-5"]);
    assert_eq!(app.selected_entry().map(|e| e.name.as_str()), Some("mon-1"));

    match app.detail() {
        DetailState::Loaded(detail) => assert_eq!(detail.display_name, "Detail ref/1"),
        other => panic!("unexpected detail state: {other:?}"),
    }
}

#[tokio::test]
async fn test_next_and_previous_page() {
    let catalog = FakeCatalog::new(23);
    let mut app = App::new(catalog, TuiConfig::default());
    app.start();
    settle(&mut app).await;

    app.handle_action(KeyAction::NextPage);
    assert!(app.is_loading());
    assert_eq!(app.current_page(), 2);
    settle(&mut app).await;
    assert_eq!(names(&app)[0], "mon-6");

    app.handle_action(KeyAction::LastPage);
    settle(&mut app).await;
    assert_eq!(app.current_page(), 5);
    assert_eq!(names(&app), ["mon-21", "mon-22", "mon-23"]);

    // Next on the last page does nothing
    app.handle_action(KeyAction::NextPage);
    assert!(!app.is_loading());
    assert_eq!(app.current_page(), 5);

    app.handle_action(KeyAction::PreviousPage);
    settle(&mut app).await;
    assert_eq!(app.current_page(), 4);
    assert_eq!(names(&app)[0], "mon-16");
}

#[tokio::test]
async fn test_navigation_blocked_while_loading() {
    let catalog = FakeCatalog::new(23);
    let mut app = App::new(catalog, TuiConfig::default());
    app.start();
    settle(&mut app).await;

    app.handle_action(KeyAction::NextPage);
    app.handle_action(KeyAction::NextPage);
    app.handle_action(KeyAction::LastPage);
    assert_eq!(app.current_page(), 2);

    settle(&mut app).await;
    assert_eq!(app.current_page(), 2);
    assert_eq!(names(&app)[0], "mon-6");
}

#[tokio::test]
async fn test_failed_page_clears_loading_and_retries() {
    let catalog = FakeCatalog::new(23);
    catalog.fail_pages.store(true, Ordering::SeqCst);
    let mut app = App::new(Arc::clone(&catalog), TuiConfig::default());

    app.start();
    settle(&mut app).await;
    assert!(!app.is_loading());
    assert!(!app.is_navigation_disabled());
    assert!(app.entries().is_empty());
    assert!(app.error().is_some_and(|e| e.contains("Failed to load page 1")));
    assert_eq!(app.detail(), &DetailState::Idle);

    catalog.fail_pages.store(false, Ordering::SeqCst);
    app.handle_action(KeyAction::Refresh);
    assert!(app.error().is_none());
    settle(&mut app).await;
    assert_eq!(app.entries().len(), 5);
    assert_eq!(app.total_pages(), 5);
}

#[tokio::test]
async fn test_panicked_page_fetch_clears_loading() {
    let mut app = App::new(Arc::new(PanickingCatalog), TuiConfig::default());
    app.start();
    assert!(app.is_loading());
    assert!(app.is_navigation_disabled());

    // The lost task is handled inside the wait; with nothing left in flight
    // the wait then never yields a result
    let waited = tokio::time::timeout(Duration::from_millis(500), app.wait_for_fetch()).await;
    assert!(waited.is_err());

    assert!(!app.has_pending_fetch());
    assert!(!app.is_loading());
    assert!(!app.is_navigation_disabled());
    assert_eq!(app.error(), Some("Failed to load page 1"));
    assert!(app.entries().is_empty());
}

#[tokio::test]
async fn test_start_page_applied_after_first_load() {
    let catalog = FakeCatalog::new(23);
    let mut app = App::new(catalog, TuiConfig::default().with_start_page(4));
    app.start();
    settle(&mut app).await;

    assert_eq!(app.current_page(), 4);
    assert_eq!(names(&app)[0], "mon-16");
}

#[tokio::test]
async fn test_start_page_past_end_is_clamped() {
    let catalog = FakeCatalog::new(23);
    let mut app = App::new(catalog, TuiConfig::default().with_start_page(99));
    app.start();
    settle(&mut app).await;

    assert_eq!(app.current_page(), 5);
    assert_eq!(names(&app), ["mon-21", "mon-22", "mon-23"]);
}

#[tokio::test]
async fn test_empty_catalogue() {
    let catalog = FakeCatalog::new(0);
    let mut app = App::new(catalog, TuiConfig::default());
    app.start();
    settle(&mut app).await;

    assert_eq!(app.total_pages(), 0);
    assert_eq!(app.current_page(), 1);
    assert!(app.entries().is_empty());
    assert!(app.selected_entry().is_none());
    assert_eq!(app.detail(), &DetailState::Idle);
}

#[tokio::test]
async fn test_new_selection_cancels_detail_fetch() {
    let catalog = FakeCatalog::new(23);
    catalog.hold_details.store(true, Ordering::SeqCst);
    let mut app = App::new(Arc::clone(&catalog), TuiConfig::default());

    app.start();
    settle_page(&mut app).await;
    assert_eq!(app.detail(), &DetailState::Loading("ref/1".to_string()));
    wait_until(&catalog.details_started, 1).await;

    app.handle_action(KeyAction::MoveDown);
    assert_eq!(app.detail(), &DetailState::Loading("ref/2".to_string()));
    wait_until(&catalog.details_dropped, 1).await;

    // Changing page drops the remaining detail request too
    wait_until(&catalog.details_started, 2).await;
    app.handle_action(KeyAction::NextPage);
    assert_eq!(app.detail(), &DetailState::Idle);
    wait_until(&catalog.details_dropped, 2).await;
}

#[tokio::test]
async fn test_stale_results_are_ignored() {
    let catalog = FakeCatalog::new(23);
    let mut app = App::new(catalog, TuiConfig::default());
    app.start();
    settle(&mut app).await;
    let before = names(&app);

    app.handle_fetch_result(FetchResult::Page {
        page: 3,
        result: Ok(CatalogPage::default()),
    });
    assert_eq!(names(&app), before);
    assert_eq!(app.current_page(), 1);

    app.handle_fetch_result(FetchResult::Detail {
        detail_ref: "ref/99".to_string(),
        result: Err(FetchError::Status {
            url: "fake://pokemon/99".to_string(),
            status: 404,
        }),
    });
    assert!(matches!(app.detail(), DetailState::Loaded(_)));
}

#[tokio::test]
async fn test_page_prompt_jumps_to_page() {
    let catalog = FakeCatalog::new(23);
    let mut app = App::new(catalog, TuiConfig::default());
    app.start();
    settle(&mut app).await;

    app.handle_key(key(':'));
    assert_eq!(app.mode(), AppMode::Command);
    app.handle_key(key('3'));
    app.handle_key(KeyEvent::new(KeyCode::Enter, KeyModifiers::NONE));
    assert_eq!(app.mode(), AppMode::Normal);
    assert_eq!(app.current_page(), 3);

    settle(&mut app).await;
    assert_eq!(names(&app)[0], "mon-11");

    app.handle_key(key(':'));
    for c in "warp 9".chars() {
        app.handle_key(key(c));
    }
    app.handle_key(KeyEvent::new(KeyCode::Enter, KeyModifiers::NONE));
    assert!(app.message().is_some_and(|m| m.contains("warp 9")));
    assert_eq!(app.current_page(), 3);
}

#[tokio::test]
async fn test_theme_help_and_quit() {
    let catalog = FakeCatalog::new(5);
    let mut app = App::new(catalog, TuiConfig::default());
    assert_eq!(app.theme_variant(), ThemeVariant::Dark);

    app.handle_action(KeyAction::ToggleTheme);
    assert_eq!(app.theme_variant(), ThemeVariant::Light);

    app.handle_action(KeyAction::ToggleHelp);
    assert_eq!(app.mode(), AppMode::Help);
    app.handle_action(KeyAction::NextPage);
    assert_eq!(app.mode(), AppMode::Help);
    app.handle_action(KeyAction::Cancel);
    assert_eq!(app.mode(), AppMode::Normal);

    app.handle_key(KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL));
    assert_eq!(app.mode(), AppMode::Quit);
}
