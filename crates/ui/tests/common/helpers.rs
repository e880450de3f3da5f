#![allow(dead_code)]

use color_eyre::Result;
use color_eyre::eyre::eyre;
use ratatui::crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use std::cell::RefCell;
use std::collections::HashMap;
use warden_ui::{
    Clipboard, CodeList, CodeListItem, CodeListManager, CodeListProvider, DetailContext, DetailView, DetailViewError,
    ItemDetailView, ItemFields, UiConfig,
};

/// Clipboard that records what was copied, or fails on demand.
#[derive(Default)]
pub struct RecordingClipboard {
    pub copied: Vec<String>,
    pub fail: bool,
}

impl RecordingClipboard {
    pub fn failing() -> Self {
        Self {
            fail: true,
            ..Self::default()
        }
    }
}

impl Clipboard for RecordingClipboard {
    fn set_text(&mut self, text: &str) -> Result<()> {
        if self.fail {
            return Err(eyre!("Failed to access clipboard: no display"));
        }
        self.copied.push(text.to_string());
        Ok(())
    }
}

/// Code-list provider with fixed lists that remembers every request.
#[derive(Default)]
pub struct FakeCodeLists {
    lists: HashMap<String, CodeList>,
    pub requests: RefCell<Vec<String>>,
}

impl FakeCodeLists {
    pub fn with(mut self, name: &str, items: &[(u32, &str)]) -> Self {
        let items = items.iter().map(|(i, l)| CodeListItem::new(*i, *l)).collect();
        self.lists.insert(name.to_string(), CodeList::new(items));
        self
    }
}

impl CodeListProvider for FakeCodeLists {
    fn get_list(&self, name: &str) -> Result<CodeList, DetailViewError> {
        self.requests.borrow_mut().push(name.to_string());
        self.lists
            .get(name)
            .cloned()
            .ok_or_else(|| DetailViewError::UnknownListName(name.to_string()))
    }
}

/// Built-in lists and default config, the way the binary wires them.
pub struct TestContext {
    pub lists: CodeListManager,
    pub config: UiConfig,
}

impl TestContext {
    pub fn new() -> Self {
        Self {
            lists: CodeListManager::with_builtin_lists(),
            config: UiConfig::default(),
        }
    }

    pub fn with_config(config: UiConfig) -> Self {
        Self {
            lists: config.code_list_manager(),
            config,
        }
    }

    pub fn ctx(&self) -> DetailContext<'_> {
        DetailContext {
            lists: &self.lists,
            config: &self.config,
        }
    }
}

pub fn key(code: KeyCode) -> KeyEvent {
    KeyEvent::new(code, KeyModifiers::NONE)
}

pub fn ctrl(c: char) -> KeyEvent {
    KeyEvent::new(KeyCode::Char(c), KeyModifiers::CONTROL)
}

pub fn press<F: ItemFields>(view: &mut ItemDetailView<F>, code: KeyCode, clipboard: &mut dyn Clipboard) {
    view.handle_key(key(code), clipboard);
}

pub fn type_text<F: ItemFields>(view: &mut ItemDetailView<F>, text: &str, clipboard: &mut dyn Clipboard) {
    for c in text.chars() {
        view.handle_key(key(KeyCode::Char(c)), clipboard);
    }
}

/// Renders the view into an in-memory terminal and returns the screen as text.
pub fn render_to_string(view: &dyn DetailView, width: u16, height: u16) -> String {
    let backend = ratatui::backend::TestBackend::new(width, height);
    let mut terminal = ratatui::Terminal::new(backend).expect("test terminal");
    terminal
        .draw(|f| {
            let area = f.area();
            view.draw(f, area);
        })
        .expect("draw");
    let buffer = terminal.backend().buffer();
    let mut screen = String::new();
    for y in 0..buffer.area.height {
        for x in 0..buffer.area.width {
            screen.push_str(buffer[(x, y)].symbol());
        }
        screen.push('\n');
    }
    screen
}
