use crate::ui::app::App;
use crate::ui::footer::Footer;
use crate::ui::header::Header;
use crate::ui::layout::layout_regions;
use crate::ui::page::render_page;
use crate::ui::selection::render_selection_dialog;
use ratatui::widgets::Clear;
use ratatui::Frame;

pub fn draw(frame: &mut Frame<'_>, app: &App) {
    let area = frame.area();
    let (header, body, footer) = layout_regions(area);
    let theme = app.theme();

    frame.render_widget(Header::new(app.page().page).widget(), header);
    frame.render_widget(Clear, body);
    render_page(frame, body, app.page(), app.store(), &theme);
    frame.render_widget(Footer::new(app.focus()).widget(footer), footer);

    render_selection_dialog(frame, body, app.dialog(), &theme);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::PrefStore;
    use crate::prefs::PrefId;
    use crate::ui::page::PageId;
    use ratatui::backend::TestBackend;
    use ratatui::Terminal;

    fn screen(app: &App) -> String {
        let mut terminal = Terminal::new(TestBackend::new(80, 30)).unwrap();
        terminal.draw(|frame| draw(frame, app)).unwrap();
        terminal
            .backend()
            .buffer()
            .content()
            .iter()
            .map(|cell| cell.symbol())
            .collect()
    }

    #[test]
    fn draws_tabs_page_and_hints() {
        let app = App::new(Box::new(PrefStore::in_memory()), PageId::Dock);
        let text = screen(&app);
        assert!(text.contains("Dock"));
        assert!(text.contains("App Drawer"));
        assert!(text.contains("Hide dock"));
        assert!(text.contains("Tab: Page"));
    }

    #[test]
    fn dialog_overlays_page_and_changes_hints() {
        let mut app = App::new(Box::new(PrefStore::in_memory()), PageId::Dock);
        app.open_dialog(PrefId::DockBackgroundColor);
        let text = screen(&app);
        assert!(text.contains("OK (Enter)"));
        assert!(text.contains("Esc: Cancel"));
    }
}
