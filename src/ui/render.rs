use ratatui::widgets::Clear;
use ratatui::Frame;

use crate::ui::app::App;
use crate::ui::footer::Footer;
use crate::ui::header::Header;
use crate::ui::home::render_home;
use crate::ui::layout::layout_regions;
use crate::ui::login::render_login;
use crate::ui::nav::Destination;
use crate::ui::welcome::render_welcome;

pub fn draw(frame: &mut Frame<'_>, app: &App) {
    let area = frame.area();
    let (header, body, footer) = layout_regions(area);

    let header_widget = Header::new();
    frame.render_widget(header_widget.widget(app.nav()), header);

    frame.render_widget(Clear, body);
    // The render layer picks the layout for the current destination; the
    // navigator itself never touches widgets.
    match app.current() {
        Destination::Welcome => render_welcome(frame, body, app.welcome()),
        Destination::Login => render_login(frame, body, app.login()),
        Destination::Main => render_home(frame, body, app.home()),
    }

    let footer_widget = Footer::new();
    frame.render_widget(footer_widget.widget(footer, app.current()), footer);
}
