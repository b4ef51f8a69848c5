use crate::ui::activity::render_activity_dialog;
use crate::ui::app::{App, PopupKind};
use crate::ui::footer::Footer;
use crate::ui::header::Header;
use crate::ui::layout::layout_regions;
use crate::ui::student_list::render_student_list;
use ratatui::widgets::Clear;
use ratatui::Frame;

pub fn draw(frame: &mut Frame<'_>, app: &App) {
    let area = frame.area();
    let (header, body, footer) = layout_regions(area);

    frame.render_widget(Header::new().widget(app), header);
    frame.render_widget(Clear, body);
    render_student_list(frame, body, app);
    frame.render_widget(Footer::new().widget(app, footer), footer);

    if let Some(PopupKind::Activity) = app.popup_kind() {
        render_activity_dialog(frame, app.activity_dialog());
    }
}
