use fltk::{
    button::Button,
    dialog,
    enums::{Color, Font, FrameType},
    frame::Frame,
    group::Flex,
    prelude::*,
    window::Window,
};

/// Modal dialog linking to a freshly created gist.
pub fn show_gist_created_dialog(url: &str) {
    let mut dialog = Window::default()
        .with_size(380, 170)
        .with_label("Gist Created")
        .center_screen();
    dialog.make_modal(true);

    let mut flex = Flex::new(10, 10, 360, 150, None);
    flex.set_type(fltk::group::FlexType::Column);
    flex.set_spacing(10);

    let mut title = Frame::default().with_label("Gist Created");
    title.set_label_size(16);
    title.set_label_font(Font::HelveticaBold);
    flex.fixed(&title, 30);

    // Rendered as a hyperlink rather than a raised button
    let mut link = Button::default().with_label("Click to open gist");
    link.set_frame(FrameType::NoBox);
    link.set_down_frame(FrameType::NoBox);
    link.set_label_color(Color::Blue);
    link.set_tooltip(url);
    flex.fixed(&link, 30);

    let mut url_frame = Frame::default().with_label(url);
    url_frame.set_label_size(11);
    url_frame.set_label_color(Color::from_rgb(100, 100, 100));

    let mut close_btn = Button::default().with_label("Close");
    flex.fixed(&close_btn, 30);

    flex.end();
    dialog.end();

    let target = url.to_string();
    link.set_callback(move |_| {
        if let Err(e) = open::that(&target) {
            dialog::alert_default(&format!("Failed to open browser: {}", e));
        }
    });

    let mut dialog_close = dialog.clone();
    close_btn.set_callback(move |_| {
        dialog_close.hide();
    });

    dialog.show();
    super::run_dialog(&dialog);
}
