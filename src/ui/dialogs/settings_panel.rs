use fltk::{
    app::Sender,
    enums::{Align, CallbackTrigger, Color, Font},
    frame::Frame,
    group::Flex,
    input::SecretInput,
    prelude::*,
    window::Window,
};

use crate::app::domain::messages::Message;
use crate::app::domain::settings::GistSettings;

/// Show the settings panel. It is not modal: every edit of the token field
/// is sent as `GithubTokenChanged` and handled by the main dispatch loop.
pub fn show_settings_panel(current: &GistSettings, sender: &Sender<Message>) -> Window {
    let mut panel = Window::default()
        .with_size(420, 170)
        .with_label("Settings")
        .center_screen();

    let mut flex = Flex::new(15, 15, 390, 140, None);
    flex.set_type(fltk::group::FlexType::Column);
    flex.set_spacing(6);

    let mut heading = Frame::default().with_label("Note to Gist Settings");
    heading.set_label_size(18);
    heading.set_label_font(Font::HelveticaBold);
    heading.set_align(Align::Left | Align::Inside);
    flex.fixed(&heading, 35);

    let mut name = Frame::default().with_label("GitHub Personal Access Token");
    name.set_align(Align::Left | Align::Inside);
    flex.fixed(&name, 22);

    let mut desc = Frame::default().with_label("Requires gist permission");
    desc.set_label_size(11);
    desc.set_label_color(Color::from_rgb(100, 100, 100));
    desc.set_align(Align::Left | Align::Inside);
    flex.fixed(&desc, 18);

    let mut token_input = SecretInput::default();
    token_input.set_tooltip("GitHub Token");
    token_input.set_value(&current.github_token);
    token_input.set_trigger(CallbackTrigger::Changed);
    flex.fixed(&token_input, 30);

    flex.end();
    panel.end();

    let s = *sender;
    token_input.set_callback(move |input| {
        s.send(Message::GithubTokenChanged(input.value()));
    });

    panel.show();
    panel
}
