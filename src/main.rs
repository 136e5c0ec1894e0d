use env_logger::Env;
use fltk::{app, dialog, prelude::*};

use note_to_gist::app::plugin::present_upload;
use note_to_gist::app::{DataFile, DesktopHost, GistPlugin, GitHubClient, Message};
use note_to_gist::ui::dialogs::settings_panel::show_settings_panel;
use note_to_gist::ui::file_dialogs::{native_open_dialog, NOTE_FILTER};
use note_to_gist::ui::main_window::build_main_window;
use note_to_gist::ui::menu::build_menu;

fn main() {
    env_logger::Builder::from_env(Env::default().default_filter_or("info")).init();

    let app = app::App::default();
    let (sender, receiver) = app::channel::<Message>();

    let mut widgets = build_main_window();

    let mut plugin = GistPlugin::new(GitHubClient::new());
    let store = DataFile::default_location();
    log::info!("Plugin data at {}", store.path().display());

    let mut host = DesktopHost::new(widgets.buffer.clone(), widgets.wind.clone(), store);
    plugin.on_load(&host);

    build_menu(&mut widgets.menu, &sender, plugin.commands());

    // Opening a note given on the command line makes it the active one
    if let Some(path) = std::env::args().nth(1) {
        if let Err(e) = host.open_note(&path) {
            dialog::alert_default(&format!("Error opening file: {}", e));
        }
    }

    widgets.wind.show();

    let mut settings_panel: Option<fltk::window::Window> = None;

    while app.wait() {
        let Some(msg) = receiver.recv() else {
            continue;
        };

        match msg {
            Message::FileOpen => {
                if let Some(path) = native_open_dialog(NOTE_FILTER) {
                    if let Err(e) = host.open_note(&path) {
                        dialog::alert_default(&format!("Error opening file: {}", e));
                    }
                }
            }
            Message::FileQuit => {
                app.quit();
            }
            Message::RunCommand(id) => {
                let s = sender;
                let known = plugin.execute_command(id, &mut host, move |result| {
                    s.send(Message::UploadFinished(result.map_err(|e| e.to_string())));
                });
                if !known {
                    log::warn!("Unknown command {}", id);
                }
            }
            Message::UploadFinished(result) => {
                present_upload(result, &mut host);
            }
            Message::OpenSettings => {
                if let Some(mut panel) = settings_panel.take() {
                    panel.hide();
                }
                settings_panel = Some(show_settings_panel(plugin.settings(), &sender));
            }
            Message::GithubTokenChanged(value) => {
                if let Err(e) = plugin.set_github_token(&value, &mut host) {
                    log::error!("Failed to save settings: {}", e);
                    dialog::alert_default(&format!("Failed to save settings: {}", e));
                }
            }
        }
    }

    plugin.on_unload();
}
